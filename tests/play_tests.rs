use wordle_pathfinder::{
    FeedbackPattern, GuessOutcome, InvalidGuess, PlaySession, SessionStatus, SolverError, Vocabulary, Word,
    WordError,
};

fn vocabulary() -> Vocabulary {
    Vocabulary::from_words(["crane", "slate", "trace", "crate", "raise", "arise", "stare"]).unwrap()
}

fn word(s: &str) -> Word {
    s.parse().unwrap()
}

#[test]
fn test_win_on_first_guess() {
    let vocab = vocabulary();
    let mut session = PlaySession::new(&vocab, word("crate"), 6).unwrap();

    assert_eq!(session.submit("crate"), GuessOutcome::Won { guesses: 1 });
    assert_eq!(session.status(), SessionStatus::Won);
    assert_eq!(session.history(), &[(word("crate"), FeedbackPattern::ALL_CORRECT)]);
}

#[test]
fn test_miss_reports_feedback() {
    let vocab = vocabulary();
    let mut session = PlaySession::new(&vocab, word("crate"), 6).unwrap();

    let outcome = session.submit("crane");
    assert_eq!(
        outcome,
        GuessOutcome::Continue {
            guess: word("crane"),
            feedback: FeedbackPattern::parse("GGGBG").unwrap(),
            guesses_left: 5,
        }
    );
    assert_eq!(session.status(), SessionStatus::InProgress);
}

#[test]
fn test_input_is_normalized() {
    let vocab = vocabulary();
    let mut session = PlaySession::new(&vocab, word("crate"), 6).unwrap();
    assert_eq!(session.submit("  CRATE\n"), GuessOutcome::Won { guesses: 1 });
}

#[test]
fn test_invalid_input_does_not_use_a_guess() {
    let vocab = vocabulary();
    let mut session = PlaySession::new(&vocab, word("crate"), 6).unwrap();

    assert_eq!(
        session.submit("cat"),
        GuessOutcome::Invalid(InvalidGuess::Malformed(WordError::WrongLength(3)))
    );
    assert_eq!(
        session.submit("cr4te"),
        GuessOutcome::Invalid(InvalidGuess::Malformed(WordError::InvalidCharacter('4')))
    );
    assert_eq!(
        session.submit("zebra"),
        GuessOutcome::Invalid(InvalidGuess::NotInVocabulary(word("zebra")))
    );
    assert_eq!(session.guesses_left(), 6);
    assert!(session.history().is_empty());
}

#[test]
fn test_running_out_of_guesses() {
    let vocab = vocabulary();
    let mut session = PlaySession::new(&vocab, word("crate"), 2).unwrap();

    assert!(matches!(session.submit("slate"), GuessOutcome::Continue { guesses_left: 1, .. }));
    assert!(matches!(session.submit("arise"), GuessOutcome::Continue { guesses_left: 0, .. }));
    assert_eq!(session.status(), SessionStatus::Lost);
    assert_eq!(session.submit("crate"), GuessOutcome::Invalid(InvalidGuess::GameOver));
}

#[test]
fn test_run_single_loop() {
    let vocab = vocabulary();
    let mut session = PlaySession::new(&vocab, word("stare"), 6).unwrap();
    let mut inputs = vec!["nope", "crane", "hello", "slate", "stare", "arise"].into_iter();
    let mut asked = Vec::new();
    let mut outcomes = Vec::new();

    let status = session.run(
        |number| {
            asked.push(number);
            inputs.next().map(String::from)
        },
        |outcome| outcomes.push(*outcome),
    );

    assert_eq!(status, SessionStatus::Won);
    assert_eq!(asked, vec![1, 1, 2, 2, 3]);
    assert_eq!(outcomes.last(), Some(&GuessOutcome::Won { guesses: 3 }));
    assert_eq!(outcomes.len(), 5);
}

#[test]
fn test_run_stops_when_input_ends() {
    let vocab = vocabulary();
    let mut session = PlaySession::new(&vocab, word("stare"), 6).unwrap();
    let status = session.run(|_| None, |_| {});
    assert_eq!(status, SessionStatus::InProgress);
}

#[test]
fn test_target_must_be_in_vocabulary() {
    let vocab = vocabulary();
    assert_eq!(
        PlaySession::new(&vocab, word("zebra"), 6).unwrap_err(),
        SolverError::UnknownWord(word("zebra"))
    );
}
