use wordle_pathfinder::{
    analyze, solve, FeedbackPattern, PathSearch, SearchConfig, SearchOutcome, SolverError, Vocabulary, Word,
    WordError,
};

fn get_test_words() -> Vec<&'static str> {
    vec![
        "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast", "beast",
    ]
}

fn word(s: &str) -> Word {
    s.parse().unwrap()
}

fn path_strings(outcome: &SearchOutcome) -> Vec<String> {
    outcome
        .path()
        .map(|p| p.iter().map(Word::to_string).collect())
        .unwrap_or_default()
}

#[test]
fn test_solve_small_vocabulary() {
    let outcome = solve("crane", ["crane", "slate", "stare", "crate"], 6).unwrap();
    let path = path_strings(&outcome);
    assert!(outcome.is_solved());
    assert!(path.len() <= 6);
    assert_eq!(path.last().map(String::as_str), Some("crane"));
}

#[test]
fn test_solve_is_deterministic() {
    let vocabulary = ["crane", "slate", "stare", "crate"];
    let first = solve("crane", vocabulary, 6).unwrap();
    let second = solve("crane", vocabulary, 6).unwrap();
    assert_eq!(first, second);
    // crate and stare score best; crate wins the tie on the word itself.
    assert_eq!(path_strings(&first), vec!["crate", "crane"]);
}

#[test]
fn test_solve_various_targets() {
    let vocabulary = Vocabulary::from_words(get_test_words()).unwrap();
    let search = PathSearch::new(&vocabulary, SearchConfig::default());

    for target in vocabulary.words() {
        let outcome = search.solve(target);
        let path = outcome.path().unwrap_or_else(|| panic!("no path to {target}"));

        assert!(path.len() <= 6, "too many guesses for {target}");
        assert_eq!(path.last(), Some(target));

        let mut seen = path.to_vec();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), path.len(), "repeated guess on the way to {target}");
    }
}

#[test]
fn test_path_is_consistent_with_feedback() {
    let vocabulary = Vocabulary::from_words(get_test_words()).unwrap();
    let search = PathSearch::new(&vocabulary, SearchConfig::default());
    let target = word("trace");
    let outcome = search.solve(&target);
    let path = outcome.path().unwrap();

    // Every guess after the first agrees with the feedback from all earlier ones.
    for (i, guess) in path.iter().enumerate() {
        for earlier in &path[..i] {
            assert_eq!(
                FeedbackPattern::calculate(earlier, guess),
                FeedbackPattern::calculate(earlier, &target)
            );
        }
    }
}

#[test]
fn test_exhaustion_returns_not_found() {
    assert_eq!(solve("bbbbb", ["aaaaa"], 6).unwrap(), SearchOutcome::NotFound);
}

#[test]
fn test_single_word_vocabulary() {
    let outcome = solve("aaaaa", ["aaaaa"], 6).unwrap();
    assert_eq!(path_strings(&outcome), vec!["aaaaa"]);
}

#[test]
fn test_target_reached_on_last_allowed_guess() {
    let outcome = solve("crane", ["crane", "slate", "stare", "crate"], 1).unwrap();
    assert_eq!(path_strings(&outcome), vec!["crane"]);
}

#[test]
fn test_zero_guess_budget() {
    let outcome = solve("crane", ["crane", "slate"], 0).unwrap();
    assert_eq!(outcome, SearchOutcome::NotFound);
}

#[test]
fn test_empty_vocabulary_is_an_error() {
    let empty: Vec<&str> = Vec::new();
    assert_eq!(solve("crane", empty, 6), Err(SolverError::EmptyVocabulary));
}

#[test]
fn test_malformed_target_is_an_error() {
    assert_eq!(
        solve("cran", ["crane"], 6),
        Err(SolverError::InvalidWord {
            word: "cran".to_string(),
            source: WordError::WrongLength(4),
        })
    );
    assert_eq!(
        solve("cr-ne", ["crane"], 6),
        Err(SolverError::InvalidWord {
            word: "cr-ne".to_string(),
            source: WordError::InvalidCharacter('-'),
        })
    );
}

#[test]
fn test_node_budget_cancels() {
    let vocabulary = Vocabulary::from_words(["crane", "slate", "stare", "crate"]).unwrap();
    let target = word("crane");

    let tight = PathSearch::new(&vocabulary, SearchConfig::default().with_node_budget(1));
    assert_eq!(tight.solve(&target), SearchOutcome::Cancelled);

    let roomy = PathSearch::new(&vocabulary, SearchConfig::default().with_node_budget(100));
    assert!(roomy.solve(&target).is_solved());
}

#[test]
fn test_cancelled_is_distinct_from_not_found() {
    let vocabulary = Vocabulary::from_words(["aaaaa"]).unwrap();
    let target = word("bbbbb");

    let unbounded = PathSearch::new(&vocabulary, SearchConfig::default());
    assert_eq!(unbounded.solve(&target), SearchOutcome::NotFound);

    let zero = PathSearch::new(&vocabulary, SearchConfig::default().with_node_budget(0));
    assert_eq!(zero.solve(&target), SearchOutcome::Cancelled);
}

#[test]
fn test_report_counts_nodes() {
    let vocabulary = Vocabulary::from_words(["crane", "slate", "stare", "crate"]).unwrap();
    let search = PathSearch::new(&vocabulary, SearchConfig::default());
    let report = search.run(&word("crane"));

    assert!(report.outcome.is_solved());
    assert_eq!(report.stats.nodes_popped, 3);
    assert!(report.stats.nodes_pushed >= report.stats.nodes_popped);
    assert!(report.stats.peak_frontier >= 4);
}

#[test]
fn test_frontier_limit_still_solves() {
    let vocabulary = Vocabulary::from_words(get_test_words()).unwrap();
    let search = PathSearch::new(&vocabulary, SearchConfig::default().with_frontier_limit(3));

    for target in vocabulary.words() {
        let report = search.run(target);
        assert!(report.stats.peak_frontier <= 3);
        if let Some(path) = report.outcome.path() {
            assert_eq!(path.last(), Some(target));
        }
    }
}

#[test]
fn test_analyze_small_vocabulary() {
    let vocabulary = Vocabulary::from_words(get_test_words()).unwrap();
    let report = analyze(&vocabulary, SearchConfig::default());

    assert!(report.all_solved());
    assert_eq!(report.solved(), vocabulary.len());
    assert!(report.distribution.iter().all(|(guesses, _)| *guesses <= 6));
    let average = report.average_guesses().unwrap();
    assert!((1.0..=6.0).contains(&average));
}

#[test]
fn test_analyze_reports_unsolvable_targets() {
    let vocabulary = Vocabulary::from_words(get_test_words()).unwrap();
    let report = analyze(&vocabulary, SearchConfig::default().with_max_guesses(0));

    assert_eq!(report.unsolved.len(), vocabulary.len());
    assert!(report.distribution.is_empty());
    assert_eq!(report.average_guesses(), None);
}
