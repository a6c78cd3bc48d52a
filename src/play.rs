//! Rules for a human playing against a hidden target.
//!
//! No terminal I/O happens here: the caller feeds guesses in and renders the
//! [`GuessOutcome`] of each one however it likes.

use crate::error::{SolverError, WordError};
use crate::feedback::FeedbackPattern;
use crate::filter::Vocabulary;
use crate::word::Word;
use thiserror::Error;

/// Why a submitted guess was rejected. Rejections never use up a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidGuess {
    #[error("invalid guess: {0}")]
    Malformed(WordError),
    #[error("invalid guess, {0} is not in the word list")]
    NotInVocabulary(Word),
    #[error("the game is already over")]
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess was the target; `guesses` counts it.
    Won { guesses: usize },
    /// A valid miss.
    Continue {
        guess: Word,
        feedback: FeedbackPattern,
        guesses_left: usize,
    },
    Invalid(InvalidGuess),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Won,
    Lost,
}

#[derive(Debug, Clone)]
pub struct PlaySession<'v> {
    vocabulary: &'v Vocabulary,
    target: Word,
    max_guesses: usize,
    history: Vec<(Word, FeedbackPattern)>,
    status: SessionStatus,
}

impl<'v> PlaySession<'v> {
    /// The target has to be a vocabulary word, otherwise the game could never
    /// be won.
    pub fn new(vocabulary: &'v Vocabulary, target: Word, max_guesses: usize) -> Result<Self, SolverError> {
        if !vocabulary.contains(&target) {
            return Err(SolverError::UnknownWord(target));
        }
        let status = if max_guesses == 0 {
            SessionStatus::Lost
        } else {
            SessionStatus::InProgress
        };
        Ok(Self {
            vocabulary,
            target,
            max_guesses,
            history: Vec::with_capacity(max_guesses),
            status,
        })
    }

    pub fn target(&self) -> &Word {
        &self.target
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Valid guesses so far, with their feedback.
    pub fn history(&self) -> &[(Word, FeedbackPattern)] {
        &self.history
    }

    pub fn guesses_left(&self) -> usize {
        self.max_guesses - self.history.len()
    }

    /// Play one guess. Input is trimmed and lowercased first.
    pub fn submit(&mut self, input: &str) -> GuessOutcome {
        if self.status != SessionStatus::InProgress {
            return GuessOutcome::Invalid(InvalidGuess::GameOver);
        }

        let input = input.trim().to_lowercase();
        let guess = match Word::new(&input) {
            Ok(word) => word,
            Err(err) => return GuessOutcome::Invalid(InvalidGuess::Malformed(err)),
        };
        if !self.vocabulary.contains(&guess) {
            return GuessOutcome::Invalid(InvalidGuess::NotInVocabulary(guess));
        }

        let feedback = FeedbackPattern::calculate(&guess, &self.target);
        self.history.push((guess, feedback));

        if feedback.is_win() {
            self.status = SessionStatus::Won;
            return GuessOutcome::Won {
                guesses: self.history.len(),
            };
        }

        let guesses_left = self.guesses_left();
        if guesses_left == 0 {
            self.status = SessionStatus::Lost;
        }
        GuessOutcome::Continue {
            guess,
            feedback,
            guesses_left,
        }
    }

    /// Drive the game until it ends or `next_input` runs dry.
    ///
    /// `next_input` receives the number of the guess being asked for,
    /// starting at 1; invalid input asks for the same number again.
    pub fn run<I, O>(&mut self, mut next_input: I, mut on_outcome: O) -> SessionStatus
    where
        I: FnMut(usize) -> Option<String>,
        O: FnMut(&GuessOutcome),
    {
        while self.status == SessionStatus::InProgress {
            let Some(input) = next_input(self.history.len() + 1) else {
                break;
            };
            let outcome = self.submit(&input);
            on_outcome(&outcome);
        }
        self.status
    }
}
