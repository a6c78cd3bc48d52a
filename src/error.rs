//! Error types for the solver.
//!
//! Only malformed input and unusable configuration are errors. A search that
//! fails to reach its target is a normal [`SearchOutcome`](crate::SearchOutcome).

use crate::word::Word;
use thiserror::Error;

/// Why a string is not a valid [`Word`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("expected 5 letters, found {0}")]
    WrongLength(usize),
    #[error("'{0}' is not a lowercase ascii letter")]
    InvalidCharacter(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// A target, guess or vocabulary entry failed the word shape check.
    #[error("invalid word {word:?}: {source}")]
    InvalidWord {
        word: String,
        #[source]
        source: WordError,
    },
    /// Nothing to search over.
    #[error("the vocabulary is empty")]
    EmptyVocabulary,
    #[error("word \"{0}\" is not in the vocabulary")]
    UnknownWord(Word),
}
