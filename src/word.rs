//! The fixed-length word value type.

use crate::error::{SolverError, WordError};
use crate::WORD_LENGTH;
use std::fmt;
use std::str::FromStr;

/// A five letter lowercase ascii word.
///
/// Ordering is lexicographic, the same as comparing the words as strings.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Check the shape of `s` without building a word.
    pub fn validate(s: &str) -> Result<(), WordError> {
        let length = s.chars().count();
        if length != WORD_LENGTH {
            return Err(WordError::WrongLength(length));
        }
        match s.chars().find(|c| !c.is_ascii_lowercase()) {
            Some(c) => Err(WordError::InvalidCharacter(c)),
            None => Ok(()),
        }
    }

    /// Build a word, reporting only the shape problem on failure.
    pub fn new(s: &str) -> Result<Self, WordError> {
        Word::validate(s)?;
        let mut bytes = [0u8; WORD_LENGTH];
        bytes.copy_from_slice(s.as_bytes());
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    /// Letter index (0 for 'a') of every position.
    pub fn letter_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().map(|&b| (b - b'a') as usize)
    }

    pub fn as_str(&self) -> &str {
        // Only ever constructed from validated ascii.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl FromStr for Word {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Word::new(s).map_err(|source| SolverError::InvalidWord {
            word: s.to_string(),
            source,
        })
    }
}

impl TryFrom<&str> for Word {
    type Error = SolverError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
