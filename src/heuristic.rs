//! Letter-frequency scoring over the remaining candidates.

use crate::filter::CandidateSet;
use crate::word::Word;

/// How often each letter occurs across a set of candidate words.
///
/// Repeated letters inside one candidate are counted every time they occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterFrequency {
    counts: [u32; 26],
}

impl LetterFrequency {
    pub fn build(candidates: &CandidateSet<'_>) -> Self {
        let mut counts = [0u32; 26];
        for word in candidates.iter() {
            for letter in word.letter_indices() {
                counts[letter] += 1;
            }
        }
        Self { counts }
    }

    pub fn count(&self, letter: char) -> u32 {
        if letter.is_ascii_lowercase() {
            self.counts[(letter as u8 - b'a') as usize]
        } else {
            0
        }
    }

    /// Negative sum of the counts of each distinct letter in `word`.
    ///
    /// Lower is better: the word covers letters common in the remaining
    /// candidates. This is a greedy ranking, not a distance estimate.
    pub fn score(&self, word: &Word) -> i64 {
        let mut seen = 0u32;
        let mut total = 0i64;
        for letter in word.letter_indices() {
            let bit = 1u32 << letter;
            if seen & bit == 0 {
                seen |= bit;
                total += i64::from(self.counts[letter]);
            }
        }
        -total
    }
}
