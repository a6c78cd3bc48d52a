//! Feedback simulation for a guess against a known target.
//!
//! Duplicate letters are resolved in two passes: every exact match is settled
//! first, and only then are the leftover target letters handed out to
//! misplaced guess letters from left to right.

use crate::word::Word;
use crate::WORD_LENGTH;
use std::fmt;

/// Feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in correct position (green)
    Correct,
    /// Correct letter in wrong position (yellow)
    Present,
    /// Letter not in word, or every copy already accounted for (gray)
    Absent,
}

impl Feedback {
    /// `G`, `Y` or `B`.
    pub fn to_letter(self) -> char {
        match self {
            Feedback::Correct => 'G',
            Feedback::Present => 'Y',
            Feedback::Absent => 'B',
        }
    }

    pub fn to_emoji(self) -> char {
        match self {
            Feedback::Correct => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }

    /// Parse from a character (g=green, y=yellow, b=black/gray)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(Feedback::Correct),
            'y' | '1' => Some(Feedback::Present),
            'b' | 'x' | '0' => Some(Feedback::Absent),
            _ => None,
        }
    }

    fn digit(self) -> u8 {
        match self {
            Feedback::Absent => 0,
            Feedback::Present => 1,
            Feedback::Correct => 2,
        }
    }
}

/// A complete feedback sequence for one guess.
///
/// Packed into a single byte as `p0 + 3*p1 + 9*p2 + 27*p3 + 81*p4`, each
/// position being 0 (absent), 1 (present) or 2 (correct).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackPattern(u8);

impl FeedbackPattern {
    /// Every letter in place.
    pub const ALL_CORRECT: Self = Self(2 + 2 * 3 + 2 * 9 + 2 * 27 + 2 * 81);

    /// Nothing in common with the target.
    pub const ALL_ABSENT: Self = Self(0);

    /// Total number of possible patterns (3^5)
    pub const NUM_PATTERNS: usize = 243;

    pub fn new(feedbacks: [Feedback; WORD_LENGTH]) -> Self {
        let packed = feedbacks
            .iter()
            .rev()
            .fold(0u8, |acc, fb| acc * 3 + fb.digit());
        Self(packed)
    }

    /// Score `guess` against `target`.
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let guess = guess.as_bytes();
        let target = target.as_bytes();

        let mut feedback = [Feedback::Absent; WORD_LENGTH];
        let mut target_remaining = [0u8; 26];

        for i in 0..WORD_LENGTH {
            if guess[i] == target[i] {
                feedback[i] = Feedback::Correct;
            } else {
                target_remaining[(target[i] - b'a') as usize] += 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if feedback[i] == Feedback::Correct {
                continue;
            }
            let idx = (guess[i] - b'a') as usize;
            if target_remaining[idx] > 0 {
                feedback[i] = Feedback::Present;
                target_remaining[idx] -= 1;
            }
        }

        Self::new(feedback)
    }

    pub fn to_feedbacks(self) -> [Feedback; WORD_LENGTH] {
        let mut packed = self.0;
        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        for feedback in feedbacks.iter_mut() {
            *feedback = match packed % 3 {
                0 => Feedback::Absent,
                1 => Feedback::Present,
                _ => Feedback::Correct,
            };
            packed /= 3;
        }
        feedbacks
    }

    /// The packed base-3 value, `0..NUM_PATTERNS`.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn is_win(self) -> bool {
        self == Self::ALL_CORRECT
    }

    /// Parse a pattern from a string like "GYBBB", "gybbb" or "21000".
    pub fn parse(s: &str) -> Option<Self> {
        if s.chars().count() != WORD_LENGTH {
            return None;
        }
        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        for (slot, c) in feedbacks.iter_mut().zip(s.chars()) {
            *slot = Feedback::from_char(c)?;
        }
        Some(Self::new(feedbacks))
    }

    pub fn to_emoji_string(self) -> String {
        self.to_feedbacks().iter().map(|f| f.to_emoji()).collect()
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: String = self.to_feedbacks().iter().map(|f| f.to_letter()).collect();
        f.write_str(&letters)
    }
}
