//! Vocabulary storage and candidate pruning.
//!
//! A [`Vocabulary`] fixes an ordering of the valid words, and every
//! [`CandidateSet`] is a bitset over that ordering. Filtering keeps exactly
//! the words that would have produced the observed feedback had they been the
//! target.

use crate::error::SolverError;
use crate::feedback::FeedbackPattern;
use crate::word::Word;
use std::fmt;

const BLOCK_BITS: usize = u64::BITS as usize;

/// The ordered, duplicate-free list of words a search may guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<Word>,
}

impl Vocabulary {
    /// Parse and validate every entry. Duplicates are collapsed.
    pub fn from_words<I, S>(words: I) -> Result<Self, SolverError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().parse())
            .collect::<Result<Vec<Word>, SolverError>>()?;
        Self::new(words)
    }

    pub fn new(mut words: Vec<Word>) -> Result<Self, SolverError> {
        if words.is_empty() {
            return Err(SolverError::EmptyVocabulary);
        }
        words.sort_unstable();
        words.dedup();
        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Never true for a constructed vocabulary.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn index_of(&self, word: &Word) -> Option<usize> {
        self.words.binary_search(word).ok()
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.index_of(word).is_some()
    }

    /// Every word in the vocabulary as a candidate.
    pub fn candidates(&self) -> CandidateSet<'_> {
        let mut set = CandidateSet::empty(self);
        for idx in 0..self.words.len() {
            set.insert(idx);
        }
        set
    }
}

/// A subset of one [`Vocabulary`].
#[derive(Clone)]
pub struct CandidateSet<'v> {
    vocabulary: &'v Vocabulary,
    blocks: Vec<u64>,
    len: usize,
}

impl<'v> CandidateSet<'v> {
    fn empty(vocabulary: &'v Vocabulary) -> Self {
        Self {
            vocabulary,
            blocks: vec![0; vocabulary.len().div_ceil(BLOCK_BITS)],
            len: 0,
        }
    }

    /// Build a set from specific vocabulary words.
    pub fn from_words<'w>(
        vocabulary: &'v Vocabulary,
        words: impl IntoIterator<Item = &'w Word>,
    ) -> Result<Self, SolverError> {
        let mut set = Self::empty(vocabulary);
        for word in words {
            let idx = vocabulary
                .index_of(word)
                .ok_or(SolverError::UnknownWord(*word))?;
            set.insert(idx);
        }
        Ok(set)
    }

    fn insert(&mut self, idx: usize) {
        let mask = 1u64 << (idx % BLOCK_BITS);
        let block = &mut self.blocks[idx / BLOCK_BITS];
        if *block & mask == 0 {
            *block |= mask;
            self.len += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn vocabulary(&self) -> &'v Vocabulary {
        self.vocabulary
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.vocabulary
            .index_of(word)
            .is_some_and(|idx| self.blocks[idx / BLOCK_BITS] & (1u64 << (idx % BLOCK_BITS)) != 0)
    }

    fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.blocks.iter().enumerate().flat_map(|(block, &bits)| {
            let mut remaining = bits;
            std::iter::from_fn(move || {
                if remaining == 0 {
                    return None;
                }
                let bit = remaining.trailing_zeros() as usize;
                remaining &= remaining - 1;
                Some(block * BLOCK_BITS + bit)
            })
        })
    }

    /// Members in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = &'v Word> + '_ {
        let words = self.vocabulary.words();
        self.indices().map(move |idx| &words[idx])
    }

    /// Keep the words that, as the target, would have scored `guess` with
    /// exactly `pattern`.
    pub fn filter(&self, guess: &Word, pattern: FeedbackPattern) -> CandidateSet<'v> {
        let words = self.vocabulary.words();
        let mut kept = Self::empty(self.vocabulary);
        for idx in self.indices() {
            if FeedbackPattern::calculate(guess, &words[idx]) == pattern {
                kept.insert(idx);
            }
        }
        kept
    }
}

impl fmt::Debug for CandidateSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Word::as_str)).finish()
    }
}
