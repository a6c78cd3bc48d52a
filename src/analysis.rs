//! Solvability analysis: run the search for every word of a vocabulary.

use crate::filter::Vocabulary;
use crate::search::{PathSearch, SearchConfig, SearchOutcome};
use crate::word::Word;
use log::debug;
use rayon::prelude::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolvabilityReport {
    /// `(guesses, targets solved in that many guesses)`, shortest first.
    pub distribution: Vec<(usize, usize)>,
    /// Targets whose search exhausted the frontier.
    pub unsolved: Vec<Word>,
    /// Targets whose search ran out of node budget.
    pub cancelled: Vec<Word>,
}

impl SolvabilityReport {
    pub fn solved(&self) -> usize {
        self.distribution.iter().map(|(_, count)| count).sum()
    }

    /// Mean solution length over solved targets, `None` if nothing was solved.
    pub fn average_guesses(&self) -> Option<f64> {
        let solved = self.solved();
        if solved == 0 {
            return None;
        }
        let total: usize = self.distribution.iter().map(|(g, c)| g * c).sum();
        Some(total as f64 / solved as f64)
    }

    pub fn all_solved(&self) -> bool {
        self.unsolved.is_empty() && self.cancelled.is_empty()
    }
}

/// Solve for every vocabulary word as the target, in parallel.
pub fn analyze(vocabulary: &Vocabulary, config: SearchConfig) -> SolvabilityReport {
    let outcomes: Vec<(Word, SearchOutcome)> = vocabulary
        .words()
        .par_iter()
        .map(|target| (*target, PathSearch::new(vocabulary, config).solve(target)))
        .collect();

    let mut report = SolvabilityReport::default();
    let mut counts = vec![0usize; config.max_guesses() + 1];
    for (target, outcome) in outcomes {
        match outcome {
            SearchOutcome::Solved(path) => counts[path.len()] += 1,
            SearchOutcome::NotFound => report.unsolved.push(target),
            SearchOutcome::Cancelled => report.cancelled.push(target),
        }
    }
    report.distribution = counts
        .into_iter()
        .enumerate()
        .filter(|(_, count)| *count > 0)
        .collect();

    debug!(
        "analyzed {} targets: {} solved, {} unsolved, {} cancelled",
        vocabulary.len(),
        report.solved(),
        report.unsolved.len(),
        report.cancelled.len()
    );
    report
}
