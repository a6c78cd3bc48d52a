//! Best-first search over guess sequences.
//!
//! The search knows the target. Each frontier node carries the candidate set
//! its parent ended with; the node's own last guess is scored against the
//! target only when the node is popped, and the candidates are narrowed then.
//! Siblings share their parent's candidate set instead of copying it.

use crate::feedback::FeedbackPattern;
use crate::filter::{CandidateSet, Vocabulary};
use crate::heuristic::LetterFrequency;
use crate::word::Word;
use crate::DEFAULT_MAX_GUESSES;
use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

/// Search limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    max_guesses: usize,
    node_budget: Option<usize>,
    frontier_limit: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_GUESSES,
            node_budget: None,
            frontier_limit: None,
        }
    }
}

impl SearchConfig {
    /// Longest guess sequence the search will consider.
    pub fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    /// Give up with [`SearchOutcome::Cancelled`] after popping this many nodes.
    pub fn with_node_budget(mut self, nodes: usize) -> Self {
        self.node_budget = Some(nodes);
        self
    }

    /// Keep at most `limit` nodes on the frontier, dropping the most expensive
    /// ones after each expansion.
    ///
    /// A bounded frontier can discard the only route to the target, so a
    /// `NotFound` under a limit does not prove the target unreachable.
    pub fn with_frontier_limit(mut self, limit: usize) -> Self {
        self.frontier_limit = Some(limit);
        self
    }

    pub fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    pub fn node_budget(&self) -> Option<usize> {
        self.node_budget
    }

    pub fn frontier_limit(&self) -> Option<usize> {
        self.frontier_limit
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Guesses in order; the last one is the target.
    Solved(Vec<Word>),
    /// The frontier ran dry within the guess budget.
    NotFound,
    /// The node budget ran out first.
    Cancelled,
}

impl SearchOutcome {
    pub fn path(&self) -> Option<&[Word]> {
        match self {
            SearchOutcome::Solved(path) => Some(path),
            _ => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved(_))
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes_popped: usize,
    pub nodes_pushed: usize,
    pub peak_frontier: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

struct SearchNode<'v> {
    cost: i64,
    path: Vec<Word>,
    candidates: Rc<CandidateSet<'v>>,
}

impl SearchNode<'_> {
    /// Cost, then path length, then the path words themselves. Candidate
    /// sets never take part.
    fn priority_cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.path.len().cmp(&other.path.len()))
            .then_with(|| self.path.cmp(&other.path))
    }
}

impl PartialEq for SearchNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.priority_cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode<'_> {}

impl PartialOrd for SearchNode<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode<'_> {
    // Reversed so the max-heap pops the cheapest node.
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority_cmp(self)
    }
}

/// Best-first solver over one vocabulary.
#[derive(Debug, Clone)]
pub struct PathSearch<'v> {
    vocabulary: &'v Vocabulary,
    config: SearchConfig,
}

impl<'v> PathSearch<'v> {
    pub fn new(vocabulary: &'v Vocabulary, config: SearchConfig) -> Self {
        Self { vocabulary, config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn solve(&self, target: &Word) -> SearchOutcome {
        self.run(target).outcome
    }

    /// Search for `target` and report the outcome along with counters.
    pub fn run(&self, target: &Word) -> SearchReport {
        debug!(
            "searching for {} over {} words (max {} guesses)",
            target,
            self.vocabulary.len(),
            self.config.max_guesses
        );

        let mut stats = SearchStats::default();
        let mut frontier = BinaryHeap::new();
        frontier.push(SearchNode {
            cost: 0,
            path: Vec::new(),
            candidates: Rc::new(self.vocabulary.candidates()),
        });
        stats.nodes_pushed = 1;
        stats.peak_frontier = 1;

        let outcome = loop {
            let Some(node) = frontier.pop() else {
                break SearchOutcome::NotFound;
            };
            if self
                .config
                .node_budget
                .is_some_and(|budget| stats.nodes_popped >= budget)
            {
                break SearchOutcome::Cancelled;
            }
            stats.nodes_popped += 1;

            let SearchNode {
                cost,
                path,
                candidates,
            } = node;

            let candidates = match path.last() {
                Some(guess) => {
                    let pattern = FeedbackPattern::calculate(guess, target);
                    let narrowed = candidates.filter(guess, pattern);
                    trace!(
                        "{:?} -> {} leaves {} of {} candidates",
                        path,
                        pattern,
                        narrowed.len(),
                        candidates.len()
                    );
                    Rc::new(narrowed)
                }
                None => candidates,
            };

            if candidates.is_empty() {
                continue;
            }
            if path.last() == Some(target) {
                break SearchOutcome::Solved(path);
            }
            if path.len() >= self.config.max_guesses {
                continue;
            }

            let scorer = LetterFrequency::build(&candidates);
            for word in candidates.iter() {
                if path.contains(word) {
                    continue;
                }
                let mut child_path = Vec::with_capacity(path.len() + 1);
                child_path.extend_from_slice(&path);
                child_path.push(*word);
                frontier.push(SearchNode {
                    cost: cost + 1 + scorer.score(word),
                    path: child_path,
                    candidates: Rc::clone(&candidates),
                });
                stats.nodes_pushed += 1;
            }

            if let Some(limit) = self.config.frontier_limit {
                if frontier.len() > limit {
                    frontier = truncate_frontier(frontier, limit);
                }
            }
            stats.peak_frontier = stats.peak_frontier.max(frontier.len());
        };

        debug!(
            "search for {} finished: {:?} after {} pops ({} pushed, peak frontier {})",
            target, outcome, stats.nodes_popped, stats.nodes_pushed, stats.peak_frontier
        );
        SearchReport { outcome, stats }
    }
}

/// Keep only the `limit` cheapest nodes.
fn truncate_frontier(frontier: BinaryHeap<SearchNode<'_>>, limit: usize) -> BinaryHeap<SearchNode<'_>> {
    // Ascending by `Ord`, so the cheapest nodes sit at the end.
    let mut nodes = frontier.into_sorted_vec();
    let excess = nodes.len().saturating_sub(limit);
    nodes.drain(..excess);
    BinaryHeap::from(nodes)
}
