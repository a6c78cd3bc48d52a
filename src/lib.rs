//! # Wordle Pathfinder
//!
//! A best-first Wordle solver that knows the target and searches for a short
//! sequence of guesses reaching it.
//!
//! Guesses are ranked by a letter-frequency heuristic over the words still
//! consistent with the feedback seen so far, and the search expands the
//! cheapest partial guess sequence first.
//!
//! ```
//! use wordle_pathfinder::{solve, SearchOutcome};
//!
//! let outcome = solve("crane", ["crane", "slate", "stare", "crate"], 6)?;
//! let SearchOutcome::Solved(path) = outcome else {
//!     panic!("crane should be reachable");
//! };
//! assert_eq!(path.last().map(|w| w.as_str()), Some("crane"));
//! # Ok::<(), wordle_pathfinder::SolverError>(())
//! ```

pub mod analysis;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod heuristic;
pub mod play;
pub mod search;
pub mod word;

pub use analysis::{analyze, SolvabilityReport};
pub use error::{SolverError, WordError};
pub use feedback::{Feedback, FeedbackPattern};
pub use filter::{CandidateSet, Vocabulary};
pub use heuristic::LetterFrequency;
pub use play::{GuessOutcome, InvalidGuess, PlaySession, SessionStatus};
pub use search::{PathSearch, SearchConfig, SearchOutcome, SearchReport, SearchStats};
pub use word::Word;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Default guess budget, as in the real game.
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Feedback for `guess` played against `target`.
pub fn feedback(guess: &Word, target: &Word) -> FeedbackPattern {
    FeedbackPattern::calculate(guess, target)
}

/// Validate `target` and `vocabulary`, then run the best-first search.
///
/// Malformed words and an empty vocabulary are reported as [`SolverError`]s
/// before any searching happens. Failing to reach the target is not an error;
/// it comes back as [`SearchOutcome::NotFound`].
pub fn solve<I, S>(target: &str, vocabulary: I, max_guesses: usize) -> Result<SearchOutcome, SolverError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let target: Word = target.parse()?;
    let vocabulary = Vocabulary::from_words(vocabulary)?;
    let search = PathSearch::new(&vocabulary, SearchConfig::default().with_max_guesses(max_guesses));
    Ok(search.solve(&target))
}
