//! Hangman solving algorithms
//!
//! Candidate pruning, letter ranking, and the game loop that ties them together.

pub mod candidates;
mod engine;
pub mod ranker;

pub use candidates::CandidateSet;
pub use engine::{GameOutcome, GameReport, GuessStep, Solver};
pub use ranker::{CountingMode, LetterRank, LetterRanker, RankedLetter, count_letters, rank};
