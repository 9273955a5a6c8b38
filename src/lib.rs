//! Hangman Solver
//!
//! Plays Hangman by pruning a dictionary to the words that fit the revealed
//! pattern and guessing the letter that occurs most often among them.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::core::Word;
//! use hangman_solver::session::LocalGame;
//! use hangman_solver::solver::{GameOutcome, LetterRanker, Solver};
//! use hangman_solver::wordlists::{WORDS, loader::words_from_slice};
//!
//! let dictionary = words_from_slice(WORDS);
//! let solver = Solver::new(&dictionary, LetterRanker::default());
//!
//! let mut game = LocalGame::new(Word::new("hangman").unwrap(), None);
//! let report = solver.play(&mut game).unwrap();
//! assert_eq!(report.outcome, GameOutcome::Won);
//! ```

// Core domain types
pub mod core;

// Candidate pruning, letter ranking, and the game loop
pub mod solver;

// Game server boundary
pub mod session;

// Server endpoint and retry settings
pub mod config;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
