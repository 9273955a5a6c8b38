//! Core domain types for Hangman
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure and testable.

mod letters;
mod pattern;
mod word;

pub use letters::{ALPHABET_SIZE, FALLBACK_ORDER, LetterSet, fallback_rank, is_letter};
pub use pattern::{BLANK, Pattern, PatternError};
pub use word::{Word, WordError};
