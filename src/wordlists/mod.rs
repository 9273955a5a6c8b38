//! Dictionaries for Hangman solving
//!
//! Provides an embedded word list compiled into the binary, plus loading from files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_lowercase_letters() {
        for &word in WORDS {
            assert!(!word.is_empty(), "empty entry in built-in dictionary");
            assert!(
                word.bytes().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_cover_several_lengths() {
        let lengths: std::collections::HashSet<usize> = WORDS.iter().map(|w| w.len()).collect();
        for length in 1..=8 {
            assert!(lengths.contains(&length), "no {length}-letter words");
        }
    }
}
