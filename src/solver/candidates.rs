//! Candidate pruning
//!
//! Keeps the dictionary words still consistent with everything revealed so far.

use crate::core::{Pattern, Word};

/// Dictionary words consistent with the current game state
///
/// Borrows from the dictionary; every word has the same length and matches
/// the last pattern it was filtered with. Filtering never adds words back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet<'a> {
    word_length: usize,
    words: Vec<&'a Word>,
}

impl<'a> CandidateSet<'a> {
    /// Select every dictionary word of `target_length` letters
    ///
    /// Duplicates in the dictionary are kept. An empty result is a valid,
    /// if unwinnable, state.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Word;
    /// use hangman_solver::solver::CandidateSet;
    ///
    /// let dictionary: Vec<Word> = ["cat", "car", "cart"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    ///
    /// let candidates = CandidateSet::build(&dictionary, 3);
    /// assert_eq!(candidates.len(), 2);
    /// ```
    #[must_use]
    pub fn build(dictionary: &'a [Word], target_length: usize) -> Self {
        Self {
            word_length: target_length,
            words: dictionary
                .iter()
                .filter(|word| word.len() == target_length)
                .collect(),
        }
    }

    /// Keep the candidates that match `pattern`
    ///
    /// Returns a new snapshot; `self` is left untouched.
    #[must_use]
    pub fn filter(&self, pattern: &Pattern) -> Self {
        Self {
            word_length: self.word_length,
            words: self
                .words
                .iter()
                .copied()
                .filter(|word| pattern.matches(word))
                .collect(),
        }
    }

    /// Length shared by every candidate
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Word> + '_ {
        self.words.iter().copied()
    }
}
