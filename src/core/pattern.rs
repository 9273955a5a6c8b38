//! Revealed-word pattern
//!
//! A pattern is what the game shows after each guess: one cell per letter of
//! the secret word, either a revealed letter or a blank (`_` on the wire).

use super::{LetterSet, Word};
use std::fmt;

/// Wire marker for an unrevealed position
pub const BLANK: char = '_';

/// Positional reveal state of the secret word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    cells: Vec<Option<u8>>,
}

/// Error type for unparseable patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    Empty,
    InvalidCharacter(char),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Pattern must have at least one position"),
            Self::InvalidCharacter(c) => {
                write!(f, "Pattern may only contain letters and '{BLANK}', got {c:?}")
            }
        }
    }
}

impl std::error::Error for PatternError {}

impl Pattern {
    /// A fully blank pattern of the given length
    #[must_use]
    pub fn blank(len: usize) -> Self {
        Self {
            cells: vec![None; len],
        }
    }

    /// Parse the wire form, e.g. `"_a_"`
    ///
    /// Letters are case-insensitive.
    ///
    /// # Errors
    /// Returns `PatternError` if the input is empty or holds anything other
    /// than ASCII letters and the blank marker.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Pattern;
    ///
    /// let pattern = Pattern::parse("_A_").unwrap();
    /// assert_eq!(pattern.len(), 3);
    /// assert_eq!(pattern.to_string(), "_a_");
    /// assert!(!pattern.is_complete());
    /// ```
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        if text.is_empty() {
            return Err(PatternError::Empty);
        }

        let cells = text
            .chars()
            .map(|c| match c {
                BLANK => Ok(None),
                c if c.is_ascii_alphabetic() => Ok(Some(c.to_ascii_lowercase() as u8)),
                other => Err(PatternError::InvalidCharacter(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { cells })
    }

    /// The pattern a referee shows for `target` once `played` have been guessed
    ///
    /// Every occurrence of a played letter is revealed.
    #[must_use]
    pub fn reveal(target: &Word, played: LetterSet) -> Self {
        Self {
            cells: target
                .bytes()
                .iter()
                .map(|&letter| played.contains(letter).then_some(letter))
                .collect(),
        }
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cells in order, `None` for blanks
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Option<u8>] {
        &self.cells
    }

    /// True when no blanks remain
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of revealed positions
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Check whether a letter has been revealed anywhere
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.cells.contains(&Some(letter))
    }

    /// Check whether a word is consistent with this pattern
    ///
    /// Lengths must be equal and every revealed position must hold the same
    /// letter. Blank positions accept any letter, including ones revealed
    /// elsewhere.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{Pattern, Word};
    ///
    /// let pattern = Pattern::parse("_a_").unwrap();
    /// assert!(pattern.matches(&Word::new("cat").unwrap()));
    /// assert!(pattern.matches(&Word::new("aaa").unwrap()));
    /// assert!(!pattern.matches(&Word::new("cot").unwrap()));
    /// assert!(!pattern.matches(&Word::new("cart").unwrap()));
    /// ```
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        word.len() == self.cells.len()
            && self
                .cells
                .iter()
                .zip(word.bytes())
                .all(|(cell, &letter)| cell.is_none_or(|revealed| revealed == letter))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(letter) => write!(f, "{}", char::from(*letter))?,
                None => write!(f, "{BLANK}")?,
            }
        }
        Ok(())
    }
}
