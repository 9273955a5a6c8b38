//! Alphabet helpers and the played-letter set

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// English letter frequency, most common first
///
/// Used to order letters that never appear in the remaining candidates.
pub const FALLBACK_ORDER: [u8; ALPHABET_SIZE] = *b"etaoinsrhdlucmfywgpbvkxqjz";

/// Check that a byte is a lowercase ASCII letter
#[inline]
#[must_use]
pub const fn is_letter(letter: u8) -> bool {
    letter.is_ascii_lowercase()
}

/// Position of a letter within the fallback order
///
/// # Panics
/// Panics if `letter` is not a lowercase ASCII letter
#[must_use]
pub fn fallback_rank(letter: u8) -> usize {
    FALLBACK_ORDER
        .iter()
        .position(|&l| l == letter)
        .unwrap_or_else(|| panic!("not a lowercase letter: {letter:#04x}"))
}

/// A set of lowercase letters, stored as a 26-bit mask
///
/// Tracks the letters already guessed in a game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Every letter of the alphabet
    pub const FULL: Self = Self((1 << ALPHABET_SIZE) - 1);

    /// Build a set from every lowercase letter in `letters`
    ///
    /// Uppercase letters are folded to lowercase; anything else is ignored.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::LetterSet;
    ///
    /// let played = LetterSet::from_letters("EtA");
    /// assert!(played.contains(b'e'));
    /// assert_eq!(played.len(), 3);
    /// ```
    #[must_use]
    pub fn from_letters(letters: &str) -> Self {
        let mut set = Self::EMPTY;
        for letter in letters.bytes().map(|b| b.to_ascii_lowercase()) {
            if is_letter(letter) {
                set.insert(letter);
            }
        }
        set
    }

    /// Add a letter, returning true if it was not already present
    ///
    /// Anything other than `a-z` is ignored and returns false.
    pub fn insert(&mut self, letter: u8) -> bool {
        if !is_letter(letter) {
            return false;
        }
        let bit = Self::bit(letter);
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    /// Check whether a letter is in the set
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        is_letter(letter) && self.0 & Self::bit(letter) != 0
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }

    #[inline]
    const fn bit(letter: u8) -> u32 {
        1 << (letter - b'a')
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}
