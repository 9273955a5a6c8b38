//! Letter ranking
//!
//! Orders the untried letters by how often they occur in the remaining
//! candidates, falling back to English letter frequency for letters that
//! never occur.

use super::CandidateSet;
use crate::core::{FALLBACK_ORDER, LetterSet, fallback_rank};
use rustc_hash::FxHashMap;
use std::str::FromStr;

/// How letter occurrences are counted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CountingMode {
    /// Every character position counts; "tot" adds 2 to `t`
    #[default]
    Occurrences,
    /// Each candidate word counts once per distinct letter it contains
    Words,
}

impl FromStr for CountingMode {
    type Err = String;

    /// Parse "occurrences" or "words"
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "occurrences" => Ok(Self::Occurrences),
            "words" | "word-membership" => Ok(Self::Words),
            other => Err(format!(
                "unknown counting mode '{other}' (expected occurrences or words)"
            )),
        }
    }
}

/// A letter together with its count in the candidates it was ranked from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedLetter {
    pub letter: u8,
    /// Zero for letters ranked by the fallback order alone
    pub occurrences: usize,
}

impl RankedLetter {
    /// True if the letter appears in at least one candidate
    #[inline]
    #[must_use]
    pub const fn is_counted(&self) -> bool {
        self.occurrences > 0
    }
}

/// Untried letters, highest priority first
///
/// Immutable: removing a letter yields a new rank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterRank {
    letters: Vec<RankedLetter>,
}

impl LetterRank {
    /// The letter to guess next
    #[must_use]
    pub fn first(&self) -> Option<RankedLetter> {
        self.letters.first().copied()
    }

    /// A copy of this rank without `letter`
    #[must_use]
    pub fn without(&self, letter: u8) -> Self {
        Self {
            letters: self
                .letters
                .iter()
                .copied()
                .filter(|ranked| ranked.letter != letter)
                .collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedLetter> {
        self.letters.iter()
    }

    /// Just the letters, highest priority first
    #[must_use]
    pub fn letters(&self) -> Vec<u8> {
        self.letters.iter().map(|ranked| ranked.letter).collect()
    }
}

/// Count letters across all candidates
///
/// Only letters that occur at least once have an entry.
#[must_use]
pub fn count_letters(candidates: &CandidateSet<'_>, mode: CountingMode) -> FxHashMap<u8, usize> {
    let mut counts: FxHashMap<u8, usize> = FxHashMap::default();

    for word in candidates.iter() {
        match mode {
            CountingMode::Occurrences => {
                for &letter in word.bytes() {
                    *counts.entry(letter).or_insert(0) += 1;
                }
            }
            CountingMode::Words => {
                let distinct: LetterSet = word.bytes().iter().copied().collect();
                for letter in distinct.iter() {
                    *counts.entry(letter).or_insert(0) += 1;
                }
            }
        }
    }

    counts
}

/// Ranks untried letters for a candidate set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterRanker {
    mode: CountingMode,
}

impl LetterRanker {
    #[must_use]
    pub const fn new(mode: CountingMode) -> Self {
        Self { mode }
    }

    /// Rank every letter not in `played`
    ///
    /// Counted letters come first, highest count first; equal counts keep the
    /// fallback order. Letters absent from the candidates follow in fallback
    /// order. With no candidates the result is the fallback order minus
    /// `played`.
    #[must_use]
    pub fn rank(&self, candidates: &CandidateSet<'_>, played: LetterSet) -> LetterRank {
        let counts = count_letters(candidates, self.mode);

        let mut counted: Vec<RankedLetter> = counts
            .into_iter()
            .map(|(letter, occurrences)| RankedLetter {
                letter,
                occurrences,
            })
            .collect();
        counted.sort_by(|a, b| {
            b.occurrences
                .cmp(&a.occurrences)
                .then_with(|| fallback_rank(a.letter).cmp(&fallback_rank(b.letter)))
        });

        let uncounted = FALLBACK_ORDER
            .iter()
            .filter(|letter| !counted.iter().any(|ranked| ranked.letter == **letter))
            .map(|&letter| RankedLetter {
                letter,
                occurrences: 0,
            })
            .collect::<Vec<_>>();

        let letters = counted
            .into_iter()
            .chain(uncounted)
            .filter(|ranked| !played.contains(ranked.letter))
            .collect();

        LetterRank { letters }
    }
}

/// Rank untried letters by raw occurrence count
///
/// # Examples
/// ```
/// use hangman_solver::core::{LetterSet, Word};
/// use hangman_solver::solver::{CandidateSet, rank};
///
/// let dictionary: Vec<Word> = ["cat", "car", "can"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let candidates = CandidateSet::build(&dictionary, 3);
///
/// let ranked = rank(&candidates, LetterSet::EMPTY);
/// assert_eq!(ranked.len(), 26);
/// // "a" and "c" both occur three times; "a" is more common in English
/// assert_eq!(ranked.first().unwrap().letter, b'a');
/// ```
#[must_use]
pub fn rank(candidates: &CandidateSet<'_>, played: LetterSet) -> LetterRank {
    LetterRanker::default().rank(candidates, played)
}
