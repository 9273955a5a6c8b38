//! Rank command
//!
//! Shows which letters the solver would try next for a given game position.

use crate::core::{LetterSet, Pattern};
use crate::solver::{CandidateSet, RankedLetter, Solver};

/// Number of candidate words listed in the analysis
const CANDIDATE_SAMPLE: usize = 10;

/// Ranking for one game position
pub struct RankAnalysis {
    pub pattern: Pattern,
    /// Played letters, including every letter revealed in the pattern
    pub played: LetterSet,
    pub total_candidates: usize,
    pub sample_candidates: Vec<String>,
    pub ranking: Vec<RankedLetter>,
}

/// Rank the untried letters for `pattern` after `played` have been guessed
///
/// # Errors
///
/// Returns an error if the pattern cannot be parsed.
pub fn analyze_pattern(
    pattern: &str,
    played: &str,
    solver: &Solver<'_>,
) -> Result<RankAnalysis, String> {
    let pattern = Pattern::parse(pattern).map_err(|e| format!("Invalid pattern: {e}"))?;

    let mut played = LetterSet::from_letters(played);
    for letter in pattern.cells().iter().flatten() {
        played.insert(*letter);
    }

    let candidates = CandidateSet::build(solver.dictionary(), pattern.len()).filter(&pattern);
    let ranked = solver.ranker().rank(&candidates, played);

    Ok(RankAnalysis {
        total_candidates: candidates.len(),
        sample_candidates: candidates
            .iter()
            .take(CANDIDATE_SAMPLE)
            .map(|w| w.text().to_string())
            .collect(),
        ranking: ranked.iter().copied().collect(),
        pattern,
        played,
    })
}
