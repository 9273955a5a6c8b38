//! Word solving command
//!
//! Plays one local game against a known target word and returns the solution path.

use crate::core::Word;
use crate::session::{DEFAULT_MAX_WRONG_GUESSES, LocalGame};
use crate::solver::{GameReport, Solver};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    /// `None` lets the game run until the word is revealed or letters run out
    pub max_wrong_guesses: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_wrong_guesses: Some(DEFAULT_MAX_WRONG_GUESSES),
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    pub in_dictionary: bool,
    pub report: GameReport,
}

/// Solve a specific word using the given solver
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (empty or not plain letters)
/// - The local game rejects a request
pub fn solve_word(config: SolveConfig, solver: &Solver<'_>) -> Result<SolveResult, String> {
    let target = Word::new(&config.target).map_err(|e| format!("Invalid target word: {e}"))?;
    let in_dictionary = solver.dictionary().contains(&target);

    let mut game = LocalGame::new(target.clone(), config.max_wrong_guesses);
    let report = solver.play(&mut game).map_err(|e| e.to_string())?;

    Ok(SolveResult {
        target: target.text().to_string(),
        in_dictionary,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{GameOutcome, LetterRanker};
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn solve_word_succeeds() {
        let dictionary = words_from_slice(WORDS);
        let solver = Solver::new(&dictionary, LetterRanker::default());

        let mut config = SolveConfig::new("hangman".to_string());
        config.max_wrong_guesses = None;
        let result = solve_word(config, &solver).unwrap();

        assert!(result.in_dictionary);
        assert_eq!(result.report.outcome, GameOutcome::Won);
        assert_eq!(result.report.pattern.to_string(), "hangman");
    }

    #[test]
    fn solve_records_history() {
        let dictionary = words_from_slice(WORDS);
        let solver = Solver::new(&dictionary, LetterRanker::default());

        let result = solve_word(SolveConfig::new("planet".to_string()), &solver).unwrap();

        assert!(!result.report.steps.is_empty());
        for step in &result.report.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn solve_normalizes_target() {
        let dictionary = words_from_slice(&["cat", "car"]);
        let solver = Solver::new(&dictionary, LetterRanker::default());

        let result = solve_word(SolveConfig::new("CAR".to_string()), &solver).unwrap();
        assert_eq!(result.target, "car");
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let dictionary = words_from_slice(&["cat"]);
        let solver = Solver::new(&dictionary, LetterRanker::default());

        assert!(solve_word(SolveConfig::new("c4t".to_string()), &solver).is_err());
        assert!(solve_word(SolveConfig::new(String::new()), &solver).is_err());
    }

    #[test]
    fn solve_respects_wrong_guess_limit() {
        let dictionary = words_from_slice(&["cat", "car", "can"]);
        let solver = Solver::new(&dictionary, LetterRanker::default());

        let mut config = SolveConfig::new("zzz".to_string());
        config.max_wrong_guesses = Some(2);
        let result = solve_word(config, &solver).unwrap();

        assert!(!result.in_dictionary);
        assert_eq!(result.report.outcome, GameOutcome::Lost);
        assert_eq!(result.report.wrong_guesses(), 2);
    }
}
