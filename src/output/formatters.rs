//! Formatting utilities for terminal output

use crate::core::{LetterSet, Pattern};
use crate::solver::RankedLetter;
use colored::Colorize;

/// Format a pattern with revealed letters highlighted and blanks dimmed
#[must_use]
pub fn pattern_colored(pattern: &Pattern) -> String {
    pattern
        .cells()
        .iter()
        .map(|cell| match cell {
            Some(letter) => char::from(letter.to_ascii_uppercase())
                .to_string()
                .bright_green()
                .bold()
                .to_string(),
            None => "_".bright_black().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a letter set as comma-separated letters
#[must_use]
pub fn letter_list(letters: LetterSet) -> String {
    letters
        .iter()
        .map(|l| char::from(l).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format ranked letters compactly, e.g. `a:3 c:3 t:1 e o`
///
/// Uncounted letters are shown without a count.
#[must_use]
pub fn ranking_line(ranking: &[RankedLetter]) -> String {
    ranking
        .iter()
        .map(|ranked| {
            let letter = char::from(ranked.letter);
            if ranked.is_counted() {
                format!("{letter}:{}", ranked.occurrences)
            } else {
                letter.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_colored_keeps_letters() {
        colored::control::set_override(false);
        let pattern = Pattern::parse("c_t").unwrap();
        assert_eq!(pattern_colored(&pattern), "C _ T");
    }

    #[test]
    fn letter_list_is_alphabetical() {
        assert_eq!(letter_list(LetterSet::from_letters("tea")), "a, e, t");
        assert_eq!(letter_list(LetterSet::EMPTY), "");
    }

    #[test]
    fn ranking_line_marks_counts() {
        let ranking = [
            RankedLetter {
                letter: b'a',
                occurrences: 3,
            },
            RankedLetter {
                letter: b'e',
                occurrences: 0,
            },
        ];
        assert_eq!(ranking_line(&ranking), "a:3 e");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
