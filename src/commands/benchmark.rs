//! Benchmark command
//!
//! Plays local games against many dictionary words and collects statistics.
//! Games run in parallel; each game is played sequentially.

use crate::core::Word;
use crate::session::LocalGame;
use crate::solver::{GameOutcome, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result from playing a single target word
#[derive(Debug, Clone)]
pub struct WordTestResult {
    pub word: String,
    pub outcome: Option<GameOutcome>,
    pub total_guesses: usize,
    pub wrong_guesses: usize,
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub won: usize,
    pub lost: usize,
    pub exhausted: usize,
    /// Games the local referee refused; should stay at zero
    pub failed: usize,
    pub average_guesses: f64,
    pub average_wrong_guesses: f64,
    /// Wrong-guess count -> number of games
    pub wrong_distribution: HashMap<usize, usize>,
    /// Games with the most wrong guesses, worst first
    pub hardest_words: Vec<(String, usize)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    /// Fraction of games won, 0.0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.won as f64 / self.total_words as f64
        }
    }
}

/// Pick up to `count` distinct dictionary entries at random
///
/// With `length`, only words of that many letters are considered.
#[must_use]
pub fn sample_targets(dictionary: &[Word], count: usize, length: Option<usize>) -> Vec<Word> {
    let pool: Vec<&Word> = dictionary
        .iter()
        .filter(|word| length.is_none_or(|len| word.len() == len))
        .collect();

    pool.choose_multiple(&mut rand::rng(), count)
        .map(|&word| word.clone())
        .collect()
}

/// Run the solver against every target word
pub fn run_benchmark(
    solver: &Solver<'_>,
    targets: &[Word],
    max_wrong_guesses: Option<usize>,
) -> BenchmarkResult {
    let start = Instant::now();

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let results: Vec<WordTestResult> = targets
        .par_iter()
        .map(|target| {
            let mut game = LocalGame::new(target.clone(), max_wrong_guesses);
            let result = match solver.play(&mut game) {
                Ok(report) => WordTestResult {
                    word: target.text().to_string(),
                    outcome: Some(report.outcome),
                    total_guesses: report.total_guesses(),
                    wrong_guesses: report.wrong_guesses(),
                },
                Err(error) => {
                    log::warn!("game for {target} failed: {error}");
                    WordTestResult {
                        word: target.text().to_string(),
                        outcome: None,
                        total_guesses: 0,
                        wrong_guesses: 0,
                    }
                }
            };
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    summarize(&results, duration)
}

fn summarize(results: &[WordTestResult], duration: Duration) -> BenchmarkResult {
    let count = |outcome: GameOutcome| {
        results
            .iter()
            .filter(|r| r.outcome == Some(outcome))
            .count()
    };

    let played: Vec<&WordTestResult> = results.iter().filter(|r| r.outcome.is_some()).collect();
    let average = |value: fn(&WordTestResult) -> usize| {
        if played.is_empty() {
            0.0
        } else {
            played.iter().map(|r| value(r)).sum::<usize>() as f64 / played.len() as f64
        }
    };

    let mut wrong_distribution: HashMap<usize, usize> = HashMap::new();
    for result in &played {
        *wrong_distribution.entry(result.wrong_guesses).or_insert(0) += 1;
    }

    let mut hardest_words: Vec<(String, usize)> = played
        .iter()
        .map(|r| (r.word.clone(), r.wrong_guesses))
        .collect();
    hardest_words.sort_by(|(a_word, a), (b_word, b)| b.cmp(a).then_with(|| a_word.cmp(b_word)));
    hardest_words.truncate(10);

    let total_words = results.len();
    BenchmarkResult {
        total_words,
        won: count(GameOutcome::Won),
        lost: count(GameOutcome::Lost),
        exhausted: count(GameOutcome::Exhausted),
        failed: total_words - played.len(),
        average_guesses: average(|r| r.total_guesses),
        average_wrong_guesses: average(|r| r.wrong_guesses),
        wrong_distribution,
        hardest_words,
        duration,
        words_per_second: if duration.is_zero() {
            0.0
        } else {
            total_words as f64 / duration.as_secs_f64()
        },
    }
}
