//! Display functions for command results

use super::formatters::{create_progress_bar, letter_list, pattern_colored, ranking_line};
use crate::commands::{BenchmarkResult, PlaySummary, RankAnalysis, SolveResult};
use crate::solver::{GameOutcome, GameReport};
use colored::Colorize;

fn outcome_label(outcome: GameOutcome) -> colored::ColoredString {
    match outcome {
        GameOutcome::Won => "WON".green().bold(),
        GameOutcome::Lost => "LOST".red().bold(),
        GameOutcome::Exhausted => "EXHAUSTED".yellow().bold(),
    }
}

/// Print one game's guesses and result
pub fn print_game_report(report: &GameReport, verbose: bool) {
    for (i, step) in report.steps.iter().enumerate() {
        let letter = char::from(step.letter.to_ascii_uppercase());
        let mark = if step.accepted {
            "✓".green()
        } else {
            "✗".red()
        };
        println!(
            "  {:>2}. {} {}  {}",
            i + 1,
            letter.to_string().bold(),
            mark,
            pattern_colored(&step.pattern)
        );

        if verbose {
            println!(
                "      Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!(
        "\n  {} in {} guesses ({} wrong): {}",
        outcome_label(report.outcome),
        report.total_guesses(),
        report.wrong_guesses(),
        pattern_colored(&report.pattern)
    );
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    if !result.in_dictionary {
        println!("{}", "  (not in dictionary)".bright_black());
    }
    println!("{}", "─".repeat(60).cyan());

    print_game_report(&result.report, verbose);
}

/// Print the ranking for a game position
pub fn print_rank_result(result: &RankAnalysis) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "LETTER RANKING:".bright_cyan().bold(),
        pattern_colored(&result.pattern)
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Played:      {}", letter_list(result.played));
    println!("   Candidates:  {}", result.total_candidates);
    if !result.sample_candidates.is_empty() {
        println!("   Examples:    {}", result.sample_candidates.join(", "));
    }

    match result.ranking.first() {
        Some(best) => println!(
            "\n📊 Next guess: {}",
            char::from(best.letter.to_ascii_uppercase())
                .to_string()
                .bright_yellow()
                .bold()
        ),
        None => println!("\n📊 {}", "Every letter has been played".yellow()),
    }
    println!("   Ranking:     {}", ranking_line(&result.ranking));
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Won:              {}", format!("{}", result.won).green());
    println!("   Lost:             {}", format!("{}", result.lost).red());
    if result.exhausted > 0 {
        println!(
            "   Exhausted:        {}",
            format!("{}", result.exhausted).yellow()
        );
    }
    if result.failed > 0 {
        println!("   Failed:           {}", format!("{}", result.failed).red());
    }
    println!("   Average guesses:  {:.2}", result.average_guesses);
    println!("   Average wrong:    {:.2}", result.average_wrong_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Wrong guesses:".bright_cyan().bold());
    let played = result.total_words - result.failed;
    let max_wrong = result.wrong_distribution.keys().copied().max().unwrap_or(0);
    for wrong in 0..=max_wrong {
        if let Some(&count) = result.wrong_distribution.get(&wrong) {
            let pct = count as f64 / played as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {wrong:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.hardest_words.is_empty() {
        println!("\n😰 {}", "Hardest words:".yellow().bold());
        for (word, wrong) in result.hardest_words.iter().take(5) {
            println!("   {} ({wrong} wrong)", word.to_uppercase().yellow());
        }
    }
}

/// Print the totals of a series of remote games
pub fn print_play_summary(summary: &PlaySummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SESSION SUMMARY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("   Games:      {}", summary.total_games());
    println!(
        "   Won:        {}",
        summary.count(GameOutcome::Won).to_string().green()
    );
    println!(
        "   Lost:       {}",
        summary.count(GameOutcome::Lost).to_string().red()
    );
    println!(
        "   Exhausted:  {}",
        summary.count(GameOutcome::Exhausted).to_string().yellow()
    );
    println!(
        "   Failed:     {}",
        summary.failures.len().to_string().red()
    );
}
