//! Hangman Solver - CLI
//!
//! Plays Hangman against a game server, or locally against a known word,
//! using dictionary pruning and letter-frequency ranking.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use hangman_solver::{
    commands::{SolveConfig, analyze_pattern, run_benchmark, run_play, sample_targets, solve_word},
    config::{DEFAULT_BASE_URL, RetryPolicy, ServerConfig},
    core::Word,
    output::{
        print_benchmark_result, print_game_report, print_play_summary, print_rank_result,
        print_solve_result,
    },
    session::{DEFAULT_MAX_WRONG_GUESSES, HttpGameSession},
    solver::{CountingMode, LetterRanker, Solver},
    wordlists::{WORDS, loader::load_from_file, loader::words_from_slice},
};
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Hangman solver using dictionary pruning and letter-frequency ranking",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'd', long, global = true, default_value = "builtin")]
    dictionary: String,

    /// Letter counting: occurrences (default) or words
    #[arg(short, long, global = true, default_value = "occurrences")]
    counting: CountingMode,
}

#[derive(Subcommand)]
enum Commands {
    /// Play games against a Hangman server
    Play {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1")]
        games: usize,

        /// Games collection URL
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        url: String,

        /// Email sent when starting a game
        #[arg(long, default_value = "")]
        email: String,

        /// Attempts per game, including the first
        #[arg(long, default_value = "3")]
        retries: u32,

        /// Delay before the first retry, in milliseconds
        #[arg(long, default_value = "500")]
        backoff_ms: u64,

        /// Per-request timeout in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// Show candidate counts for every guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Play a local game against a target word
    Solve {
        /// The target word to solve
        word: String,

        /// Wrong guesses allowed; 0 means unlimited
        #[arg(short = 'm', long, default_value_t = DEFAULT_MAX_WRONG_GUESSES)]
        max_wrong: usize,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark the solver on random dictionary words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Wrong guesses allowed; 0 means unlimited
        #[arg(short = 'm', long, default_value_t = DEFAULT_MAX_WRONG_GUESSES)]
        max_wrong: usize,

        /// Only test words of this length
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Show the letter ranking for a pattern such as _a_
    Rank {
        /// Revealed pattern, '_' for blanks
        pattern: String,

        /// Letters already guessed
        #[arg(short, long, default_value = "")]
        played: String,
    },
}

/// Load the dictionary selected with -d
fn load_dictionary(selection: &str) -> Result<Vec<Word>> {
    match selection {
        "builtin" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("failed to load dictionary {path}")),
    }
}

/// Translate the 0-means-unlimited CLI convention
const fn wrong_guess_limit(max_wrong: usize) -> Option<usize> {
    if max_wrong == 0 { None } else { Some(max_wrong) }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.dictionary)?;
    let solver = Solver::new(&dictionary, LetterRanker::new(cli.counting));

    match cli.command {
        Commands::Play {
            games,
            url,
            email,
            retries,
            backoff_ms,
            timeout_secs,
            verbose,
        } => {
            let mut server = ServerConfig::new(url, email);
            if let Some(secs) = timeout_secs {
                server = server.with_timeout(Duration::from_secs(secs));
            }
            let retry = RetryPolicy::new(retries, Duration::from_millis(backoff_ms));
            run_play_command(&solver, games, &server, &retry, verbose)
        }
        Commands::Solve {
            word,
            max_wrong,
            verbose,
        } => {
            let mut config = SolveConfig::new(word);
            config.max_wrong_guesses = wrong_guess_limit(max_wrong);
            let result = solve_word(config, &solver).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Benchmark {
            count,
            max_wrong,
            length,
        } => {
            run_benchmark_command(&solver, count, wrong_guess_limit(max_wrong), length);
            Ok(())
        }
        Commands::Rank { pattern, played } => {
            let result = analyze_pattern(&pattern, &played, &solver).map_err(|e| anyhow::anyhow!(e))?;
            print_rank_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(
    solver: &Solver<'_>,
    games: usize,
    server: &ServerConfig,
    retry: &RetryPolicy,
    verbose: bool,
) -> Result<()> {
    println!(
        "Playing {games} game{} against {}",
        if games == 1 { "" } else { "s" },
        server.base_url
    );

    let summary = run_play(
        solver,
        games,
        retry,
        || HttpGameSession::new(server.clone()),
        |game, result| {
            println!("\n{}", format!("Game {game}").bright_cyan().bold());
            match result {
                Ok(report) => {
                    println!("  id: {}", report.game_id.bright_black());
                    print_game_report(report, verbose);
                }
                Err(error) => println!("  {} {error}", "failed:".red().bold()),
            }
        },
    );

    print_play_summary(&summary);

    if summary.all_failed() {
        anyhow::bail!("all {} games failed", summary.failures.len());
    }
    Ok(())
}

fn run_benchmark_command(
    solver: &Solver<'_>,
    count: usize,
    max_wrong: Option<usize>,
    length: Option<usize>,
) {
    let targets = sample_targets(solver.dictionary(), count, length);
    match max_wrong {
        Some(limit) => println!(
            "Running benchmark on {} random words ({limit} wrong guesses allowed)...",
            targets.len()
        ),
        None => println!(
            "Running benchmark on {} random words (unlimited wrong guesses)...",
            targets.len()
        ),
    }

    let result = run_benchmark(solver, &targets, max_wrong);
    print_benchmark_result(&result);
}
