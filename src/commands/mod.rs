//! Command implementations

pub mod benchmark;
pub mod play;
pub mod rank;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use play::{PlaySummary, run_play};
pub use rank::{RankAnalysis, analyze_pattern};
pub use solve::{SolveConfig, SolveResult, solve_word};
