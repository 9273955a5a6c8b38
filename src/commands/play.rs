//! Play command
//!
//! Plays a series of games against a game server. Each game is wrapped in the
//! retry policy: a transport failure abandons the attempt and a fresh game is
//! started, up to the policy's limit.

use crate::config::RetryPolicy;
use crate::session::{GameSession, TransportError};
use crate::solver::{GameOutcome, GameReport, Solver};

/// Outcome of a series of games
#[derive(Debug, Default)]
pub struct PlaySummary {
    pub reports: Vec<GameReport>,
    /// Games that failed on every attempt, with the last error
    pub failures: Vec<String>,
}

impl PlaySummary {
    #[must_use]
    pub fn count(&self, outcome: GameOutcome) -> usize {
        self.reports
            .iter()
            .filter(|report| report.outcome == outcome)
            .count()
    }

    #[must_use]
    pub fn total_games(&self) -> usize {
        self.reports.len() + self.failures.len()
    }

    /// True when games were attempted and none of them finished
    #[must_use]
    pub fn all_failed(&self) -> bool {
        self.reports.is_empty() && !self.failures.is_empty()
    }
}

/// Play `games` games, each on a fresh session from `connect`
///
/// `on_game` is called after every game with its 1-based number and result.
pub fn run_play<S, C, F>(
    solver: &Solver<'_>,
    games: usize,
    retry: &RetryPolicy,
    mut connect: C,
    mut on_game: F,
) -> PlaySummary
where
    S: GameSession,
    C: FnMut() -> S,
    F: FnMut(usize, &Result<GameReport, TransportError>),
{
    let mut summary = PlaySummary::default();

    for game in 1..=games {
        let result = retry.run(|attempt| {
            log::debug!("game {game}: attempt {attempt}");
            let mut session = connect();
            solver.play(&mut session)
        });

        on_game(game, &result);

        match result {
            Ok(report) => summary.reports.push(report),
            Err(error) => {
                log::error!("game {game} abandoned: {error}");
                summary.failures.push(error.to_string());
            }
        }
    }

    summary
}
