//! Game session boundary
//!
//! The solver talks to a game through the `GameSession` trait. Two sessions
//! are provided: `HttpGameSession` for a remote server and `LocalGame`, an
//! in-process referee used for simulation.

mod error;
mod http;
mod local;
pub mod wire;

pub use error::TransportError;
pub use http::HttpGameSession;
pub use local::{DEFAULT_MAX_WRONG_GUESSES, LocalGame};

use crate::core::Pattern;
use serde::Deserialize;
use std::fmt;

/// Server-side state of a game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Active,
    Won,
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Active => "active",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        write!(f, "{name}")
    }
}

/// Snapshot of a game as reported by the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub game_id: String,
    pub pattern: Pattern,
    pub status: GameStatus,
}

/// A game the solver can play
///
/// A wrong letter is a successful response with an unchanged pattern; errors
/// are reserved for protocol-level failures.
pub trait GameSession {
    /// Begin a new game
    ///
    /// # Errors
    /// Returns `TransportError` if the game cannot be started.
    fn start_game(&mut self) -> Result<GameState, TransportError>;

    /// Submit one lowercase letter
    ///
    /// # Errors
    /// Returns `TransportError` if the guess cannot be delivered or the
    /// response cannot be understood.
    fn guess_letter(&mut self, game_id: &str, letter: u8) -> Result<GameState, TransportError>;
}

impl<G: GameSession + ?Sized> GameSession for &mut G {
    fn start_game(&mut self) -> Result<GameState, TransportError> {
        (**self).start_game()
    }

    fn guess_letter(&mut self, game_id: &str, letter: u8) -> Result<GameState, TransportError> {
        (**self).guess_letter(game_id, letter)
    }
}
