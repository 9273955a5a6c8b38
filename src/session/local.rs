//! In-process Hangman referee
//!
//! Plays the server's role for a known target word, so the solver can be run
//! and measured without a network.

use super::{GameSession, GameState, GameStatus, TransportError};
use crate::core::{LetterSet, Pattern, Word, is_letter};

/// Wrong guesses allowed before a local game is lost
pub const DEFAULT_MAX_WRONG_GUESSES: usize = 6;

/// A Hangman game refereed locally
#[derive(Debug, Clone)]
pub struct LocalGame {
    game_id: String,
    target: Word,
    max_wrong_guesses: Option<usize>,
    played: LetterSet,
    wrong_guesses: usize,
    started: bool,
}

impl LocalGame {
    /// Create a game for `target`
    ///
    /// # Parameters
    /// - `target`: the secret word
    /// - `max_wrong_guesses`: wrong guesses before the game is lost; `None` never loses
    #[must_use]
    pub fn new(target: Word, max_wrong_guesses: Option<usize>) -> Self {
        Self {
            game_id: format!("local-{}", target.text()),
            target,
            max_wrong_guesses,
            played: LetterSet::EMPTY,
            wrong_guesses: 0,
            started: false,
        }
    }

    /// Wrong guesses made so far
    #[must_use]
    pub const fn wrong_guesses(&self) -> usize {
        self.wrong_guesses
    }

    /// Letters guessed so far
    #[must_use]
    pub const fn played(&self) -> LetterSet {
        self.played
    }

    fn state(&self) -> GameState {
        let pattern = Pattern::reveal(&self.target, self.played);
        let status = if pattern.is_complete() {
            GameStatus::Won
        } else if self
            .max_wrong_guesses
            .is_some_and(|limit| self.wrong_guesses >= limit)
        {
            GameStatus::Lost
        } else {
            GameStatus::Active
        };

        GameState {
            game_id: self.game_id.clone(),
            pattern,
            status,
        }
    }
}

impl GameSession for LocalGame {
    fn start_game(&mut self) -> Result<GameState, TransportError> {
        self.played = LetterSet::EMPTY;
        self.wrong_guesses = 0;
        self.started = true;
        Ok(self.state())
    }

    fn guess_letter(&mut self, game_id: &str, letter: u8) -> Result<GameState, TransportError> {
        if !self.started {
            return Err(TransportError::Rejected("game not started".to_string()));
        }
        if game_id != self.game_id {
            return Err(TransportError::Rejected(format!("unknown game {game_id}")));
        }
        if !is_letter(letter) {
            return Err(TransportError::Rejected(format!(
                "not a lowercase letter: {:?}",
                char::from(letter)
            )));
        }
        if !self.state().status.is_active() {
            return Err(TransportError::Rejected(format!(
                "game {game_id} is over"
            )));
        }

        if self.played.insert(letter) && !self.target.has_letter(letter) {
            self.wrong_guesses += 1;
        }

        Ok(self.state())
    }
}
