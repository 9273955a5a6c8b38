//! Typed server responses
//!
//! The server answers with JSON objects such as
//! `{"gameId":"abc","word":"_a_","status":"active"}`. Fields the solver does
//! not need are ignored.

use super::{GameState, GameStatus, TransportError};
use crate::core::Pattern;
use serde::Deserialize;

/// One server response, as sent on the wire
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    #[serde(default)]
    pub game_id: Option<String>,
    pub word: String,
    #[serde(default)]
    pub status: GameStatus,
}

impl GameResponse {
    /// Decode a response body
    ///
    /// # Errors
    /// Returns `TransportError::Malformed` if the body is not a valid response.
    pub fn from_json(body: &str) -> Result<Self, TransportError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Convert into a game state
    ///
    /// Guess responses may omit the game id; `known_game_id` fills the gap.
    ///
    /// # Errors
    /// Returns `TransportError` if the pattern is invalid or no game id is
    /// available.
    pub fn into_state(self, known_game_id: Option<&str>) -> Result<GameState, TransportError> {
        let game_id = self
            .game_id
            .or_else(|| known_game_id.map(str::to_string))
            .ok_or_else(|| TransportError::Rejected("response carried no game id".to_string()))?;

        Ok(GameState {
            game_id,
            pattern: Pattern::parse(&self.word)?,
            status: self.status,
        })
    }
}

/// Decode a response body straight into a game state
///
/// # Errors
/// Returns `TransportError` if the body is malformed or incomplete.
pub fn parse_state(body: &str, known_game_id: Option<&str>) -> Result<GameState, TransportError> {
    GameResponse::from_json(body)?.into_state(known_game_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_start_response() {
        let state = parse_state(
            r#"{"gameId":"g42","word":"_____","status":"active"}"#,
            None,
        )
        .unwrap();

        assert_eq!(state.game_id, "g42");
        assert_eq!(state.pattern, Pattern::blank(5));
        assert_eq!(state.status, GameStatus::Active);
    }

    #[test]
    fn missing_status_means_active() {
        let state = parse_state(r#"{"gameId":"g1","word":"_a_"}"#, None).unwrap();
        assert_eq!(state.status, GameStatus::Active);
    }

    #[test]
    fn guess_response_keeps_known_game_id() {
        let state = parse_state(r#"{"word":"ca_","status":"active"}"#, Some("g7")).unwrap();
        assert_eq!(state.game_id, "g7");
        assert_eq!(state.pattern.to_string(), "ca_");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let state = parse_state(
            r#"{"gameId":"g1","word":"car","status":"won","msg":"well done","guessesLeft":3}"#,
            None,
        )
        .unwrap();
        assert_eq!(state.status, GameStatus::Won);
        assert!(state.pattern.is_complete());
    }

    #[test]
    fn lost_status() {
        let state = parse_state(r#"{"word":"c__","status":"lost"}"#, Some("g1")).unwrap();
        assert_eq!(state.status, GameStatus::Lost);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let result = parse_state("not json", None);
        assert!(matches!(result, Err(TransportError::Malformed(_))));
    }

    #[test]
    fn unknown_status_is_an_error() {
        let result = parse_state(r#"{"gameId":"g1","word":"_","status":"paused"}"#, None);
        assert!(matches!(result, Err(TransportError::Malformed(_))));
    }

    #[test]
    fn bad_pattern_is_an_error() {
        let result = parse_state(r#"{"gameId":"g1","word":"c*t"}"#, None);
        assert!(matches!(result, Err(TransportError::InvalidPattern(_))));
    }

    #[test]
    fn missing_game_id_is_an_error() {
        let result = parse_state(r#"{"word":"___"}"#, None);
        assert!(matches!(result, Err(TransportError::Rejected(_))));
    }
}
