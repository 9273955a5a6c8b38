//! Remote game server session over HTTP
//!
//! Games are started with a form POST to the games collection and guesses are
//! form POSTs to `{base_url}/{gameId}/guesses`. Both answer with JSON.

use super::{GameSession, GameState, TransportError, wire};
use crate::config::ServerConfig;

/// Blocking HTTP session against a Hangman game server
pub struct HttpGameSession {
    agent: ureq::Agent,
    config: ServerConfig,
}

impl HttpGameSession {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Self {
            agent: builder.build(),
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &ServerConfig {
        &self.config
    }

    fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<String, TransportError> {
        log::debug!("POST {url}");
        let response = self.agent.post(url).send_form(form)?;
        let body = response.into_string()?;
        log::trace!("response body: {body}");
        Ok(body)
    }
}

impl GameSession for HttpGameSession {
    fn start_game(&mut self) -> Result<GameState, TransportError> {
        let form = [("email", self.config.email.as_str())];
        let body = self.post_form(&self.config.base_url, &form)?;
        let state = wire::parse_state(&body, None)?;
        log::info!(
            "started game {} ({} letters)",
            state.game_id,
            state.pattern.len()
        );
        Ok(state)
    }

    fn guess_letter(&mut self, game_id: &str, letter: u8) -> Result<GameState, TransportError> {
        let url = self.config.guesses_url(game_id);
        let letter = char::from(letter).to_string();
        let body = self.post_form(&url, &[("char", letter.as_str())])?;
        wire::parse_state(&body, Some(game_id))
    }
}
