//! Runtime configuration
//!
//! Server endpoint settings and the retry policy for whole game attempts.

use rand::Rng;
use std::thread;
use std::time::Duration;

/// Default game server endpoint
pub const DEFAULT_BASE_URL: &str = "http://int-sys.usr.space/hangman/games";

/// Where and as whom to play remote games
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Games collection URL; guesses go to `{base_url}/{gameId}/guesses`
    pub base_url: String,
    /// Identity sent when starting a game
    pub email: String,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            email: email.into(),
            timeout: None,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// URL guesses for `game_id` are posted to
    #[must_use]
    pub fn guesses_url(&self, game_id: &str) -> String {
        format!("{}/{game_id}/guesses", self.base_url)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, "")
    }
}

/// Bounded retry with exponential backoff
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts, including the first (at least 1)
    pub max_attempts: u32,
    /// Delay before the second attempt
    pub initial_backoff: Duration,
    /// Growth factor applied to the delay after every failure
    pub multiplier: f64,
    /// Add up to this fraction of the delay at random
    pub jitter: f64,
}

impl RetryPolicy {
    /// # Parameters
    /// - `max_attempts`: clamped to at least 1
    /// - `initial_backoff`: delay before the first retry
    #[must_use]
    pub const fn new(max_attempts: u32, initial_backoff: Duration) -> Self {
        Self {
            max_attempts: if max_attempts == 0 { 1 } else { max_attempts },
            initial_backoff,
            multiplier: 2.0,
            jitter: 0.1,
        }
    }

    /// A policy that tries exactly once
    #[must_use]
    pub const fn no_retry() -> Self {
        Self::new(1, Duration::ZERO)
    }

    /// Delay to wait after failed attempt number `attempt` (1-based), without jitter
    #[must_use]
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        self.initial_backoff
            .mul_f64(self.multiplier.max(1.0).powf(f64::from(exponent)))
    }

    /// Run `operation` until it succeeds or attempts run out
    ///
    /// The closure receives the 1-based attempt number. The last error is
    /// returned when every attempt fails.
    ///
    /// # Errors
    /// Returns the error of the final attempt.
    pub fn run<T, E, F>(&self, mut operation: F) -> Result<T, E>
    where
        E: std::fmt::Display,
        F: FnMut(u32) -> Result<T, E>,
    {
        let mut attempt = 1;
        loop {
            match operation(attempt) {
                Ok(value) => return Ok(value),
                Err(error) if attempt < self.max_attempts => {
                    let delay = self.jittered(self.backoff_for(attempt));
                    log::warn!(
                        "attempt {attempt}/{} failed: {error}; retrying in {delay:?}",
                        self.max_attempts
                    );
                    if !delay.is_zero() {
                        thread::sleep(delay);
                    }
                    attempt += 1;
                }
                Err(error) => {
                    log::warn!("attempt {attempt}/{} failed: {error}", self.max_attempts);
                    return Err(error);
                }
            }
        }
    }

    fn jittered(&self, delay: Duration) -> Duration {
        if self.jitter <= 0.0 || delay.is_zero() {
            return delay;
        }
        let extra = rand::rng().random_range(0.0..=self.jitter);
        delay.mul_f64(1.0 + extra)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_millis(500))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_config_strips_trailing_slash() {
        let config = ServerConfig::new("http://localhost:8080/games/", "me@example.com");
        assert_eq!(config.base_url, "http://localhost:8080/games");
        assert_eq!(
            config.guesses_url("abc"),
            "http://localhost:8080/games/abc/guesses"
        );
    }

    #[test]
    fn server_config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.timeout.is_none());

        let config = config.with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn zero_attempts_clamped_to_one() {
        assert_eq!(RetryPolicy::new(0, Duration::ZERO).max_attempts, 1);
    }

    #[test]
    fn backoff_grows_exponentially() {
        let policy = RetryPolicy::new(5, Duration::from_millis(100));
        assert_eq!(policy.backoff_for(1), Duration::from_millis(100));
        assert_eq!(policy.backoff_for(2), Duration::from_millis(200));
        assert_eq!(policy.backoff_for(3), Duration::from_millis(400));
    }

    #[test]
    fn run_returns_first_success() {
        let policy = RetryPolicy::new(5, Duration::ZERO);
        let mut calls = 0;

        let result: Result<u32, String> = policy.run(|attempt| {
            calls += 1;
            if attempt < 3 {
                Err(format!("fail {attempt}"))
            } else {
                Ok(attempt)
            }
        });

        assert_eq!(result, Ok(3));
        assert_eq!(calls, 3);
    }

    #[test]
    fn run_stops_after_max_attempts() {
        let policy = RetryPolicy::new(3, Duration::ZERO);
        let mut calls = 0;

        let result: Result<(), String> = policy.run(|attempt| {
            calls += 1;
            Err(format!("fail {attempt}"))
        });

        assert_eq!(result, Err("fail 3".to_string()));
        assert_eq!(calls, 3);
    }

    #[test]
    fn no_retry_runs_once() {
        let mut calls = 0;
        let result: Result<(), &str> = RetryPolicy::no_retry().run(|_| {
            calls += 1;
            Err("boom")
        });

        assert!(result.is_err());
        assert_eq!(calls, 1);
    }
}
