use crate::core::PatternError;
use thiserror::Error;

/// Failure to start a game or submit a guess
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("server responded with status {code}: {body}")]
    Status { code: u16, body: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to read response: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("response carried an invalid pattern: {0}")]
    InvalidPattern(#[from] PatternError),

    #[error("request rejected: {0}")]
    Rejected(String),
}

impl From<ureq::Error> for TransportError {
    fn from(error: ureq::Error) -> Self {
        match error {
            ureq::Error::Status(code, response) => Self::Status {
                code,
                body: response.into_string().unwrap_or_default(),
            },
            ureq::Error::Transport(transport) => Self::Network(transport.to_string()),
        }
    }
}
