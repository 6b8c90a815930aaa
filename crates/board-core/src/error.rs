//! Board Errors
//!
//! Failures of remote calls. None of these are fatal to the UI; callers turn
//! them into a sync status or a no-op.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("document not found: {0}")]
    NotFound(String),
    #[error("create response carried no document location")]
    MissingLocation,
    #[error("could not decode document: {0}")]
    Decode(String),
    #[error("text generation failed: {0}")]
    Polish(String),
}

impl From<serde_json::Error> for BoardError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value.to_string())
    }
}

pub type BoardResult<T> = Result<T, BoardError>;
