use thiserror::Error;

use crate::http_client::HttpError;

/// Top-level error type for client operations.
///
/// A rate-limited response is not represented here: once backoff is exhausted
/// the 429 response is handed back to the caller as a normal result.
#[derive(Debug, Error)]
pub enum DuoError {
    /// The request could not be assembled; nothing was sent.
    #[error("cannot build request: {0}")]
    Construction(String),

    #[error("parameter '{key}' must be a string for query encoding, found {found}")]
    ParameterType { key: String, found: &'static str },

    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    #[error("cannot encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("cannot decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl DuoError {
    pub fn construction(message: impl Into<String>) -> Self {
        Self::Construction(message.into())
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::Construction(_) => "duo.construction",
            Self::ParameterType { .. } => "duo.parameter_type",
            Self::Transport(_) => "duo.transport",
            Self::Encode(_) => "duo.encode",
            Self::Decode(_) => "duo.decode",
        }
    }
}
