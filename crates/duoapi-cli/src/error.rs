use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("missing credential: set {0}")]
    MissingCredential(&'static str),

    #[error(transparent)]
    Api(#[from] duoapi_core::DuoError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    /// Stable identifier printed alongside the message.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingCredential(_) => "cli.missing_credential",
            Self::Api(error) => error.code(),
            Self::Serialization(_) => "cli.serialization",
        }
    }

    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::MissingCredential(_) => 2,
            Self::Api(duoapi_core::DuoError::Construction(_))
            | Self::Api(duoapi_core::DuoError::ParameterType { .. }) => 2,
            Self::Api(duoapi_core::DuoError::Decode(_))
            | Self::Api(duoapi_core::DuoError::Encode(_))
            | Self::Serialization(_) => 4,
            Self::Api(duoapi_core::DuoError::Transport(_)) => 5,
        }
    }
}
