//! Error types for the slash-command action

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input required and not supplied: {0}")]
    MissingInput(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Event error: {0}")]
    Event(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("Invalid configuration: {0}")]
    Config(slash_command_core::Error),
}

// The core error is part of the message, not a `source()`.
impl From<slash_command_core::Error> for Error {
    fn from(err: slash_command_core::Error) -> Self {
        Self::Config(err)
    }
}

impl Error {
    /// Process exit code for this error: 1 for bad inputs or configuration,
    /// 2 for failures talking to the outside world.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::MissingInput(_) | Self::InvalidInput(_) | Self::Config(_) => 1,
            Self::Event(_) | Self::Fetch(_) | Self::Decode(_) | Self::Output(_) => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
