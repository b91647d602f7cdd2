//! Error types for slash-command-core
//!
//! Only configuration problems are errors. A command that fails to match is
//! reported through [`crate::Outcome`], never through this type.

use thiserror::Error;

/// Configuration error found while validating a command tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The document has no top-level commands
    #[error("configuration must contain at least one command")]
    NoCommands,

    /// A command entry without a `name`
    #[error("command #{index} under `{parent}` is missing name")]
    MissingName {
        /// Display path of the parent level
        parent: String,
        /// 1-based position within the parent level
        index: usize,
    },

    /// A command carrying both `result` and `commands`
    #[error("`{path}` must contain result or commands, not both")]
    BothResultAndCommands {
        /// Display path of the offending command
        path: String,
    },

    /// A command carrying neither `result` nor `commands`
    #[error("`{path}` must contain result or commands")]
    MissingResultOrCommands {
        /// Display path of the offending command
        path: String,
    },
}

/// Result type alias for slash-command-core operations
pub type Result<T> = std::result::Result<T, Error>;
