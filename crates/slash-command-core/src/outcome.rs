//! Match outcome types

use std::fmt;

use itertools::Itertools;
use serde_json::Value;

/// Why a command did not resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// A token matched nothing at its level
    UnknownCommand,
    /// Input ran out while a command still expected another token
    IncompleteCommand,
}

impl FailureKind {
    /// Label used at the start of a failure message
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UnknownCommand => "Unknown command",
            Self::IncompleteCommand => "Incomplete command",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A failed match, with everything needed to explain it to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchFailure {
    kind: FailureKind,
    consumed: Vec<String>,
    context: Vec<String>,
    options: Vec<String>,
}

impl MatchFailure {
    /// Build a failure.
    ///
    /// `consumed` is every token looked at, including an unmatched last one.
    /// `options` are the display names valid at the point of failure.
    #[must_use]
    pub fn new(kind: FailureKind, consumed: Vec<String>, options: Vec<String>) -> Self {
        let matched = match kind {
            FailureKind::UnknownCommand => consumed.len().saturating_sub(1),
            FailureKind::IncompleteCommand => consumed.len(),
        };
        let context = consumed.iter().take(matched).cloned().collect();
        Self {
            kind,
            consumed,
            context,
            options,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Tokens consumed before the failure, as typed
    #[must_use]
    pub fn consumed(&self) -> &[String] {
        &self.consumed
    }

    /// Matched tokens that lead up to the suggestion list
    #[must_use]
    pub fn context(&self) -> &[String] {
        &self.context
    }

    /// Valid next tokens, in declaration order
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// The "try one of" part, e.g. `/order [pizza, nachos]`
    #[must_use]
    pub fn suggestion(&self) -> String {
        let options = format!("[{}]", self.options.join(", "));
        self.context
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(options.as_str()))
            .join(" ")
    }

    /// Full user-facing message
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MatchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} `{}` - try one of `{}`",
            self.kind,
            self.consumed.join(" "),
            self.suggestion()
        )
    }
}

/// Result of matching a command string against a tree
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The input reached a terminal command
    Success {
        /// The terminal command's payload, unmodified
        result: Value,
    },
    /// The input did not resolve
    Failure(MatchFailure),
}

impl Outcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Payload on success
    #[must_use]
    pub const fn result(&self) -> Option<&Value> {
        match self {
            Self::Success { result } => Some(result),
            Self::Failure(_) => None,
        }
    }

    /// Failure details, if the match failed
    #[must_use]
    pub const fn failure(&self) -> Option<&MatchFailure> {
        match self {
            Self::Failure(failure) => Some(failure),
            Self::Success { .. } => None,
        }
    }

    /// Failure message, if the match failed
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.failure().map(MatchFailure::message)
    }
}
