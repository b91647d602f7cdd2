//! Raw configuration document
//!
//! The shape a YAML or JSON config decodes into before validation. Every
//! field is optional here so that structural problems surface as
//! [`crate::Error`] values with a path, rather than as opaque decode errors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Prefix applied to root-level commands that do not declare their own
pub const DEFAULT_ROOT_PREFIX: &str = "/";

/// Top-level configuration document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawConfig {
    /// Prefix for root-level commands, `/` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Root-level commands
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<RawCommand>>,
}

/// One entry of the command tree as written by the user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCommand {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<RawCommand>>,
}

impl RawConfig {
    /// Root prefix in effect for this document
    #[must_use]
    pub fn root_prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or(DEFAULT_ROOT_PREFIX)
    }
}

impl RawCommand {
    /// Create a leaf entry
    #[must_use]
    pub fn leaf(name: impl Into<String>, result: Value) -> Self {
        Self {
            name: Some(name.into()),
            result: Some(result),
            ..Self::default()
        }
    }

    /// Create a branch entry
    #[must_use]
    pub fn branch(name: impl Into<String>, commands: Vec<Self>) -> Self {
        Self {
            name: Some(name.into()),
            commands: Some(commands),
            ..Self::default()
        }
    }

    /// Add aliases to this entry
    #[must_use]
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Set an explicit prefix for this entry
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}
