//! Action inputs
//!
//! Everything the `run` subcommand needs, gathered from command-line flags.
//! Each flag falls back to the environment variable the Actions runner sets
//! (`INPUT_*` for action inputs, `GITHUB_*` for workflow context), so the same
//! binary works as an action step and from a terminal.

use std::{fmt, path::PathBuf, str::FromStr};

use clap::ArgMatches;

use crate::{Error, Result};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_SUCCESS_REACTION: &str = "rocket";
pub const DEFAULT_FAILURE_REACTION: &str = "confused";

/// `owner/repo` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl FromStr for Repository {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(Error::InvalidInput(format!(
                "repository '{s}' must have the form owner/repo"
            ))),
        }
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Where the command tree comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A file in the repository, read through the contents API
    Remote {
        api_url: String,
        repository: Repository,
        path: String,
        reference: String,
        token: String,
    },
    /// A local YAML or JSON file
    File(PathBuf),
}

/// Where the command string comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentSource {
    /// Given directly
    Text(String),
    /// The `comment.body` of a webhook payload on disk
    EventFile(PathBuf),
}

/// Reactions reported for each kind of outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reactions {
    pub success: String,
    pub failure: String,
}

impl Default for Reactions {
    fn default() -> Self {
        Self {
            success: DEFAULT_SUCCESS_REACTION.to_string(),
            failure: DEFAULT_FAILURE_REACTION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionInputs {
    pub config: ConfigSource,
    pub comment: CommentSource,
    pub reactions: Reactions,
    /// `GITHUB_OUTPUT` file; outputs go to stdout when absent
    pub output_file: Option<PathBuf>,
}

impl ActionInputs {
    /// Assemble inputs from the `run` subcommand's matches
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingInput` naming the first required input that is
    /// neither given as a flag nor set in the environment, and
    /// `Error::InvalidInput` for a malformed repository.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let config = match matches.get_one::<PathBuf>("config-file") {
            Some(path) => ConfigSource::File(path.clone()),
            None => ConfigSource::Remote {
                api_url: optional(matches, "api-url")
                    .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
                repository: required(matches, "repository")?.parse()?,
                path: required(matches, "configuration-path")?,
                reference: required(matches, "sha")?,
                token: required(matches, "repo-token")?,
            },
        };

        let comment = match optional(matches, "comment") {
            Some(text) => CommentSource::Text(text),
            None => matches
                .get_one::<PathBuf>("event-path")
                .cloned()
                .map(CommentSource::EventFile)
                .ok_or_else(|| Error::MissingInput("comment or event-path".to_string()))?,
        };

        let defaults = Reactions::default();
        let reactions = Reactions {
            success: optional(matches, "success-reaction").unwrap_or(defaults.success),
            failure: optional(matches, "failure-reaction").unwrap_or(defaults.failure),
        };

        Ok(Self {
            config,
            comment,
            reactions,
            output_file: matches.get_one::<PathBuf>("output-file").cloned(),
        })
    }
}

/// A string argument, treating an empty value as absent.
/// The runner sets `INPUT_*` to an empty string for omitted inputs.
fn optional(matches: &ArgMatches, id: &str) -> Option<String> {
    matches
        .get_one::<String>(id)
        .filter(|value| !value.trim().is_empty())
        .cloned()
}

fn required(matches: &ArgMatches, id: &str) -> Result<String> {
    optional(matches, id).ok_or_else(|| Error::MissingInput(id.to_string()))
}
