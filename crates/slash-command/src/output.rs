//! Action outputs and workflow commands
//!
//! Outputs are written in the multi-line form understood by the runner:
//!
//! ```text
//! name<<DELIMITER
//! value
//! DELIMITER
//! ```
//!
//! appended to the `GITHUB_OUTPUT` file, or printed to stdout when no file is
//! configured.

use std::{fs::OpenOptions, io::Write, path::Path};

use slash_command_core::Outcome;

use crate::{inputs::Reactions, Error, Result};

const DELIMITER: &str = "SLASH_COMMAND_EOF";

/// The three outputs of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutputs {
    /// Compact JSON of the matched result, `{}` on failure
    pub result: String,
    /// Block-quoted failure message, only set on failure
    pub message: Option<String>,
    pub reaction: String,
}

impl ActionOutputs {
    /// # Errors
    ///
    /// Returns `Error::Output` if the result cannot be serialized.
    pub fn from_outcome(outcome: &Outcome, reactions: &Reactions) -> Result<Self> {
        match outcome {
            Outcome::Success { result } => Ok(Self {
                result: serde_json::to_string(result)
                    .map_err(|e| Error::Output(format!("failed to serialize result: {e}")))?,
                message: None,
                reaction: reactions.success.clone(),
            }),
            Outcome::Failure(failure) => Ok(Self {
                result: "{}".to_string(),
                message: Some(format!("> {failure}")),
                reaction: reactions.failure.clone(),
            }),
        }
    }

    /// Name/value pairs in the order they are written
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![("result", self.result.as_str())];
        if let Some(message) = &self.message {
            pairs.push(("message", message.as_str()));
        }
        pairs.push(("reaction", self.reaction.as_str()));
        pairs
    }
}

/// Render one output in heredoc form, with a delimiter absent from the value
#[must_use]
pub fn format_output(name: &str, value: &str) -> String {
    let delimiter = std::iter::successors(Some(DELIMITER.to_string()), |d| Some(format!("{d}_")))
        .find(|d| !value.contains(d.as_str()))
        .unwrap_or_else(|| DELIMITER.to_string());
    format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}

/// Write every output to `file`, or to stdout if there is none
///
/// # Errors
///
/// Returns `Error::Output` if the file cannot be opened or written.
pub fn write_outputs(outputs: &ActionOutputs, file: Option<&Path>) -> Result<()> {
    let rendered: String = outputs
        .pairs()
        .into_iter()
        .map(|(name, value)| format_output(name, value))
        .collect();

    match file {
        Some(path) => OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut f| f.write_all(rendered.as_bytes()))
            .map_err(|e| Error::Output(format!("failed to write {}: {e}", path.display()))),
        None => {
            #[allow(clippy::print_stdout)]
            {
                print!("{rendered}");
            }
            Ok(())
        }
    }
}

/// Escape a value for use in a `::command::` workflow line
#[must_use]
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Workflow command that marks the step as failed with `message`
#[must_use]
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}
