//! Local match command
//!
//! Resolves a command string against a local document, for trying out a
//! configuration before committing it.

use std::path::Path;

use slash_command_core::{match_command, Outcome};

use crate::{commands::check::check_file, Result};

/// Validate a local document and match `input` against it
///
/// # Errors
///
/// Returns an error if the document cannot be loaded or is invalid. A failed
/// match is returned as `Outcome::Failure`, not as an error.
pub async fn match_file(path: &Path, input: &str) -> Result<Outcome> {
    let tree = check_file(path).await?;
    Ok(match_command(input, &tree))
}
