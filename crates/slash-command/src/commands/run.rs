//! Action run
//!
//! Loads the command tree, resolves the comment against it, and reports the
//! outcome through the action outputs. A comment that does not match is a
//! normal outcome; only an invalid tree or an I/O problem fails the run.

use slash_command_core::{match_command, validate, Outcome};

use crate::{
    config, event,
    inputs::ActionInputs,
    output::{self, ActionOutputs},
    Result,
};

/// Run the action end to end
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or is invalid, if
/// the comment cannot be read, or if the outputs cannot be written. No
/// outputs are written in those cases.
pub async fn run(inputs: &ActionInputs) -> Result<Outcome> {
    let raw = config::load_config(&inputs.config).await?;
    tracing::info!(
        "Using config: {}",
        serde_json::to_string_pretty(&raw).unwrap_or_else(|e| format!("<unprintable: {e}>"))
    );

    let comment = event::load_comment(&inputs.comment).await?;
    tracing::info!("Parsing comment: {comment}");

    let tree = validate(&raw)?;
    let outcome = match_command(&comment, &tree);
    let outputs = ActionOutputs::from_outcome(&outcome, &inputs.reactions)?;

    match &outputs.message {
        None => tracing::info!("Success: {}", outputs.result),
        Some(message) => tracing::info!("Failed: {message}"),
    }

    output::write_outputs(&outputs, inputs.output_file.as_deref())?;
    Ok(outcome)
}
