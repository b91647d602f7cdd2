//! Triggering event payload
//!
//! Only `comment.body` is read. It is present on `issue_comment`,
//! `pull_request_review_comment` and `commit_comment` events.

use std::path::Path;

use serde_json::Value;

use crate::{inputs::CommentSource, Error, Result};

/// Extract the comment body from a webhook payload
///
/// # Errors
///
/// Returns `Error::Event` if the payload has no string `comment.body`.
pub fn comment_body(payload: &Value) -> Result<String> {
    payload
        .pointer("/comment/body")
        .and_then(Value::as_str)
        .map(ToString::to_string)
        .ok_or_else(|| Error::Event("payload has no comment.body".to_string()))
}

/// Read a webhook payload from disk and extract the comment body
///
/// # Errors
///
/// Returns `Error::Event` if the file cannot be read, is not JSON, or has no
/// comment body.
pub async fn read_comment(path: &Path) -> Result<String> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::Event(format!("failed to read {}: {e}", path.display())))?;
    let payload: Value = serde_json::from_str(&text)
        .map_err(|e| Error::Event(format!("{} is not valid JSON: {e}", path.display())))?;
    comment_body(&payload)
}

/// Resolve the command string from its source
///
/// # Errors
///
/// See [`read_comment`].
pub async fn load_comment(source: &CommentSource) -> Result<String> {
    match source {
        CommentSource::Text(text) => Ok(text.clone()),
        CommentSource::EventFile(path) => read_comment(path).await,
    }
}
