//! Config check command
//!
//! Validates a local command tree document without matching anything.

use std::path::Path;

use slash_command_core::{validate, CommandLevel, CommandTree};

use crate::{config, inputs::ConfigSource, Result};

/// Load and validate a local document
///
/// # Errors
///
/// Returns the first configuration problem, or a read/decode error.
pub async fn check_file(path: &Path) -> Result<CommandTree> {
    let raw = config::load_config(&ConfigSource::File(path.to_path_buf())).await?;
    Ok(validate(&raw)?)
}

/// Every complete command path in the tree, in declaration order
#[must_use]
pub fn command_paths(tree: &CommandTree) -> Vec<String> {
    fn walk(level: &CommandLevel, prefix: &str, paths: &mut Vec<String>) {
        for node in level.nodes() {
            let path = if prefix.is_empty() {
                node.display_name()
            } else {
                format!("{prefix} {}", node.display_name())
            };
            match node.children() {
                Some(children) => walk(children, &path, paths),
                None => paths.push(path),
            }
        }
    }

    let mut paths = Vec::new();
    walk(tree.roots(), "", &mut paths);
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[tokio::test]
    async fn test_check_lists_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commands.yaml");
        std::fs::write(
            &path,
            "commands:\n  - name: order\n    commands:\n      - name: pizza\n        result: 1\n      - name: nachos\n        result: 2\n  - name: ping\n    result: 3\n",
        )
        .unwrap();

        let tree = check_file(&path).await.unwrap();
        assert_eq!(
            command_paths(&tree),
            vec!["/order pizza", "/order nachos", "/ping"]
        );
    }

    #[tokio::test]
    async fn test_check_reports_both() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commands.yaml");
        std::fs::write(
            &path,
            "commands:\n  - name: ping\n    result: 1\n    commands:\n      - name: pong\n        result: 2\n",
        )
        .unwrap();

        let err = check_file(&path).await.unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("must contain result or commands, not both"));
    }
}
