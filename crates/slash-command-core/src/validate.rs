//! Configuration validation
//!
//! Turns a [`RawConfig`] into a [`CommandTree`]. The raw document is first
//! walked breadth-first, shallowest level first and in declaration order
//! within a level, so that the error reported for a document with several
//! problems is the one nearest the root. Only then is the typed tree built.

use std::collections::VecDeque;

use crate::{
    raw::{RawCommand, RawConfig},
    tree::{CommandLevel, CommandNode, CommandTree, NodeKind},
    Error, Result,
};

/// Display path used for errors about the document root
pub const ROOT_PATH: &str = "<root>";

/// Validate a raw configuration and build the command tree from it
///
/// # Errors
///
/// Returns the first structural problem found:
/// - `Error::NoCommands` for a missing or empty top-level `commands` list
/// - `Error::MissingName` for an entry without a non-empty name
/// - `Error::BothResultAndCommands` / `Error::MissingResultOrCommands`
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use slash_command_core::{validate, RawCommand, RawConfig};
///
/// let raw = RawConfig {
///     prefix: None,
///     commands: Some(vec![RawCommand::leaf("ping", json!("pong"))]),
/// };
/// let tree = validate(&raw).unwrap();
/// assert_eq!(tree.roots().suggestions(), vec!["/ping"]);
/// ```
pub fn validate(config: &RawConfig) -> Result<CommandTree> {
    let commands = config
        .commands
        .as_deref()
        .filter(|commands| !commands.is_empty())
        .ok_or(Error::NoCommands)?;

    check(commands, config.root_prefix())?;
    Ok(CommandTree::new(build_level(commands, config.root_prefix())))
}

/// A level waiting to be checked
struct PendingLevel<'a> {
    path: String,
    default_prefix: &'a str,
    commands: &'a [RawCommand],
}

/// What a single entry turned out to be
enum Shape<'a> {
    Leaf,
    Branch(&'a [RawCommand]),
}

/// Breadth-first structural check, stopping at the first violation
fn check(roots: &[RawCommand], root_prefix: &str) -> Result<()> {
    let mut queue = VecDeque::from([PendingLevel {
        path: ROOT_PATH.to_string(),
        default_prefix: root_prefix,
        commands: roots,
    }]);

    while let Some(level) = queue.pop_front() {
        for (position, raw) in level.commands.iter().enumerate() {
            let name = require_name(raw, &level.path, position)?;
            let token = format!("{}{name}", prefix_of(raw, level.default_prefix));
            let path = child_path(&level.path, &token);
            if let Shape::Branch(children) = shape(raw, &path)? {
                queue.push_back(PendingLevel {
                    path,
                    default_prefix: "",
                    commands: children,
                });
            }
        }
    }

    Ok(())
}

/// Build the typed level, depth-first. Only called once `check` has accepted
/// the whole document, so every entry has a name and exactly one of a result
/// or children.
fn build_level(commands: &[RawCommand], default_prefix: &str) -> CommandLevel {
    CommandLevel::new(
        commands
            .iter()
            .map(|raw| build_node(raw, default_prefix))
            .collect(),
    )
}

fn build_node(raw: &RawCommand, default_prefix: &str) -> CommandNode {
    let kind = match raw.commands.as_deref() {
        Some(children) => NodeKind::Branch {
            children: build_level(children, ""),
        },
        None => NodeKind::Leaf {
            result: raw.result.clone().unwrap_or_default(),
        },
    };

    CommandNode::new(
        raw.name.clone().unwrap_or_default(),
        raw.aliases.clone(),
        prefix_of(raw, default_prefix).to_string(),
        kind,
    )
}

/// The entry's own prefix, or the one its level hands down
fn prefix_of<'a>(raw: &'a RawCommand, default_prefix: &'a str) -> &'a str {
    raw.prefix.as_deref().unwrap_or(default_prefix)
}

fn require_name<'a>(raw: &'a RawCommand, parent: &str, position: usize) -> Result<&'a str> {
    raw.name
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| Error::MissingName {
            parent: parent.to_string(),
            index: position + 1,
        })
}

fn shape<'a>(raw: &'a RawCommand, path: &str) -> Result<Shape<'a>> {
    match (&raw.result, &raw.commands) {
        (Some(_), None) => Ok(Shape::Leaf),
        (None, Some(children)) => Ok(Shape::Branch(children)),
        (Some(_), Some(_)) => Err(Error::BothResultAndCommands {
            path: path.to_string(),
        }),
        (None, None) => Err(Error::MissingResultOrCommands {
            path: path.to_string(),
        }),
    }
}

fn child_path(parent: &str, token: &str) -> String {
    if parent == ROOT_PATH {
        token.to_string()
    } else {
        format!("{parent} {token}")
    }
}
