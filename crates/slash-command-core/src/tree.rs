//! Validated command tree
//!
//! A [`CommandTree`] can only be obtained through [`crate::validate`], so every
//! node in it is known to have a name and exactly one of a result or children.

use std::collections::HashMap;

use serde_json::Value;

/// Payload or next level of a command
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Terminal command carrying the caller's payload
    Leaf {
        /// Returned unmodified on a full match
        result: Value,
    },
    /// Command that expects another token
    Branch {
        /// The next level of the tree
        children: CommandLevel,
    },
}

/// One command of the tree
#[derive(Debug, Clone, PartialEq)]
pub struct CommandNode {
    name: String,
    aliases: Vec<String>,
    prefix: String,
    kind: NodeKind,
}

impl CommandNode {
    pub(crate) const fn new(
        name: String,
        aliases: Vec<String>,
        prefix: String,
        kind: NodeKind,
    ) -> Self {
        Self {
            name,
            aliases,
            prefix,
            kind,
        }
    }

    /// Canonical name, without prefix
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alternative names, without prefix, in declaration order
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Prefix prepended to the name and aliases
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub const fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// `prefix + name`, as shown in suggestions and paths
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{}{}", self.prefix, self.name)
    }

    /// Every token that selects this node: the display name, then each alias
    pub fn display_tokens(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(&self.name)
            .chain(&self.aliases)
            .map(move |token| format!("{}{token}", self.prefix))
    }

    /// Payload, if this is a terminal node
    #[must_use]
    pub const fn result(&self) -> Option<&Value> {
        match &self.kind {
            NodeKind::Leaf { result } => Some(result),
            NodeKind::Branch { .. } => None,
        }
    }

    /// Next level, if this node expects more input
    #[must_use]
    pub const fn children(&self) -> Option<&CommandLevel> {
        match &self.kind {
            NodeKind::Branch { children } => Some(children),
            NodeKind::Leaf { .. } => None,
        }
    }
}

/// The commands of one depth, with a lookup table keyed by display token
#[derive(Debug, Clone, PartialEq)]
pub struct CommandLevel {
    nodes: Vec<CommandNode>,
    index: HashMap<String, usize>,
}

impl CommandLevel {
    /// Build a level. A token declared by several commands selects the first.
    pub(crate) fn new(nodes: Vec<CommandNode>) -> Self {
        let mut index = HashMap::new();
        for (position, node) in nodes.iter().enumerate() {
            for token in node.display_tokens() {
                index.entry(token).or_insert(position);
            }
        }
        Self { nodes, index }
    }

    /// Commands in declaration order
    #[must_use]
    pub fn nodes(&self) -> &[CommandNode] {
        &self.nodes
    }

    /// Exact, case-sensitive lookup of a typed token
    #[must_use]
    pub fn lookup(&self, token: &str) -> Option<&CommandNode> {
        self.index
            .get(token)
            .and_then(|&position| self.nodes.get(position))
    }

    /// `prefix + name` of every command, in declaration order
    #[must_use]
    pub fn suggestions(&self) -> Vec<String> {
        self.nodes.iter().map(CommandNode::display_name).collect()
    }
}

/// A validated, ready-to-match command tree
#[derive(Debug, Clone, PartialEq)]
pub struct CommandTree {
    roots: CommandLevel,
}

impl CommandTree {
    pub(crate) const fn new(roots: CommandLevel) -> Self {
        Self { roots }
    }

    /// Root-level commands
    #[must_use]
    pub const fn roots(&self) -> &CommandLevel {
        &self.roots
    }
}
