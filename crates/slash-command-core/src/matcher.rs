//! Command matching
//!
//! Walks a [`CommandTree`] one token at a time. Matching is exact: a token
//! selects a command only when it equals `prefix + name` or `prefix + alias`
//! for a command of the current level.
//!
//! ```text
//!            match branch          match leaf
//!   Root ───────────────▶ Descending ─────────▶ Terminal
//!    │ │                   │    ▲ │
//!    │ │                   └────┘ │ no match / input ends
//!    │ └──── no match ───▶ UnknownToken
//!    └────── input ends ─▶ Incomplete
//! ```

use serde_json::Value;

use crate::{
    outcome::{FailureKind, MatchFailure, Outcome},
    tree::{CommandLevel, CommandTree, NodeKind},
};

/// Where a match currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    Root,
    Descending,
    Terminal,
    UnknownToken,
    Incomplete,
}

impl MatchPhase {
    /// True once no further input will be consumed
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Terminal | Self::UnknownToken | Self::Incomplete)
    }
}

/// Split a command string on runs of whitespace
///
/// Leading and trailing whitespace produce no empty tokens.
#[must_use]
pub fn tokenize(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}

/// Match a command string against a tree
///
/// Never fails: any input, including an empty one, produces an [`Outcome`].
/// A match ends at the first terminal command, so tokens after it are ignored.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use slash_command_core::{match_command, validate, RawCommand, RawConfig};
///
/// let raw = RawConfig {
///     prefix: None,
///     commands: Some(vec![RawCommand::branch(
///         "order",
///         vec![RawCommand::leaf("pizza", json!({ "action": "order-pizza" }))],
///     )]),
/// };
/// let tree = validate(&raw).unwrap();
///
/// let outcome = match_command("/order pizza", &tree);
/// assert_eq!(outcome.result(), Some(&json!({ "action": "order-pizza" })));
///
/// let outcome = match_command("/order", &tree);
/// assert_eq!(
///     outcome.message().as_deref(),
///     Some("Incomplete command `/order` - try one of `/order [pizza]`")
/// );
/// ```
#[must_use]
pub fn match_command(input: &str, tree: &CommandTree) -> Outcome {
    let mut tokens = tokenize(input).into_iter();
    let mut state = MatchState::new(tree.roots());

    while let Some(token) = tokens.next() {
        if let Some(result) = state.advance(token) {
            let ignored: Vec<&str> = tokens.by_ref().collect();
            if !ignored.is_empty() {
                tracing::warn!(
                    "Ignoring {} token(s) after complete command: {}",
                    ignored.len(),
                    ignored.join(" ")
                );
            }
            return Outcome::Success {
                result: result.clone(),
            };
        }
        if state.phase.is_final() {
            break;
        }
    }

    state.finish()
}

/// Per-call matching state. Lives only for one [`match_command`] call.
#[derive(Debug)]
struct MatchState<'i, 't> {
    consumed: Vec<&'i str>,
    candidates: &'t CommandLevel,
    phase: MatchPhase,
}

impl<'i, 't> MatchState<'i, 't> {
    const fn new(roots: &'t CommandLevel) -> Self {
        Self {
            consumed: Vec::new(),
            candidates: roots,
            phase: MatchPhase::Root,
        }
    }

    /// Consume one token, returning the payload if it completes the command
    fn advance(&mut self, token: &'i str) -> Option<&'t Value> {
        let Some(node) = self.candidates.lookup(token) else {
            tracing::debug!(token, phase = ?self.phase, "no command matches token");
            self.consumed.push(token);
            self.phase = MatchPhase::UnknownToken;
            return None;
        };

        match node.kind() {
            NodeKind::Leaf { result } => {
                tracing::debug!(token, command = node.name(), "matched terminal command");
                self.phase = MatchPhase::Terminal;
                Some(result)
            }
            NodeKind::Branch { children } => {
                tracing::debug!(token, command = node.name(), "descending");
                self.consumed.push(token);
                self.candidates = children;
                self.phase = MatchPhase::Descending;
                None
            }
        }
    }

    fn finish(mut self) -> Outcome {
        let kind = if self.phase == MatchPhase::UnknownToken {
            FailureKind::UnknownCommand
        } else {
            self.phase = MatchPhase::Incomplete;
            FailureKind::IncompleteCommand
        };
        tracing::debug!(phase = ?self.phase, consumed = self.consumed.len(), "match failed");

        Outcome::Failure(MatchFailure::new(
            kind,
            self.consumed.iter().map(ToString::to_string).collect(),
            self.candidates.suggestions(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{validate, RawCommand, RawConfig};

    fn order_tree() -> CommandTree {
        let raw = RawConfig {
            prefix: None,
            commands: Some(vec![RawCommand::branch(
                "order",
                vec![
                    RawCommand::leaf("pizza", json!({ "action": "order-pizza" })),
                    RawCommand::leaf("nachos", json!({ "action": "order-nachos" }))
                        .with_aliases(["chips", "cheese"]),
                ],
            )
            .with_aliases(["gimme"])]),
        };
        validate(&raw).unwrap()
    }

    fn message(input: &str) -> String {
        match_command(input, &order_tree()).message().unwrap()
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        assert_eq!(tokenize("  /order \r\n  nachos\n"), vec!["/order", "nachos"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n\r ").is_empty());
    }

    #[test]
    fn test_full_match() {
        let outcome = match_command("/order nachos", &order_tree());
        assert_eq!(
            outcome,
            Outcome::Success {
                result: json!({ "action": "order-nachos" })
            }
        );
    }

    #[test]
    fn test_aliases_at_every_level() {
        let outcome = match_command("/gimme chips", &order_tree());
        assert_eq!(outcome.result(), Some(&json!({ "action": "order-nachos" })));

        let outcome = match_command("/order cheese", &order_tree());
        assert_eq!(outcome.result(), Some(&json!({ "action": "order-nachos" })));
    }

    #[test]
    fn test_multiline_input() {
        let outcome = match_command("/order\r\npizza\n", &order_tree());
        assert_eq!(outcome.result(), Some(&json!({ "action": "order-pizza" })));
    }

    #[test]
    fn test_unknown_root_token_shows_only_options() {
        // At the root the unmatched token is not repeated before the options,
        // unlike deeper levels where the matched path leads the suggestion.
        assert_eq!(
            message("/pizza sauce"),
            "Unknown command `/pizza` - try one of `[/order]`"
        );
    }

    #[test]
    fn test_unknown_sub_token_keeps_path() {
        assert_eq!(
            message("/order sirloin"),
            "Unknown command `/order sirloin` - try one of `/order [pizza, nachos]`"
        );
    }

    #[test]
    fn test_unknown_sub_token_via_alias_shows_typed_path() {
        assert_eq!(
            message("/gimme sirloin"),
            "Unknown command `/gimme sirloin` - try one of `/gimme [pizza, nachos]`"
        );
    }

    #[test]
    fn test_incomplete_command() {
        assert_eq!(
            message("/order "),
            "Incomplete command `/order` - try one of `/order [pizza, nachos]`"
        );
    }

    #[test]
    fn test_empty_input_is_incomplete_at_root() {
        let outcome = match_command("   ", &order_tree());
        let failure = outcome.failure().unwrap();
        assert_eq!(failure.kind(), FailureKind::IncompleteCommand);
        assert_eq!(failure.options(), ["/order"]);
    }

    #[test]
    fn test_matching_is_case_sensitive_and_exact() {
        assert!(!match_command("/Order nachos", &order_tree()).is_success());
        assert!(!match_command("/order nacho", &order_tree()).is_success());
        assert!(!match_command("order nachos", &order_tree()).is_success());
    }

    #[test]
    fn test_trailing_tokens_after_terminal_are_ignored() {
        let outcome = match_command("/order nachos extra stuff", &order_tree());
        assert_eq!(outcome.result(), Some(&json!({ "action": "order-nachos" })));
    }

    #[test]
    fn test_unknown_token_stops_consuming() {
        let failure = match_command("/order steak nachos", &order_tree())
            .failure()
            .cloned()
            .unwrap();
        assert_eq!(failure.consumed(), ["/order", "steak"]);
        assert_eq!(failure.kind(), FailureKind::UnknownCommand);
    }

    #[test]
    fn test_phase_finality() {
        assert!(!MatchPhase::Root.is_final());
        assert!(!MatchPhase::Descending.is_final());
        assert!(MatchPhase::Terminal.is_final());
        assert!(MatchPhase::UnknownToken.is_final());
        assert!(MatchPhase::Incomplete.is_final());
    }

    #[test]
    fn test_deep_tree() {
        let raw = RawConfig {
            prefix: None,
            commands: Some(vec![RawCommand::branch(
                "deploy",
                vec![RawCommand::branch(
                    "service",
                    vec![RawCommand::leaf("api", json!(["deploy", "api"]))],
                )],
            )]),
        };
        let tree = validate(&raw).unwrap();

        assert_eq!(
            match_command("/deploy service api", &tree).result(),
            Some(&json!(["deploy", "api"]))
        );
        assert_eq!(
            match_command("/deploy service", &tree).message().as_deref(),
            Some("Incomplete command `/deploy service` - try one of `/deploy service [api]`")
        );
        assert_eq!(
            match_command("/deploy service web", &tree).message().as_deref(),
            Some("Unknown command `/deploy service web` - try one of `/deploy service [api]`")
        );
    }

    #[test]
    fn test_empty_branch_offers_no_options() {
        let raw = RawConfig {
            prefix: None,
            commands: Some(vec![
                RawCommand::leaf("ping", json!("pong")),
                RawCommand::branch("todo", vec![]),
            ]),
        };
        let tree = validate(&raw).unwrap();

        assert_eq!(
            match_command("/todo", &tree).message().as_deref(),
            Some("Incomplete command `/todo` - try one of `/todo []`")
        );
        assert_eq!(
            match_command("/todo list", &tree).message().as_deref(),
            Some("Unknown command `/todo list` - try one of `/todo []`")
        );
    }
}
