//! Slash-command-core - command tree model, validation and matching
//!
//! This crate provides:
//! - The raw configuration document ([`RawConfig`])
//! - Validation into a typed [`CommandTree`]
//! - Token-by-token matching into an [`Outcome`]
//!
//! Matching never fails; only an invalid configuration is an [`Error`].

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod error;
pub mod matcher;
pub mod outcome;
pub mod raw;
pub mod tree;
pub mod validate;

pub use error::{Error, Result};
pub use matcher::{match_command, tokenize, MatchPhase};
pub use outcome::{FailureKind, MatchFailure, Outcome};
pub use raw::{RawCommand, RawConfig, DEFAULT_ROOT_PREFIX};
pub use tree::{CommandLevel, CommandNode, CommandTree, NodeKind};
pub use validate::{validate, ROOT_PATH};
