//! Slash-command - resolve comment commands against a command tree
//!
//! Action entry point around `slash-command-core`: reads the configuration
//! and the triggering comment, matches, and writes the action outputs.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod event;
pub mod github;
pub mod inputs;
pub mod output;

pub use error::{Error, Result};
