//! Commands module for the slash-command CLI
//!
//! Provides command implementations for the action run, config checking and
//! local matching.

pub mod check;
pub mod matching;
pub mod run;
