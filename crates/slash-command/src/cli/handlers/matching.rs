use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;
use slash_command_core::Outcome;

use crate::commands::matching::match_file;

#[allow(clippy::print_stdout)]
pub async fn handle(matches: &ArgMatches) -> Result<i32> {
    let path = matches
        .get_one::<PathBuf>("file")
        .context("file is required")?;
    let input = matches
        .get_many::<String>("input")
        .map(|tokens| tokens.map(String::as_str).collect::<Vec<_>>().join(" "))
        .unwrap_or_default();

    match match_file(path, &input).await? {
        Outcome::Success { result } => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(0)
        }
        Outcome::Failure(failure) => {
            println!("{failure}");
            Ok(1)
        }
    }
}
