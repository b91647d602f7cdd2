use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::commands::check::{check_file, command_paths};

#[allow(clippy::print_stdout)]
pub async fn handle(matches: &ArgMatches) -> Result<i32> {
    let path = matches
        .get_one::<PathBuf>("file")
        .context("file is required")?;

    let tree = check_file(path).await?;
    let paths = command_paths(&tree);

    println!("{}: {} command(s)", path.display(), paths.len());
    for command in paths {
        println!("  {command}");
    }

    Ok(0)
}
