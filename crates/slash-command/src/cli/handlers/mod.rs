mod check;
mod matching;
mod run;

use anyhow::Result;
use clap::ArgMatches;

/// Run the selected subcommand, returning the process exit status
pub async fn dispatch(matches: &ArgMatches) -> Result<i32> {
    match matches.subcommand() {
        Some(("run", sub_m)) => run::handle(sub_m).await,
        Some(("check", sub_m)) => check::handle(sub_m).await,
        Some(("match", sub_m)) => matching::handle(sub_m).await,
        _ => anyhow::bail!("Unknown command. Run 'slash-command --help' for usage."),
    }
}

/// Render an error and its causes on one line
#[must_use]
pub fn format_error(err: &anyhow::Error) -> String {
    err.chain()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(": ")
}
