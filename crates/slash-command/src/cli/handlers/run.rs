use anyhow::Result;
use clap::ArgMatches;

use crate::{commands::run::run, inputs::ActionInputs};

pub async fn handle(matches: &ArgMatches) -> Result<i32> {
    let inputs = ActionInputs::from_matches(matches)?;
    run(&inputs).await?;
    Ok(0)
}
