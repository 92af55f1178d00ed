//! Prints the responses to the greeting queries, in order.

use std::io;

use anyhow::{anyhow, Context as _};
use graphql_greetings::{driver, greetings, telemetry};

fn main() -> anyhow::Result<()> {
    telemetry::init().map_err(|e| anyhow!(e))?;

    let schema = greetings::schema().context("invalid `greetings` schema")?;
    driver::run(&schema, &greetings::queries(), io::stdout().lock())
        .context("failed to print responses")?;

    Ok(())
}
