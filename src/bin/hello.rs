//! Prints the response to a single `greet` query.

use std::io;

use anyhow::{anyhow, Context as _};
use graphql_greetings::{driver, hello, telemetry};

fn main() -> anyhow::Result<()> {
    telemetry::init().map_err(|e| anyhow!(e))?;

    let schema = hello::schema().context("invalid `hello` schema")?;
    driver::run(&schema, &hello::queries(), io::stdout().lock())
        .context("failed to print responses")?;

    Ok(())
}
