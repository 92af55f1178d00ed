//! Logging setup shared by the demo binaries.

use std::{error::Error, io};

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs a global `tracing` subscriber writing to stderr.
///
/// Verbosity follows the `RUST_LOG` environment variable. Stdout is left to
/// the printed responses.
///
/// # Errors
///
/// If a global subscriber has already been installed.
pub fn init() -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
}
