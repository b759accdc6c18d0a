//! Log subscriber setup

use crate::error::CliError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Default filter directive for a `-v` count
fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber writing to stderr
///
/// `RUST_LOG`, when set and valid, wins over the verbosity flag.
pub fn init(verbosity: u8) -> Result<(), CliError> {
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(verbosity)))
        .map_err(|e| CliError::Logging(e.to_string()))?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
