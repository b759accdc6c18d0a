//! Error types for the CLI

use aoc_core::DayKey;
use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
///
/// Every variant ends the invocation; nothing is retried.
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No solution is registered for the requested day
    #[error("No solution registered for {0}")]
    UnregisteredDay(DayKey),

    /// The input file is missing or unreadable
    #[error("Cannot read input file {}: {source}", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parsing or solving failed for a day
    #[error("{key}: {source}")]
    Solver {
        key: DayKey,
        #[source]
        source: aoc_core::SolverError,
    },

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_core::RegistrationError),

    /// Log subscriber could not be installed
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl CliError {
    pub fn solver(key: DayKey, source: impl Into<aoc_core::SolverError>) -> Self {
        Self::Solver {
            key,
            source: source.into(),
        }
    }
}
