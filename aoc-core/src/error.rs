//! Error types for the solver library

use crate::key::DayKey;
use std::num::ParseIntError;
use thiserror::Error;

/// Error type for parsing input data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A line has the wrong number of whitespace-separated fields
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A token could not be read as an integer
    #[error("line {line}: invalid integer {token:?}: {source}")]
    InvalidInteger {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is not implemented
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is out of range (exceeds PARTS)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// An error occurred while solving the part
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for solver operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver is registered for the given year and day
    #[error("No solver registered for {0}")]
    NotFound(DayKey),
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Attempted to register a solver for a year-day combination that already exists
    #[error("Duplicate solver registration for {0}")]
    DuplicateSolver(DayKey),
    /// The year-day combination is outside the supported range
    #[error("{0} is outside the supported range")]
    InvalidYearDay(DayKey),
}
