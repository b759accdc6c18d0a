//! Advent of Code puzzle solutions
//!
//! Solutions are organized by year. Each day is a unit struct implementing
//! the `aoc-core` solver contract; [`register_all`] is the single place that
//! adds them to a registry.

mod utils;

pub mod year_2024;

use aoc_core::{RegistrationError, RegistryBuilder, SolverRegistry};

/// Register every implemented solution with `builder`
pub fn register_all(builder: RegistryBuilder) -> Result<RegistryBuilder, RegistrationError> {
    year_2024::register(builder)
}

/// Build a registry holding every implemented solution
pub fn registry() -> Result<SolverRegistry, RegistrationError> {
    Ok(register_all(RegistryBuilder::new())?.build())
}
