//! Advent of Code 2024

use aoc_core::{RegistrationError, RegistryBuilder};

pub mod day_1;
pub mod day_2;

pub const YEAR: u16 = 2024;

/// Register the 2024 solutions, one line per day
pub fn register(builder: RegistryBuilder) -> Result<RegistryBuilder, RegistrationError> {
    builder
        .register::<day_1::Solver>(YEAR, 1)?
        .register::<day_2::Solver>(YEAR, 2)
}
