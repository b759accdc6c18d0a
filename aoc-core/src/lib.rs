//! Advent of Code Solver Core
//!
//! The contract every puzzle solution implements, plus the explicit
//! registry the runner dispatches through.
//!
//! # Overview
//!
//! This library provides:
//! - [`AocParser`]: parse raw input into a typed representation
//! - [`PartSolver<N>`]: compute the answer for part `N`
//! - [`Solver`]: part count, title and part dispatch (derive it with `#[derive(AocSolver)]`)
//! - [`RegistryBuilder`] / [`SolverRegistry`]: a lookup table from [`DayKey`] to solver
//! - Parse and solve timing through [`DynSolver`]
//!
//! # Quick Example
//!
//! ```
//! use aoc_core::{AocParser, AocSolver, DayKey, ParseError, PartSolver, RegistryBuilder, SolveError};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2, title = "Calorie Counting")]
//! pub struct Elves;
//!
//! impl AocParser for Elves {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| line.parse().map_err(|_| ParseError::InvalidFormat("Expected integer".to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Elves {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().max().copied().unwrap_or_default().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Elves {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new().register::<Elves>(2022, 1).unwrap().build();
//!
//! let mut solver = registry.create_solver(DayKey::new(2022, 1), "1\n2\n3").unwrap();
//! assert_eq!(solver.title(), "Calorie Counting");
//! assert_eq!(solver.solve(1).unwrap().answer, "3");
//! assert_eq!(solver.solve(2).unwrap().answer, "6");
//! ```

mod error;
mod instance;
mod key;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, PartAnswer, SolverInstance};
pub use key::DayKey;
pub use registry::{
    BASE_YEAR, DAYS_PER_YEAR, FactoryInfo, MAX_YEARS, RegistryBuilder, SolverFactory,
    SolverRegistry,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

pub use aoc_core_macros::AocSolver;
