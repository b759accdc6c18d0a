//! Solver registry for managing and creating solver instances
//!
//! The registry is an explicit lookup table: it is filled by a chain of
//! [`RegistryBuilder::register`] calls at startup and is immutable once
//! built. Nothing registers itself behind the caller's back.

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::key::DayKey;
use crate::solver::Solver;

// ============================================================================
// Storage Constants and Index Calculation
// ============================================================================

/// Base year for AoC (first year of Advent of Code)
pub const BASE_YEAR: u16 = 2015;
/// Maximum number of years supported (2015-2034)
pub const MAX_YEARS: usize = 20;
/// Days per year in AoC (1-25)
pub const DAYS_PER_YEAR: usize = 25;
/// Total capacity of the flat storage
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// Calculate flat index from a key, returning None if out of bounds
#[inline]
fn calc_index(key: DayKey) -> Option<usize> {
    if key.year < BASE_YEAR || key.year >= BASE_YEAR + MAX_YEARS as u16 {
        return None;
    }
    if key.day == 0 || key.day > DAYS_PER_YEAR as u8 {
        return None;
    }
    let y = (key.year - BASE_YEAR) as usize;
    let d = (key.day - 1) as usize;
    Some(y * DAYS_PER_YEAR + d)
}

/// Reconstruct the key from a flat index
#[inline]
fn from_index(index: usize) -> DayKey {
    DayKey::new(
        BASE_YEAR + (index / DAYS_PER_YEAR) as u16,
        (index % DAYS_PER_YEAR) as u8 + 1,
    )
}

// ============================================================================
// Factory Types
// ============================================================================

/// Factory turning raw input into a parsed, type-erased solver
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    /// Year and day
    pub key: DayKey,
    /// Number of parts this solver supports
    pub parts: u8,
    /// Puzzle title
    pub title: &'static str,
}

struct SolverEntry {
    factory: SolverFactory,
    parts: u8,
    title: &'static str,
}

impl SolverEntry {
    fn info(&self, key: DayKey) -> FactoryInfo {
        FactoryInfo {
            key,
            parts: self.parts,
            title: self.title,
        }
    }
}

fn instantiate<'a, S: Solver + 'static>(
    key: DayKey,
    input: &'a str,
) -> Result<Box<dyn DynSolver + 'a>, ParseError> {
    let instance = SolverInstance::<S>::new(key, input)?;
    Ok(Box::new(instance))
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for constructing a [`SolverRegistry`] with a fluent API
///
/// Registration rejects duplicates and keys outside the supported
/// 2015-2034 / day 1-25 window.
///
/// # Example
///
/// ```
/// use aoc_core::{AocParser, DayKey, ParseError, RegistryBuilder, SolveError, Solver};
///
/// struct Echo;
///
/// impl AocParser for Echo {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.trim().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let registry = RegistryBuilder::new().register::<Echo>(2024, 1).unwrap().build();
///
/// let mut solver = registry.create_solver(DayKey::new(2024, 1), " hi ").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "hi");
/// assert!(registry.create_solver(DayKey::new(2024, 2), "").is_err());
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<SolverEntry>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register solver type `S` for a year and day
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the solver registered, ready for chaining
    /// * `Err(RegistrationError)` - Duplicate or out-of-range year/day
    pub fn register<S: Solver + 'static>(
        self,
        year: u16,
        day: u8,
    ) -> Result<Self, RegistrationError> {
        let key = DayKey::new(year, day);
        self.register_factory(key, S::PARTS, S::TITLE, move |input| {
            instantiate::<S>(key, input)
        })
    }

    /// Register a solver factory with explicit metadata
    ///
    /// Returns an error if the key is out of bounds or already registered.
    pub fn register_factory<F>(
        mut self,
        key: DayKey,
        parts: u8,
        title: &'static str,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = calc_index(key).ok_or(RegistrationError::InvalidYearDay(key))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(key));
        }

        self.entries[index] = Some(SolverEntry {
            factory: Box::new(factory),
            parts,
            title,
        });
        Ok(self)
    }

    /// Finalize the builder into an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Immutable lookup table from [`DayKey`] to solver factory
///
/// Uses a flat Vec with index math for O(1) lookup.
pub struct SolverRegistry {
    entries: Vec<Option<SolverEntry>>,
}

impl SolverRegistry {
    /// Iterate over metadata for all registered solvers in calendar order
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(i, entry)| entry.as_ref().map(|e| e.info(from_index(i))))
    }

    /// Get metadata for a specific solver
    pub fn info(&self, key: DayKey) -> Option<FactoryInfo> {
        calc_index(key)
            .and_then(|i| self.entries.get(i)?.as_ref())
            .map(|e| e.info(key))
    }

    /// Check if a solver is registered for the key
    pub fn contains(&self, key: DayKey) -> bool {
        self.info(key).is_some()
    }

    /// Number of registered solvers
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Whether no solver is registered
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }

    /// Parse `input` with the solver registered for `key`
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Parsed solver, ready to solve parts
    /// * `Err(SolverError::NotFound)` - Nothing registered for the key
    /// * `Err(SolverError::ParseError)` - Input did not parse
    pub fn create_solver<'a>(
        &self,
        key: DayKey,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = calc_index(key)
            .and_then(|i| self.entries.get(i)?.as_ref())
            .ok_or(SolverError::NotFound(key))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }
}
