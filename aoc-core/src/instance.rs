//! Parsed solver instances and per-part timing

use crate::error::{ParseError, SolveError};
use crate::key::DayKey;
use crate::solver::{Solver, SolverExt};
use chrono::{TimeDelta, Utc};

/// Answer for one part together with how long it took to compute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartAnswer {
    /// Part number (1-based)
    pub part: u8,
    /// The answer string
    pub answer: String,
    /// Wall-clock solve time
    pub elapsed: TimeDelta,
}

/// Run `f` and measure it with UTC timestamps
fn timed<T>(f: impl FnOnce() -> T) -> (T, TimeDelta) {
    let start = Utc::now();
    let value = f();
    (value, Utc::now() - start)
}

/// One parsed puzzle input, ready to solve parts
///
/// Holds the shared data produced by [`AocParser::parse`](crate::AocParser::parse)
/// and how long parsing took. Nothing outlives the instance: every run
/// starts from a fresh parse.
pub struct SolverInstance<'a, S: Solver> {
    key: DayKey,
    shared: S::SharedData<'a>,
    parse_elapsed: TimeDelta,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` for the puzzle identified by `key`
    pub fn new(key: DayKey, input: &'a str) -> Result<Self, ParseError> {
        let (shared, parse_elapsed) = timed(|| S::parse(input));
        Ok(Self {
            key,
            shared: shared?,
            parse_elapsed,
        })
    }
}

/// Type-erased interface for working with any solver through dynamic dispatch
///
/// The registry hands out `Box<dyn DynSolver>` so the runner can drive
/// every day the same way regardless of its parsed data type.
///
/// # Example
///
/// ```no_run
/// use aoc_core::DynSolver;
///
/// fn print_all(mut solver: Box<dyn DynSolver>) -> Result<(), aoc_core::SolveError> {
///     println!("{} (parsed in {})", solver.key(), solver.parse_duration());
///     for answer in solver.solve_all()? {
///         println!("Part {}: {}", answer.part, answer.answer);
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve the specified part, timing it
    ///
    /// # Returns
    /// * `Ok(PartAnswer)` - The part was solved
    /// * `Err(SolveError)` - The part is out of range, not implemented, or solving failed
    fn solve(&mut self, part: u8) -> Result<PartAnswer, SolveError>;

    /// Year and day this solver was created for
    fn key(&self) -> DayKey;

    /// Number of parts this solver supports
    fn parts(&self) -> u8;

    /// Puzzle title
    fn title(&self) -> &'static str;

    /// Time spent parsing the input
    fn parse_duration(&self) -> TimeDelta;

    /// Solve every part in order, stopping at the first failure
    fn solve_all(&mut self) -> Result<Vec<PartAnswer>, SolveError> {
        (1..=self.parts()).map(|part| self.solve(part)).collect()
    }
}

impl<'a, S: SolverExt> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<PartAnswer, SolveError> {
        let (answer, elapsed) = timed(|| S::solve_part_checked_range(&mut self.shared, part));
        Ok(PartAnswer {
            part,
            answer: answer?,
            elapsed,
        })
    }

    fn key(&self) -> DayKey {
        self.key
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn title(&self) -> &'static str {
        S::TITLE
    }

    fn parse_duration(&self) -> TimeDelta {
        self.parse_elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AocParser, PartSolver};

    struct Lines;

    impl AocParser for Lines {
        type SharedData<'a> = Vec<&'a str>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            if input.is_empty() {
                return Err(ParseError::InvalidFormat("empty input".into()));
            }
            Ok(input.lines().collect())
        }
    }

    impl PartSolver<1> for Lines {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            Ok(shared.len().to_string())
        }
    }

    impl Solver for Lines {
        const PARTS: u8 = 1;
        const TITLE: &'static str = "Line Count";

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => <Self as PartSolver<1>>::solve(shared),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    #[test]
    fn test_instance_reports_metadata() {
        let key = DayKey::new(2024, 3);
        let instance = SolverInstance::<Lines>::new(key, "a\nb\nc").unwrap();
        assert_eq!(instance.key(), key);
        assert_eq!(instance.parts(), 1);
        assert_eq!(instance.title(), "Line Count");
        assert!(instance.parse_duration() >= TimeDelta::zero());
    }

    #[test]
    fn test_solve_all_returns_answers_in_order() {
        let mut instance = SolverInstance::<Lines>::new(DayKey::new(2024, 3), "a\nb").unwrap();
        let answers = instance.solve_all().unwrap();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].part, 1);
        assert_eq!(answers[0].answer, "2");
    }

    #[test]
    fn test_out_of_range_part_is_rejected() {
        let mut instance = SolverInstance::<Lines>::new(DayKey::new(2024, 3), "a").unwrap();
        assert!(matches!(instance.solve(2), Err(SolveError::PartOutOfRange(2))));
    }

    #[test]
    fn test_parse_failure_propagates() {
        let result = SolverInstance::<Lines>::new(DayKey::new(2024, 3), "");
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }
}
