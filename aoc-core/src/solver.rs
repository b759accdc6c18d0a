//! The solver contract: parse once, then answer parts from the parsed data

use crate::error::{ParseError, SolveError};

/// Turns raw puzzle text into the data every part works on
///
/// `SharedData` may own its data or borrow from the input; it may also
/// carry results that a later part wants to reuse.
///
/// # Example
///
/// ```
/// use aoc_core::{AocParser, ParseError};
///
/// /// Whitespace-separated level readings, one report per line
/// struct Readings;
///
/// impl AocParser for Readings {
///     type SharedData<'a> = Vec<Vec<i64>>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|line| {
///                 line.split_whitespace()
///                     .map(|t| t.parse().map_err(|_| ParseError::InvalidFormat(t.to_string())))
///                     .collect::<Result<Vec<i64>, _>>()
///             })
///             .collect()
///     }
/// }
///
/// assert_eq!(Readings::parse("1 2\n3").unwrap(), vec![vec![1, 2], vec![3]]);
/// assert!(Readings::parse("1 x").is_err());
/// ```
pub trait AocParser {
    /// Parsed input plus anything cached between parts
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Answer for part `N`
///
/// Implement once per part; `#[derive(AocSolver)]` wires the impls into
/// [`Solver::solve_part`].
///
/// # Example
///
/// ```
/// use aoc_core::{AocParser, ParseError, PartSolver, SolveError};
///
/// struct Pairs;
///
/// impl AocParser for Pairs {
///     type SharedData<'a> = Vec<(&'a str, &'a str)>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|line| {
///                 line.split_once(' ')
///                     .ok_or_else(|| ParseError::InvalidFormat(line.to_string()))
///             })
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Pairs {
///     /// Rows whose two columns agree
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().filter(|(l, r)| l == r).count().to_string())
///     }
/// }
///
/// let mut shared = Pairs::parse("3 3\n4 1").unwrap();
/// assert_eq!(<Pairs as PartSolver<1>>::solve(&mut shared).unwrap(), "1");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A whole puzzle: how many parts it has, its title, and part dispatch
///
/// Usually derived with `#[derive(AocSolver)]`. A manual impl only needs to
/// map each part number to an answer.
///
/// # Example
///
/// ```
/// use aoc_core::{AocParser, ParseError, SolveError, Solver};
///
/// struct Columns;
///
/// impl AocParser for Columns {
///     type SharedData<'a> = (Vec<i64>, Vec<i64>);
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         let mut columns = (Vec::new(), Vec::new());
///         for line in input.lines() {
///             let mut it = line.split_whitespace().map(str::parse::<i64>);
///             match (it.next(), it.next()) {
///                 (Some(Ok(l)), Some(Ok(r))) => {
///                     columns.0.push(l);
///                     columns.1.push(r);
///                 }
///                 _ => return Err(ParseError::InvalidFormat(line.to_string())),
///             }
///         }
///         Ok(columns)
///     }
/// }
///
/// impl Solver for Columns {
///     const PARTS: u8 = 2;
///     const TITLE: &'static str = "Column Sums";
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.0.iter().sum::<i64>().to_string()),
///             2 => Ok(shared.1.iter().sum::<i64>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut shared = Columns::parse("3   4\n4   3").unwrap();
/// assert_eq!(Columns::solve_part(&mut shared, 1).unwrap(), "7");
/// assert_eq!(Columns::solve_part(&mut shared, 2).unwrap(), "7");
/// ```
pub trait Solver: AocParser {
    /// Number of parts, numbered from 1
    const PARTS: u8;

    /// Puzzle title shown next to answers; empty when unknown
    const TITLE: &'static str = "";

    /// Answer `part`, or [`SolveError::PartNotImplemented`] when there is
    /// no such part
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked part dispatch, blanket-implemented for every [`Solver`]
pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`], but rejects parts outside `1..=PARTS`
    /// with [`SolveError::PartOutOfRange`] before dispatching
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
