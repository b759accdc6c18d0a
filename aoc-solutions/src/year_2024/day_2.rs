//! Day 2: Red-Nosed Reports
//!
//! A report is safe when its levels move strictly in one direction by 1 to 3
//! per step. Part 2 additionally tolerates one bad level.

use crate::utils::parse::{ints, records};
use aoc_core::{AocParser, AocSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;
use tracing::debug;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2, title = "Red-Nosed Reports")]
pub struct Solver;

/// Levels read from one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    levels: Vec<i64>,
}

impl Report {
    pub fn levels(&self) -> &[i64] {
        &self.levels
    }

    pub fn is_safe(&self) -> bool {
        is_safe_report(&self.levels)
    }

    /// Safe as-is, or safe once a single level is dropped
    pub fn is_safe_with_dampener(&self) -> bool {
        self.is_safe() || is_safe_with_removal(&self.levels)
    }
}

impl From<Vec<i64>> for Report {
    fn from(levels: Vec<i64>) -> Self {
        Self { levels }
    }
}

/// Parsed reports plus the part 1 verdicts, reused by part 2
#[derive(Debug)]
pub struct SharedData {
    reports: Vec<Report>,
    strictly_safe: Option<Vec<bool>>,
}

/// Whether consecutive differences all share one sign and lie in `1..=3`
///
/// Reports shorter than two levels are trivially safe. A difference that
/// overflows `i64` is far outside the allowed step, so the report is unsafe.
pub fn is_safe_report(levels: &[i64]) -> bool {
    let mut direction = None;
    levels.iter().tuple_windows().all(|(a, b)| {
        let Some(step) = b.checked_sub(*a) else {
            return false;
        };
        let sign = *direction.get_or_insert(step.signum());
        step.signum() == sign && (1..=3).contains(&step.unsigned_abs())
    })
}

/// Whether dropping some single level leaves a safe report
///
/// Indices are tried in order and the search stops at the first success.
pub fn is_safe_with_removal(levels: &[i64]) -> bool {
    let mut reduced = Vec::with_capacity(levels.len().saturating_sub(1));
    (0..levels.len()).any(|skip| {
        reduced.clear();
        reduced.extend_from_slice(&levels[..skip]);
        reduced.extend_from_slice(&levels[skip + 1..]);
        is_safe_report(&reduced)
    })
}

fn strict_verdicts<'s>(reports: &[Report], cache: &'s mut Option<Vec<bool>>) -> &'s [bool] {
    cache.get_or_insert_with(|| reports.iter().map(Report::is_safe).collect())
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let reports = records(input)
            .map(|(line, text)| ints(line, text).map(Report::from))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(reports = reports.len(), "parsed reports");
        Ok(SharedData {
            reports,
            strictly_safe: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let SharedData {
            reports,
            strictly_safe,
        } = shared;
        let safe = strict_verdicts(reports, strictly_safe)
            .iter()
            .filter(|&&safe| safe)
            .count();
        Ok(safe.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let SharedData {
            reports,
            strictly_safe,
        } = shared;
        let verdicts = strict_verdicts(reports, strictly_safe);
        let safe = reports
            .iter()
            .zip(verdicts)
            .filter(|&(report, &safe)| safe || is_safe_with_removal(report.levels()))
            .count();
        Ok(safe.to_string())
    }
}
