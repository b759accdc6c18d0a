//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::CliError;
use crate::inputs::{InputStore, read_input};
use aoc_core::{DayKey, PartAnswer, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use tracing::{debug, info};

/// Work item representing one day to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub key: DayKey,
    pub parts: RangeInclusive<u8>,
    pub input_path: PathBuf,
}

/// Answers for one day
#[derive(Debug, Clone)]
pub struct DayResult {
    pub key: DayKey,
    pub title: &'static str,
    pub parse_duration: TimeDelta,
    pub answers: Vec<PartAnswer>,
}

/// Runs registered solvers one day at a time, in calendar order
pub struct Executor<'r> {
    registry: &'r SolverRegistry,
    inputs: InputStore,
    year: u16,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
    input_override: Option<PathBuf>,
}

impl<'r> Executor<'r> {
    pub fn new(registry: &'r SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: InputStore::new(config.inputs_dir.clone()),
            year: config.year,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
            input_override: config.input_override.clone(),
        }
    }

    /// Collect work items by filtering from registry metadata
    ///
    /// An explicitly requested day must be registered; this is checked
    /// here, before any input is read.
    pub fn collect_work_items(&self) -> Result<Vec<WorkItem>, CliError> {
        if let Some(day) = self.day_filter {
            let key = DayKey::new(self.year, day);
            if !self.registry.contains(key) {
                return Err(CliError::UnregisteredDay(key));
            }
        }

        Ok(self
            .registry
            .iter_info()
            .filter(|info| info.key.year == self.year)
            .filter(|info| self.day_filter.is_none_or(|d| info.key.day == d))
            .map(|info| WorkItem {
                key: info.key,
                parts: self.filter_parts(info.parts),
                input_path: self
                    .inputs
                    .resolve(info.key.day, self.input_override.as_deref()),
            })
            .filter(|w| !w.parts.is_empty())
            .collect())
    }

    /// Filter parts based on the part filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Load, parse and solve one work item
    pub fn run(&self, work: &WorkItem) -> Result<DayResult, CliError> {
        let input = read_input(&work.input_path)?;

        let mut solver = self
            .registry
            .create_solver(work.key, &input)
            .map_err(|e| CliError::solver(work.key, e))?;
        debug!(key = %work.key, parse = %solver.parse_duration(), "parsed input");

        let answers = work
            .parts
            .clone()
            .map(|part| solver.solve(part))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CliError::solver(work.key, e))?;

        for answer in &answers {
            debug!(key = %work.key, part = answer.part, solve = %answer.elapsed, "solved part");
        }

        Ok(DayResult {
            key: work.key,
            title: solver.title(),
            parse_duration: solver.parse_duration(),
            answers,
        })
    }

    /// Run every work item in order, handing each result to `on_result`
    ///
    /// Stops at the first failing day.
    pub fn execute(
        &self,
        work_items: &[WorkItem],
        mut on_result: impl FnMut(&DayResult),
    ) -> Result<Vec<DayResult>, CliError> {
        let mut results = Vec::with_capacity(work_items.len());
        for work in work_items {
            info!(key = %work.key, path = %work.input_path.display(), "running solver");
            let result = self.run(work)?;
            on_result(&result);
            results.push(result);
        }
        Ok(results)
    }
}
