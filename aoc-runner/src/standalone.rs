//! Entry point shared by the single-day binaries

use crate::cli::StandaloneArgs;
use crate::config::{project_root, resolve_path};
use crate::inputs::{InputStore, read_input};
use crate::{DEFAULT_INPUTS_DIR, DEFAULT_YEAR, logging};
use anyhow::Context;
use aoc_core::DayKey;
use clap::Parser;

/// Solve every part of `day` and print `Part N: answer` lines
pub fn run_day(day: u8) -> anyhow::Result<()> {
    let args = StandaloneArgs::parse();
    logging::init(args.verbose)?;

    let key = DayKey::new(DEFAULT_YEAR, day);
    let store = InputStore::new(project_root().join(DEFAULT_INPUTS_DIR));
    let path = store.resolve(day, args.input.as_deref().map(resolve_path).as_deref());
    let input = read_input(&path)?;

    let registry = aoc_solutions::registry()?;
    let mut solver = registry
        .create_solver(key, &input)
        .with_context(|| format!("Failed to parse input for {}", key))?;

    for answer in solver.solve_all().with_context(|| format!("Failed to solve {}", key))? {
        println!("Part {}: {}", answer.part, answer.answer);
    }
    Ok(())
}
