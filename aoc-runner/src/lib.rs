//! Command-line runner for the registered Advent of Code solutions
//!
//! `aoc run` loads `dayNN.txt` inputs, solves the requested parts and
//! prints answers with timings. `aoc list` shows what is registered.

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod inputs;
pub mod logging;
pub mod output;
pub mod standalone;

use aoc_core::FactoryInfo;
use cli::{Args, Command, ListArgs};
use config::Config;
use error::CliError;
use executor::Executor;
use output::OutputFormatter;
use tracing::info;

/// Year used when `--year` is not given
pub const DEFAULT_YEAR: u16 = aoc_solutions::year_2024::YEAR;

/// Directory searched for `dayNN.txt` when `--inputs-dir` is not given,
/// relative to [`config::project_root`]
pub const DEFAULT_INPUTS_DIR: &str = "inputs";

/// Execute a parsed command line
pub fn run(args: Args) -> Result<(), CliError> {
    logging::init(args.verbose)?;

    let registry = aoc_solutions::registry()?;
    info!(solvers = registry.len(), "registry built");

    match args.command {
        Command::Run(run_args) => run_solvers(&registry, Config::from_args(run_args)?),
        Command::List(list_args) => {
            list_solvers(&registry, &list_args);
            Ok(())
        }
    }
}

fn run_solvers(registry: &aoc_core::SolverRegistry, config: Config) -> Result<(), CliError> {
    let executor = Executor::new(registry, &config);

    let work_items = executor.collect_work_items()?;
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    let formatter = OutputFormatter::new(config.quiet);
    let results = executor.execute(&work_items, |result| formatter.print_day(result))?;
    formatter.print_summary(&results);

    Ok(())
}

fn list_solvers(registry: &aoc_core::SolverRegistry, args: &ListArgs) {
    let infos: Vec<FactoryInfo> = registry
        .iter_info()
        .filter(|info| args.year.is_none_or(|y| info.key.year == y))
        .collect();
    output::print_listing(&infos);
}
