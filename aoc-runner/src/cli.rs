//! CLI argument parsing using clap

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::{DEFAULT_INPUTS_DIR, DEFAULT_YEAR};

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers", version)]
pub struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one day, or every registered day of the year when --day is omitted
    Run(RunArgs),
    /// List registered solvers
    List(ListArgs),
}

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// Puzzle year
    #[arg(short, long, default_value_t = DEFAULT_YEAR)]
    pub year: u16,

    /// Day to run (runs all registered days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Input file to use instead of <INPUTS_DIR>/dayNN.txt (relative to the project root)
    #[arg(short, long, requires = "day")]
    pub input: Option<PathBuf>,

    /// Directory holding dayNN.txt input files (relative to the project root)
    #[arg(long, default_value = DEFAULT_INPUTS_DIR)]
    pub inputs_dir: PathBuf,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Only list solvers for this year
    #[arg(short, long)]
    pub year: Option<u16>,
}

/// Arguments of the single-day binaries (`day01`, `day02`, ...)
#[derive(Parser, Debug)]
#[command(about = "Run one Advent of Code day and print both parts", version)]
pub struct StandaloneArgs {
    /// Input file, relative to the project root (defaults to inputs/dayNN.txt)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Increase log verbosity
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
