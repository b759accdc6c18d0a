//! `aoc` - run Advent of Code solvers from the command line

use aoc_runner::cli::Args;
use clap::Parser;

fn main() {
    let args = Args::parse();

    if let Err(e) = aoc_runner::run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
