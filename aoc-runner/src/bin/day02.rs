//! Day 2: Red-Nosed Reports

fn main() -> anyhow::Result<()> {
    aoc_runner::standalone::run_day(2)
}
