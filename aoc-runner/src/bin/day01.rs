//! Day 1: Historian Hysteria

fn main() -> anyhow::Result<()> {
    aoc_runner::standalone::run_day(1)
}
