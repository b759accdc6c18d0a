//! Configuration resolution from CLI args

use crate::cli::RunArgs;
use crate::error::CliError;
use aoc_core::{BASE_YEAR, MAX_YEARS};
use std::path::{Path, PathBuf};

/// Resolved runtime configuration for `aoc run`
#[derive(Debug, Clone)]
pub struct Config {
    /// Puzzle year
    pub year: u16,
    /// Day filter (None = all registered days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Explicit input file for the selected day
    pub input_override: Option<PathBuf>,
    /// Directory holding dayNN.txt files
    pub inputs_dir: PathBuf,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, anchoring paths with [`resolve_path`]
    pub fn from_args(args: RunArgs) -> Result<Self, CliError> {
        let supported = BASE_YEAR..BASE_YEAR + MAX_YEARS as u16;
        if !supported.contains(&args.year) {
            return Err(CliError::Config(format!(
                "year {} is outside {}-{}",
                args.year,
                supported.start,
                supported.end - 1
            )));
        }

        Ok(Config {
            year: args.year,
            day_filter: args.day,
            part_filter: args.part,
            input_override: args.input.as_deref().map(resolve_path),
            inputs_dir: resolve_path(&args.inputs_dir),
            quiet: args.quiet,
        })
    }
}

/// Workspace root; relative input paths are resolved against it
pub fn project_root() -> &'static Path {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir.parent().unwrap_or(manifest_dir)
}

/// Expand `~`, then anchor a relative path at [`project_root`]
pub fn resolve_path(path: &Path) -> PathBuf {
    let path = expand_tilde(path);
    if path.is_relative() {
        project_root().join(path)
    } else {
        path
    }
}

/// Expand ~ to home directory
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Args, Command};
    use clap::Parser;

    fn run_args(argv: &[&str]) -> RunArgs {
        let argv = ["aoc", "run"].iter().chain(argv).copied();
        match Args::try_parse_from(argv).unwrap().command {
            Command::Run(run) => run,
            other => panic!("expected run, got {:?}", other),
        }
    }

    #[test]
    fn test_from_args_copies_filters() {
        let config = Config::from_args(run_args(&["-d", "2", "-p", "1", "-q"])).unwrap();
        assert_eq!(config.year, 2024);
        assert_eq!(config.day_filter, Some(2));
        assert_eq!(config.part_filter, Some(1));
        assert!(config.quiet);
        assert_eq!(config.inputs_dir, project_root().join("inputs"));
    }

    #[test]
    fn test_year_outside_supported_range() {
        let err = Config::from_args(run_args(&["--year", "2014"])).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert!(Config::from_args(run_args(&["--year", "2034"])).is_ok());
        assert!(Config::from_args(run_args(&["--year", "2035"])).is_err());
    }

    #[test]
    fn test_relative_paths_anchor_at_project_root() {
        let config = Config::from_args(run_args(&["-d", "1", "-i", "data/day01.txt"])).unwrap();
        assert_eq!(
            config.input_override,
            Some(project_root().join("data/day01.txt"))
        );
        assert_eq!(resolve_path(Path::new("/abs/in")), PathBuf::from("/abs/in"));
        assert!(project_root().join("aoc-runner").join("Cargo.toml").is_file());
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde(Path::new("a/b.txt")), PathBuf::from("a/b.txt"));
        assert_eq!(expand_tilde(Path::new("/abs/~x")), PathBuf::from("/abs/~x"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/in/day01.txt")), home.join("in/day01.txt"));
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
    }
}
