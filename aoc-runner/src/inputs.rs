//! Input file resolution and loading

use crate::error::CliError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory of puzzle inputs
///
/// Directory structure: `{dir}/day{day:02}.txt`
#[derive(Debug, Clone)]
pub struct InputStore {
    dir: PathBuf,
}

impl InputStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Conventional path of a day's input
    pub fn default_path(&self, day: u8) -> PathBuf {
        self.dir.join(format!("day{:02}.txt", day))
    }

    /// The override when given, the conventional path otherwise
    pub fn resolve(&self, day: u8, input_override: Option<&Path>) -> PathBuf {
        input_override.map_or_else(|| self.default_path(day), Path::to_path_buf)
    }
}

/// Read a whole input file
pub fn read_input(path: &Path) -> Result<String, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "loaded input");
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_path_format() {
        let store = InputStore::new(PathBuf::from("inputs"));
        assert_eq!(store.default_path(1), PathBuf::from("inputs/day01.txt"));
        assert_eq!(store.default_path(25), PathBuf::from("inputs/day25.txt"));
    }

    #[test]
    fn test_resolve_prefers_override() {
        let store = InputStore::new(PathBuf::from("inputs"));
        assert_eq!(
            store.resolve(2, Some(Path::new("other/mine.txt"))),
            PathBuf::from("other/mine.txt")
        );
        assert_eq!(store.resolve(2, None), PathBuf::from("inputs/day02.txt"));
    }

    #[test]
    fn test_read_roundtrip() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        let path = store.default_path(1);

        assert!(matches!(
            read_input(&path),
            Err(CliError::InputNotFound { path: p, .. }) if p == path
        ));

        let input = "3   4\n4   3\n";
        fs::write(&path, input).unwrap();
        assert_eq!(read_input(&path).unwrap(), input);
    }

    #[test]
    fn test_read_directory_fails() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(
            read_input(temp.path()),
            Err(CliError::InputNotFound { .. })
        ));
    }
}
