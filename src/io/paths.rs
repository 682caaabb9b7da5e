use std::fs;
use std::path::{Path, PathBuf};

use super::StoreError;

const DIR_NAME: &str = ".lol_task";
const TASKS_FILE: &str = "tasks.json";
const SETTINGS_FILE: &str = "config.toml";
const LOG_FILE: &str = "lol_task.log";

/// Directory holding the task list, settings and log file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DataDir { root: root.into() }
    }

    /// Use `override_dir` if given, otherwise `~/.lol_task`.
    pub fn resolve(override_dir: Option<&Path>) -> Result<Self, StoreError> {
        match override_dir {
            Some(dir) => Ok(DataDir::new(dir)),
            None => dirs::home_dir()
                .map(|home| DataDir::new(home.join(DIR_NAME)))
                .ok_or(StoreError::NoHomeDir),
        }
    }

    /// Create the directory if it does not exist yet.
    pub fn ensure_exists(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root).map_err(|e| StoreError::WriteError {
            path: self.root.clone(),
            source: e,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn tasks_file(&self) -> PathBuf {
        self.root.join(TASKS_FILE)
    }

    pub fn settings_file(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE)
    }

    pub fn log_file(&self) -> PathBuf {
        self.root.join(LOG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn override_wins() {
        let dir = DataDir::resolve(Some(Path::new("/tmp/elsewhere"))).unwrap();
        assert_eq!(dir.root(), Path::new("/tmp/elsewhere"));
        assert_eq!(dir.tasks_file(), Path::new("/tmp/elsewhere/tasks.json"));
        assert_eq!(dir.settings_file(), Path::new("/tmp/elsewhere/config.toml"));
    }

    #[test]
    fn ensure_exists_creates_nested() {
        let tmp = TempDir::new().unwrap();
        let dir = DataDir::new(tmp.path().join("a").join("b"));
        dir.ensure_exists().unwrap();
        assert!(dir.root().is_dir());
        // second call is fine
        dir.ensure_exists().unwrap();
    }
}
