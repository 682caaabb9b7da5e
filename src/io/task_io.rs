use std::fs;
use std::path::Path;

use crate::model::TaskList;

use super::{StoreError, atomic_write};

/// Read the task list from `path`.
pub fn read_tasks(path: &Path) -> Result<TaskList, StoreError> {
    let content = fs::read_to_string(path).map_err(|e| StoreError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut tasks: TaskList =
        serde_json::from_str(&content).map_err(|e| StoreError::TasksParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
    tasks.normalize();
    Ok(tasks)
}

/// Write the whole task list to `path`, pretty-printed.
pub fn write_tasks(path: &Path, tasks: &TaskList) -> Result<(), StoreError> {
    let content = serde_json::to_string_pretty(tasks)?;
    atomic_write(path, content.as_bytes())
}
