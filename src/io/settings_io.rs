use std::fs;
use std::path::Path;

use crate::model::Settings;

use super::{StoreError, atomic_write};

/// Read settings from config.toml; missing keys take their defaults.
pub fn read_settings(path: &Path) -> Result<Settings, StoreError> {
    let text = fs::read_to_string(path).map_err(|e| StoreError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(toml::from_str(&text)?)
}

pub fn write_settings(path: &Path, settings: &Settings) -> Result<(), StoreError> {
    let text = toml::to_string(settings)?;
    atomic_write(path, text.as_bytes())
}
