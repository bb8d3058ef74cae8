// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::Settings;
use crate::errors::{ExhausterrError, Result};

/// Parse settings from TOML text.
pub fn from_toml_str(contents: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(contents)?;
    Ok(settings)
}

/// Load settings from a file that must exist.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Settings> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    from_toml_str(&contents).map_err(|err| match err {
        ExhausterrError::TomlError(inner) => {
            ExhausterrError::ConfigError(format!("{}: {inner}", path.display()))
        }
        other => other,
    })
}

/// Load settings from `path` if it exists, otherwise use the defaults.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<Settings> {
    let path = path.as_ref();
    if !path.is_file() {
        debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }
    load_from_path(path)
}

/// `exhausterr.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("exhausterr.toml")
}
