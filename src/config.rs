//! Preference persistence.
//!
//! Preferences live in a single TOML file under the user config directory
//! (`~/.config/hexgrad/config.toml` on Linux). `HEXGRAD_CONFIG_DIR` overrides
//! the directory, which keeps tests hermetic.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::prefs::Preferences;

/// Errors from loading or saving the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Path of the config file.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("HEXGRAD_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join("hexgrad"),
    };
    Ok(dir.join("config.toml"))
}

/// Load saved preferences, falling back to defaults when no file exists.
///
/// A corrupt file is an error rather than silently replaced; `hexgrad config
/// path` tells the user where to look.
pub fn load() -> Result<Preferences, ConfigError> {
    let path = config_path()?;
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Preferences::default());
    }

    let content = fs::read_to_string(&path)?;
    let prefs = toml::from_str(&content).map_err(|e| {
        warn!(path = %path.display(), "config file failed to parse");
        e
    })?;
    debug!(path = %path.display(), "loaded config");
    Ok(prefs)
}

/// Persist preferences, creating the config directory if needed.
pub fn save(prefs: &Preferences) -> Result<(), ConfigError> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(prefs)?;
    fs::write(&path, content)?;
    debug!(path = %path.display(), "saved config");
    Ok(())
}
