//! Configuration file loading and well-known paths.

use crate::error::ConfigError;
use crate::error::config_error::IoSnafu;
use crate::error::config_error::JsonParseSnafu;
use crate::json_config::AppConfig;
use snafu::ResultExt;
use std::path::Path;
use std::path::PathBuf;
use tracing::debug;

/// Default configuration directory name under the user's home.
pub const DEFAULT_CONFIG_DIR: &str = ".vdisk-shell";

/// Application configuration file name (JSON).
pub const CONFIG_FILE: &str = "config.json";

/// Log directory name.
pub const LOG_DIR_NAME: &str = "log";

/// Environment variable for a custom home directory.
pub const VDISK_SHELL_HOME_ENV: &str = "VDISK_SHELL_HOME";

/// Environment variable for a custom log directory.
pub const VDISK_SHELL_LOG_DIR_ENV: &str = "VDISK_SHELL_LOG_DIR";

/// Returns `~/.vdisk-shell`, or `./.vdisk-shell` when there is no home.
pub fn default_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_CONFIG_DIR)
}

/// Resolves the home directory.
///
/// `VDISK_SHELL_HOME` wins over the default; a relative value is resolved
/// against the current working directory.
pub fn find_home() -> PathBuf {
    match std::env::var(VDISK_SHELL_HOME_ENV) {
        Ok(custom) => absolutize(custom),
        Err(_) => default_config_dir(),
    }
}

/// Resolves the log directory: `VDISK_SHELL_LOG_DIR` or `{home}/log`.
pub fn log_dir() -> PathBuf {
    match std::env::var(VDISK_SHELL_LOG_DIR_ENV) {
        Ok(custom) => absolutize(custom),
        Err(_) => find_home().join(LOG_DIR_NAME),
    }
}

fn absolutize(value: String) -> PathBuf {
    let path = PathBuf::from(&value);
    if path.is_absolute() {
        return path;
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(&value))
        .unwrap_or(path)
}

/// Loads `config.json` from a directory, or a file given explicitly.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_file: PathBuf,
}

impl ConfigLoader {
    /// Loader for `{home}/config.json`.
    pub fn from_home() -> Self {
        Self::from_path(find_home())
    }

    /// Loader for `config.json` inside `dir`.
    pub fn from_path(dir: impl AsRef<Path>) -> Self {
        Self {
            config_file: dir.as_ref().join(CONFIG_FILE),
        }
    }

    /// Loader for an explicit config file.
    pub fn from_file(file: impl Into<PathBuf>) -> Self {
        Self {
            config_file: file.into(),
        }
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Reads and parses the config file. A missing or blank file yields the
    /// default config.
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        let path = &self.config_file;
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(path).context(IoSnafu {
            message: format!("Failed to read {}", path.display()),
        })?;

        if content.trim().is_empty() {
            debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(AppConfig::default());
        }

        let config = serde_json::from_str(&content).context(JsonParseSnafu {
            file: path.display().to_string(),
        })?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::from_home()
    }
}

#[cfg(test)]
#[path = "loader.test.rs"]
mod tests;
