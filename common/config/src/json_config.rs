//! On-disk `config.json` schema.
//!
//! Every field is optional; an empty object is a valid config.
//!
//! ```json
//! {
//!   "cli_bin": "/opt/vdisk/storage_cli",
//!   "meta_file": "vdisk_disk1.meta",
//!   "timeout_secs": 60,
//!   "logging": { "level": "debug", "timezone": "utc" },
//!   "users": [
//!     { "username": "ta", "salt": "s1", "password_sha256": "…", "role": "student" }
//!   ]
//! }
//! ```

use serde::Deserialize;
use serde::Serialize;
use std::path::PathBuf;

/// Top-level contents of `config.json`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Path to the external storage binary.
    #[serde(default)]
    pub cli_bin: Option<PathBuf>,

    /// Meta-file identifier passed as the third argument.
    #[serde(default)]
    pub meta_file: Option<String>,

    /// Invocation timeout in seconds. `0` means the default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    #[serde(default)]
    pub logging: Option<LoggingConfig>,

    /// Extra or overriding accounts.
    #[serde(default)]
    pub users: Vec<UserConfig>,
}

/// Logging configuration section.
///
/// ```json
/// {
///   "logging": {
///     "level": "debug",
///     "timezone": "local",
///     "modules": ["vdisk_exec=trace"],
///     "location": true,
///     "target": false
///   }
/// }
/// ```
///
/// Logs always go to `{log_dir}/vdisk-shell.log`; stdout is reserved for the
/// transcript.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct LoggingConfig {
    /// Log level (e.g., "trace", "debug", "info", "warn", "error").
    #[serde(default)]
    pub level: Option<String>,

    /// Include source location in logs.
    #[serde(default)]
    pub location: Option<bool>,

    /// Include target module path in logs.
    #[serde(default)]
    pub target: Option<bool>,

    /// Timezone for log timestamps ("local" or "utc", default: "local").
    #[serde(default)]
    pub timezone: Option<String>,

    /// Per-module log levels.
    #[serde(default)]
    pub modules: Option<Vec<String>>,
}

impl LoggingConfig {
    /// Converts to the resolved form consumed by `configure_fmt_layer!`.
    pub fn to_common_logging(&self) -> vdisk_utils_common::LoggingConfig {
        vdisk_utils_common::LoggingConfig {
            level: self.level.clone().unwrap_or_else(|| "info".to_string()),
            location: self.location.unwrap_or(false),
            target: self.target.unwrap_or(false),
            timezone: match self.timezone.as_deref() {
                Some("utc") => vdisk_utils_common::TimezoneConfig::Utc,
                _ => vdisk_utils_common::TimezoneConfig::Local,
            },
            modules: self.modules.clone().unwrap_or_default(),
        }
    }
}

/// A user entry with a precomputed salted digest.
///
/// `password_sha256` is the hex SHA-256 of `salt`, a NUL byte, and the
/// password. `role` is one of `admin`, `student` or `guest`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserConfig {
    pub username: String,
    pub salt: String,
    pub password_sha256: String,
    pub role: String,
}

#[cfg(test)]
#[path = "json_config.test.rs"]
mod tests;
