//! Resolved runtime configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::json_config::AppConfig;
use crate::json_config::LoggingConfig;
use crate::json_config::UserConfig;

/// External binary used when nothing else is configured.
pub const DEFAULT_CLI_BIN: &str = "./storage_cli";

/// Meta-file identifier used when nothing else is configured.
pub const DEFAULT_META_FILE: &str = "vdisk_disk1.meta";

/// Invocation timeout used when nothing else is configured, or when `0` is.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Values given on the command line. `None` leaves the lower layer alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub cli_bin: Option<PathBuf>,
    pub meta_file: Option<String>,
    pub timeout_secs: Option<u64>,
    /// Raise workspace crates to `debug`.
    pub verbose: bool,
}

/// Fully resolved configuration for one shell process.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    pub cli_bin: PathBuf,
    pub meta_file: String,
    pub timeout: Duration,
    pub logging: vdisk_utils_common::LoggingConfig,
    pub users: Vec<UserConfig>,
}

impl ShellConfig {
    /// Layers `overrides` over `file` over the built-in defaults.
    pub fn resolve(file: AppConfig, overrides: ConfigOverrides) -> Self {
        let cli_bin = overrides
            .cli_bin
            .or(file.cli_bin)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CLI_BIN));
        let meta_file = overrides
            .meta_file
            .or(file.meta_file)
            .unwrap_or_else(|| DEFAULT_META_FILE.to_string());
        let timeout_secs = match overrides.timeout_secs.or(file.timeout_secs) {
            Some(0) | None => DEFAULT_TIMEOUT_SECS,
            Some(secs) => secs,
        };

        let mut logging = file
            .logging
            .as_ref()
            .map(LoggingConfig::to_common_logging)
            .unwrap_or_default();
        if overrides.verbose {
            logging
                .modules
                .extend(VERBOSE_MODULES.iter().map(|m| format!("{m}=debug")));
        }

        Self {
            cli_bin,
            meta_file,
            timeout: Duration::from_secs(timeout_secs),
            logging,
            users: file.users,
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self::resolve(AppConfig::default(), ConfigOverrides::default())
    }
}

const VERBOSE_MODULES: [&str; 7] = [
    "vdisk_auth",
    "vdisk_config",
    "vdisk_exec",
    "vdisk_sanitize",
    "vdisk_session",
    "vdisk_cli",
    "vdisk_shell",
];

#[cfg(test)]
#[path = "config.test.rs"]
mod tests;
