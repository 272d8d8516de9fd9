//! Configuration for the storage shell.
//!
//! Values come from three layers, highest precedence first: command-line
//! overrides, `~/.vdisk-shell/config.json`, and built-in defaults.

pub mod config;
pub mod error;
pub mod json_config;
pub mod loader;

pub use config::ConfigOverrides;
pub use config::DEFAULT_CLI_BIN;
pub use config::DEFAULT_META_FILE;
pub use config::DEFAULT_TIMEOUT_SECS;
pub use config::ShellConfig;
pub use error::ConfigError;
pub use json_config::AppConfig;
pub use json_config::LoggingConfig;
pub use json_config::UserConfig;
pub use loader::ConfigLoader;
pub use loader::default_config_dir;
pub use loader::find_home;
pub use loader::log_dir;
