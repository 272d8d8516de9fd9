//! Shared tracing-subscriber setup.
//!
//! The binary owns subscriber installation; this module only provides the
//! pieces that turn a [`LoggingConfig`] into a configured `fmt` layer.

use serde::Deserialize;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

/// Timestamp timezone for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimezoneConfig {
    #[default]
    Local,
    Utc,
}

/// Logging options after config resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Include file and line number in each event.
    pub location: bool,
    /// Include the event target (module path).
    pub target: bool,
    pub timezone: TimezoneConfig,
    /// Default level directive, e.g. `info` or `info,vdisk_session=debug`.
    pub level: String,
    /// Extra per-module directives, e.g. `vdisk_exec=trace`.
    pub modules: Vec<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            location: false,
            target: false,
            timezone: TimezoneConfig::Local,
            level: "info".to_string(),
            modules: Vec::new(),
        }
    }
}

/// Timer that renders either local or UTC RFC 3339 timestamps.
#[derive(Debug, Clone, Copy)]
pub struct ConfigurableTimer {
    timezone: TimezoneConfig,
}

impl ConfigurableTimer {
    pub fn new(timezone: TimezoneConfig) -> Self {
        Self { timezone }
    }
}

impl FormatTime for ConfigurableTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";
        match self.timezone {
            TimezoneConfig::Local => write!(w, "{}", chrono::Local::now().format(FORMAT)),
            TimezoneConfig::Utc => write!(w, "{}", chrono::Utc::now().format(FORMAT)),
        }
    }
}

/// Builds the env filter for a logging config.
///
/// `RUST_LOG` wins when set. Otherwise the configured level and module
/// directives are combined; if they fail to parse, `default_level` is used.
pub fn build_env_filter(config: &LoggingConfig, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let mut directives = vec![config.level.clone()];
    directives.extend(config.modules.iter().cloned());
    let joined = directives
        .into_iter()
        .filter(|d| !d.trim().is_empty())
        .collect::<Vec<_>>()
        .join(",");

    EnvFilter::try_new(&joined).unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Applies a [`LoggingConfig`] to a `tracing_subscriber::fmt` layer.
///
/// Callers must have `tracing_subscriber::Layer` in scope for `with_filter`.
#[macro_export]
macro_rules! configure_fmt_layer {
    ($layer:expr, $config:expr, $default_level:expr) => {{
        let config: &$crate::LoggingConfig = $config;
        $layer
            .with_file(config.location)
            .with_line_number(config.location)
            .with_target(config.target)
            .with_timer($crate::ConfigurableTimer::new(config.timezone))
            .with_filter($crate::build_env_filter(config, $default_level))
    }};
}

#[cfg(test)]
#[path = "logging.test.rs"]
mod tests;
