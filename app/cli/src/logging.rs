//! File logging.
//!
//! stdout belongs to the transcript, so events go to
//! `{log_dir}/vdisk-shell.log` through a non-blocking writer.

use std::fs::OpenOptions;
use std::path::Path;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::Layer;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use vdisk_utils_common::LoggingConfig;

pub const LOG_FILE_NAME: &str = "vdisk-shell.log";

/// Must be kept alive until exit so buffered lines are flushed.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Installs the global subscriber. Returns `None` (after a warning on
/// stderr) when the log file cannot be opened or a subscriber is already
/// installed.
pub fn init_file_logging(config: &LoggingConfig) -> Option<LoggingGuard> {
    let log_dir = vdisk_config::log_dir();
    let log_file = match open_log_file(&log_dir) {
        Ok((file, _)) => file,
        Err(e) => {
            eprintln!("Warning: Could not open log file in {log_dir:?}: {e}");
            return None;
        }
    };

    let (non_blocking, file_guard) = tracing_appender::non_blocking(log_file);
    let file_layer = vdisk_utils_common::configure_fmt_layer!(
        fmt::layer().with_writer(non_blocking).with_ansi(false),
        config,
        "info"
    );

    match tracing_subscriber::registry().with(file_layer).try_init() {
        Ok(()) => Some(LoggingGuard {
            _file_guard: file_guard,
        }),
        Err(_) => None,
    }
}

/// Creates `dir` if needed and opens the log file for appending, mode 0600
/// on unix.
fn open_log_file(dir: &Path) -> std::io::Result<(std::fs::File, PathBuf)> {
    std::fs::create_dir_all(dir)?;

    let mut opts = OpenOptions::new();
    opts.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(0o600);
    }

    let path = dir.join(LOG_FILE_NAME);
    let file = opts.open(&path)?;
    Ok((file, path))
}

#[cfg(test)]
#[path = "logging.test.rs"]
mod tests;
