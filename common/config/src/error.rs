//! Error types for configuration loading.

use snafu::Snafu;
use vdisk_error::ErrorExt;
use vdisk_error::Location;
use vdisk_error::StatusCode;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum ConfigError {
    #[snafu(display("{message}"))]
    Io {
        message: String,
        #[snafu(source)]
        error: std::io::Error,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("Invalid JSON in {file}"))]
    JsonParse {
        file: String,
        #[snafu(source)]
        error: serde_json::Error,
        #[snafu(implicit)]
        location: Location,
    },
}

impl ErrorExt for ConfigError {
    fn status_code(&self) -> StatusCode {
        StatusCode::ConfigFileError
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
