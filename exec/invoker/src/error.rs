use std::path::PathBuf;

use snafu::Snafu;
use vdisk_error::ErrorExt;
use vdisk_error::Location;
use vdisk_error::StatusCode;

/// Why a CLI run produced no result.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum ProcessError {
    #[snafu(display("CLI not found at '{}'", path.display()))]
    NotFound {
        path: PathBuf,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("{detail}"))]
    ExecutionFailed {
        detail: String,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("CLI timed out after {secs} seconds"))]
    TimedOut {
        secs: u64,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("command cancelled"))]
    Cancelled {
        #[snafu(implicit)]
        location: Location,
    },
}

impl ErrorExt for ProcessError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::BinaryNotFound,
            Self::ExecutionFailed { .. } => StatusCode::ExecutionFailed,
            Self::TimedOut { .. } => StatusCode::Timeout,
            Self::Cancelled { .. } => StatusCode::Cancelled,
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
