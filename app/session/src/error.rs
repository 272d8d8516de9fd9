use snafu::Snafu;
use vdisk_error::ErrorExt;
use vdisk_error::Location;
use vdisk_error::StatusCode;

/// Login failure. Deliberately does not say which half was wrong.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum AuthError {
    #[snafu(display("Invalid username or password"))]
    InvalidCredentials {
        #[snafu(implicit)]
        location: Location,
    },
}

impl ErrorExt for AuthError {
    fn status_code(&self) -> StatusCode {
        StatusCode::AuthenticationFailed
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// A submitted line that did not start a CLI run.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum DispatchError {
    #[snafu(display("Unknown command '{verb}'"))]
    UnknownCommand {
        verb: String,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("A command is already running"))]
    Busy {
        #[snafu(implicit)]
        location: Location,
    },
}

impl ErrorExt for DispatchError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::UnknownCommand { .. } => StatusCode::UnknownCommand,
            Self::Busy { .. } => StatusCode::SessionBusy,
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
