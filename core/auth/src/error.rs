use snafu::Snafu;
use vdisk_error::ErrorExt;
use vdisk_error::Location;
use vdisk_error::StatusCode;

/// Errors raised while building a credential store.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum CredentialError {
    #[snafu(display("User '{username}' has an invalid password digest"))]
    InvalidDigest {
        username: String,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("User entry has an empty username"))]
    EmptyUsername {
        #[snafu(implicit)]
        location: Location,
    },
}

impl ErrorExt for CredentialError {
    fn status_code(&self) -> StatusCode {
        StatusCode::InvalidConfig
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
