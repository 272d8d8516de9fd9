//! Extension trait that attaches a [`StatusCode`] to every workspace error.

use std::any::Any;

use crate::status_code::StatusCategory;
use crate::status_code::StatusCode;

/// Common behavior shared by the error enums of every crate in the workspace.
pub trait ErrorExt: std::error::Error {
    /// Returns the status code classifying this error.
    fn status_code(&self) -> StatusCode {
        StatusCode::Unknown
    }

    /// Returns the error as [`Any`] so callers can downcast.
    fn as_any(&self) -> &dyn Any;

    /// Message suitable for showing to the operator.
    ///
    /// Internal failures are reduced to their numeric code so implementation
    /// details never reach the transcript.
    fn output_msg(&self) -> String {
        let code = self.status_code();
        match code {
            StatusCode::Unknown | StatusCode::Internal => {
                format!("Internal error: {}", code as i32)
            }
            _ if code.category() == StatusCategory::Success => String::new(),
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "ext.test.rs"]
mod tests;
