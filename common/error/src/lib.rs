//! Error classification shared by every crate in the workspace.
//!
//! Each crate defines its own `snafu` error enum and implements [`ErrorExt`]
//! to map variants onto a [`StatusCode`].

pub mod ext;
pub mod status_code;

pub use ext::ErrorExt;
pub use snafu::Location;
pub use status_code::StatusCategory;
pub use status_code::StatusCode;
pub use status_code::StatusMeta;
