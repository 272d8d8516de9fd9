//! Credential verification for the storage shell.
//!
//! [`CredentialStore`] is the seam the login gate talks to. The default
//! [`StaticCredentialStore`] holds salted SHA-256 digests for a fixed set of
//! users and compares them in constant time.

pub mod digest;
pub mod error;
pub mod role;
pub mod store;

pub use error::CredentialError;
pub use role::Role;
pub use store::CredentialRecord;
pub use store::CredentialStore;
pub use store::StaticCredentialStore;
