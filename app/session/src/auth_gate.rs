use std::sync::Arc;

use tracing::info;
use tracing::warn;
use vdisk_auth::CredentialStore;

use crate::Session;
use crate::error::AuthError;
use crate::error::auth_error::InvalidCredentialsSnafu;

/// Turns credentials into a [`Session`].
#[derive(Debug, Clone)]
pub struct AuthGate {
    store: Arc<dyn CredentialStore>,
}

impl AuthGate {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// The username is trimmed; the password is used as typed.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let username = username.trim();
        match self.store.verify(username, password) {
            Some(role) => {
                info!(username, %role, "Login succeeded");
                Ok(Session::new(username.to_string(), role))
            }
            None => {
                warn!(username, "Login failed");
                InvalidCredentialsSnafu.fail()
            }
        }
    }
}

#[cfg(test)]
#[path = "auth_gate.test.rs"]
mod tests;
