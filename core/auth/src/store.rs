//! Credential records and the verification seam.

use std::collections::HashMap;
use std::fmt::Debug;

use snafu::ensure;
use tracing::debug;

use crate::Role;
use crate::digest::constant_time_eq;
use crate::digest::digest_password;
use crate::digest::is_digest_hex;
use crate::error::CredentialError;
use crate::error::credential_error::EmptyUsernameSnafu;
use crate::error::credential_error::InvalidDigestSnafu;

/// Verifies a username/password pair.
///
/// Implementations must not reveal which half of the pair was wrong.
pub trait CredentialStore: Debug + Send + Sync {
    /// Returns the user's role when the pair matches, `None` otherwise.
    fn verify(&self, username: &str, password: &str) -> Option<Role>;
}

/// A stored user: salt, hex SHA-256 digest, and role.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    username: String,
    salt: String,
    digest: String,
    role: Role,
}

impl CredentialRecord {
    /// Builds a record from a plaintext password.
    pub fn from_password(username: &str, salt: &str, password: &str, role: Role) -> Self {
        Self {
            username: username.to_string(),
            salt: salt.to_string(),
            digest: digest_password(salt, password),
            role,
        }
    }

    /// Builds a record from a precomputed digest, as found in config files.
    pub fn from_digest(
        username: &str,
        salt: &str,
        digest: &str,
        role: Role,
    ) -> Result<Self, CredentialError> {
        ensure!(!username.trim().is_empty(), EmptyUsernameSnafu);
        let digest = digest.to_ascii_lowercase();
        ensure!(
            is_digest_hex(&digest),
            InvalidDigestSnafu {
                username: username.to_string(),
            }
        );
        Ok(Self {
            username: username.trim().to_string(),
            salt: salt.to_string(),
            digest,
            role,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> Role {
        self.role
    }

    fn matches(&self, password: &str) -> bool {
        let candidate = digest_password(&self.salt, password);
        constant_time_eq(candidate.as_bytes(), self.digest.as_bytes())
    }
}

impl Debug for CredentialRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("username", &self.username)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// In-memory credential table.
#[derive(Debug, Clone)]
pub struct StaticCredentialStore {
    records: HashMap<String, CredentialRecord>,
    // Compared against for unknown usernames so both paths hash once.
    decoy: CredentialRecord,
}

const BUILTIN_USERS: [(&str, &str, Role); 3] = [
    ("admin", "admin123", Role::Admin),
    ("student", "stud123", Role::Student),
    ("guest", "guest123", Role::Guest),
];

/// Salt used for the built-in accounts.
pub fn builtin_salt(username: &str) -> String {
    format!("vdisk-shell:{username}")
}

impl StaticCredentialStore {
    /// An empty store that rejects everyone.
    pub fn empty() -> Self {
        Self {
            records: HashMap::new(),
            decoy: CredentialRecord::from_password("", "vdisk-shell:decoy", "", Role::Guest),
        }
    }

    /// The three default accounts: admin, student and guest.
    pub fn builtin() -> Self {
        Self::empty().with_records(BUILTIN_USERS.iter().map(|(user, pass, role)| {
            CredentialRecord::from_password(user, &builtin_salt(user), pass, *role)
        }))
    }

    /// Adds records, replacing any existing entry with the same username.
    pub fn with_records(mut self, records: impl IntoIterator<Item = CredentialRecord>) -> Self {
        for record in records {
            debug!(username = %record.username, role = %record.role, "Registered user");
            self.records.insert(record.username.clone(), record);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CredentialStore for StaticCredentialStore {
    fn verify(&self, username: &str, password: &str) -> Option<Role> {
        match self.records.get(username) {
            Some(record) => record.matches(password).then_some(record.role),
            None => {
                let _ = self.decoy.matches(password);
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "store.test.rs"]
mod tests;
