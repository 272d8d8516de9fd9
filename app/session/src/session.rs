use vdisk_auth::Role;

use crate::Transcript;

/// Authenticated context for one shell.
///
/// Username and role are fixed at login.
#[derive(Debug)]
pub struct Session {
    username: String,
    role: Role,
    transcript: Transcript,
}

impl Session {
    pub(crate) fn new(username: String, role: Role) -> Self {
        Self {
            username,
            role,
            transcript: Transcript::new(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub(crate) fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }
}
