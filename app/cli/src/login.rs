//! Interactive login prompt.

use dialoguer::Input;
use dialoguer::Password;
use vdisk_session::AuthGate;
use vdisk_session::Session;

/// Prompts until a login succeeds. Prompt I/O errors (closed terminal,
/// Ctrl+C) end the loop with an error.
pub fn login(gate: &AuthGate) -> anyhow::Result<Session> {
    println!("🔐 Login");
    loop {
        let username: String = Input::new()
            .with_prompt("👤 Username")
            .allow_empty(true)
            .interact_text()?;
        let password = Password::new()
            .with_prompt("🔑 Password")
            .allow_empty_password(true)
            .interact()?;

        match gate.authenticate(&username, &password) {
            Ok(session) => {
                println!("{}", greeting(&session));
                return Ok(session);
            }
            Err(err) => println!("❌ {err}"),
        }
    }
}

/// `Welcome {username} ({role})`
pub fn greeting(session: &Session) -> String {
    format!("Welcome {} ({})", session.username(), session.role())
}

#[cfg(test)]
#[path = "login.test.rs"]
mod tests;
