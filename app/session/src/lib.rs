//! Login gate, session and restricted command shell.
//!
//! [`AuthGate`] turns a username/password pair into a [`Session`].
//! [`CommandShell`] owns that session and turns submitted lines into
//! storage CLI runs, appending each outcome to the session's [`Transcript`].

pub mod auth_gate;
pub mod error;
pub mod session;
pub mod shell;
pub mod transcript;

pub use auth_gate::AuthGate;
pub use error::AuthError;
pub use error::DispatchError;
pub use session::Session;
pub use shell::Command;
pub use shell::CommandShell;
pub use shell::ShellState;
pub use shell::Submitted;
pub use transcript::Entry;
pub use transcript::Transcript;
pub use transcript::TranscriptItem;
pub use transcript::render_items;
