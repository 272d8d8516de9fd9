//! The restricted command shell.
//!
//! A [`CommandShell`] is either idle or executing exactly one CLI run. Lines
//! submitted while executing are rejected with [`DispatchError::Busy`] and
//! leave the transcript untouched. Every run ends with an entry and a
//! separator, whatever its outcome.

use snafu::OptionExt;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing::info;
use tracing::warn;
use vdisk_error::ErrorExt;
use vdisk_error::Location;
use vdisk_exec::ArgvBuilder;
use vdisk_exec::InvocationResult;
use vdisk_exec::ProcessError;
use vdisk_exec::ProcessInvoker;
use vdisk_exec::Verb;
use vdisk_sanitize::sanitize_filename;
use vdisk_sanitize::sanitize_output;

use crate::Entry;
use crate::Session;
use crate::Transcript;
use crate::error::DispatchError;
use crate::error::dispatch_error::BusySnafu;
use crate::error::dispatch_error::UnknownCommandSnafu;

/// First transcript item of every shell.
pub const WELCOME_BANNER: &str = "📢 Welcome! Type a command below.";

/// One-line summary of the accepted commands.
pub const HELP_LINE: &str =
    "Commands:  list_files   read_file <file>   write_file <file>   delete_file <file>";

pub const UNKNOWN_COMMAND_MESSAGE: &str = "❌ Unknown command.\n\
     💡 Try: list_files | read_file <file> | write_file <file> | delete_file <file>";

pub const NO_OUTPUT_MESSAGE: &str = "ℹ️ No output from CLI.";

/// A parsed line: whitelisted verb plus whatever followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub verb: Verb,
    pub argument: Option<String>,
}

impl Command {
    /// Splits `line` on its first whitespace run and checks the verb.
    pub fn parse(line: &str) -> Result<Self, DispatchError> {
        let line = line.trim();
        let (verb, argument) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, Some(rest.trim_start().to_string())),
            None => (line, None),
        };
        let verb = Verb::parse(verb).context(UnknownCommandSnafu { verb })?;
        Ok(Self { verb, argument })
    }

    /// The sanitized argument, or an empty string when there was none.
    pub fn filename(&self) -> String {
        self.argument
            .as_deref()
            .map(sanitize_filename)
            .unwrap_or_default()
    }
}

/// Heading shown above the CLI output for `verb`.
pub fn title_for(verb: Verb, filename: &str) -> String {
    match verb {
        Verb::ListFiles => "📂 Files Stored in Virtual Disk:".to_string(),
        Verb::ReadFile => format!("📥 Reading file: {filename}"),
        Verb::WriteFile => format!("📤 Writing file: {filename}"),
        Verb::DeleteFile => format!("🗑️ Deleting file: {filename}"),
    }
}

/// Display text for a finished run.
pub fn render_outcome(title: &str, outcome: &Result<InvocationResult, ProcessError>) -> String {
    match outcome {
        Ok(result) => {
            let cleaned = sanitize_output(&result.combined_output());
            if cleaned.trim().is_empty() {
                format!("{title}\n{NO_OUTPUT_MESSAGE}")
            } else {
                format!("{title}\n{cleaned}")
            }
        }
        Err(ProcessError::NotFound { path, .. }) => {
            format!("❌ CLI not found at '{}'.", path.display())
        }
        Err(err) => format!("❌ Error: {err}"),
    }
}

/// Whether the shell is running a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Idle,
    Executing,
}

/// What [`CommandShell::submit`] did with a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    /// Blank line; only a separator was appended.
    Blank,
    /// Unknown verb; the help entry was appended.
    Rejected,
    /// A CLI run started. Call [`CommandShell::wait_for_completion`].
    Dispatched,
    /// The run could not start; its error entry was appended.
    Failed,
}

#[derive(Debug)]
struct InFlight {
    raw: String,
    title: String,
    cancel: CancellationToken,
    done: oneshot::Receiver<Result<InvocationResult, ProcessError>>,
}

#[derive(Debug)]
pub struct CommandShell {
    session: Session,
    builder: ArgvBuilder,
    invoker: ProcessInvoker,
    in_flight: Option<InFlight>,
}

impl CommandShell {
    /// Opens a shell for `session` and writes the welcome banner.
    pub fn new(mut session: Session, builder: ArgvBuilder, invoker: ProcessInvoker) -> Self {
        let transcript = session.transcript_mut();
        transcript.push_banner(WELCOME_BANNER);
        transcript.push_separator();
        info!(
            username = session.username(),
            role = %session.role(),
            cli_bin = %builder.binary_path().display(),
            meta_file = builder.meta_file(),
            "Shell opened"
        );
        Self {
            session,
            builder,
            invoker,
            in_flight: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn transcript(&self) -> &Transcript {
        self.session.transcript()
    }

    /// `💾 Storage Shell — {username} ({ROLE})`
    pub fn title(&self) -> String {
        format!(
            "💾 Storage Shell — {} ({})",
            self.session.username(),
            self.session.role().as_ref().to_uppercase()
        )
    }

    pub fn state(&self) -> ShellState {
        if self.in_flight.is_some() {
            ShellState::Executing
        } else {
            ShellState::Idle
        }
    }

    /// Handles one raw input line.
    ///
    /// Only [`DispatchError::Busy`] is returned as an error; unknown verbs are
    /// rendered into the transcript.
    pub fn submit(&mut self, raw: &str) -> Result<Submitted, DispatchError> {
        if self.in_flight.is_some() {
            return BusySnafu.fail();
        }

        let line = raw.trim();
        if line.is_empty() {
            self.session.transcript_mut().push_separator();
            return Ok(Submitted::Blank);
        }

        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(err) => {
                debug!(error = %err, status = %err.status_code(), "Rejected line");
                let transcript = self.session.transcript_mut();
                transcript.push_entry(raw, UNKNOWN_COMMAND_MESSAGE.to_string());
                transcript.push_separator();
                return Ok(Submitted::Rejected);
            }
        };

        Ok(self.dispatch(raw, &command))
    }

    fn dispatch(&mut self, raw: &str, command: &Command) -> Submitted {
        let filename = command.filename();
        if command.verb.takes_filename() && is_path_like(&filename) {
            warn!(
                filename = %filename,
                "Filename contains a path component, passing it through unchanged"
            );
        }

        let invocation = self.builder.build(command.verb, &filename);
        let title = title_for(command.verb, &filename);

        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(err) => {
                let err = ProcessError::ExecutionFailed {
                    detail: format!("no async runtime to run the CLI: {err}"),
                    location: Location::new(file!(), line!(), column!()),
                };
                warn!(error = %err, status = %err.status_code(), "Command not started");
                let transcript = self.session.transcript_mut();
                transcript.push_entry(raw, render_outcome(&title, &Err(err)));
                transcript.push_separator();
                return Submitted::Failed;
            }
        };

        let cancel = CancellationToken::new();
        let (tx, rx) = oneshot::channel();

        let invoker = self.invoker.clone();
        let worker_cancel = cancel.clone();
        runtime.spawn(async move {
            let outcome = invoker.invoke(&invocation, worker_cancel).await;
            // The shell may have been dropped; nothing left to report to.
            let _ = tx.send(outcome);
        });

        debug!(verb = %command.verb, filename = %filename, "Dispatched command");
        self.in_flight = Some(InFlight {
            raw: raw.to_string(),
            title,
            cancel,
            done: rx,
        });
        Submitted::Dispatched
    }

    /// Waits for the in-flight run, appends its entry and a separator, and
    /// returns to idle. Returns `None` when idle.
    ///
    /// Cancel-safe: if the future is dropped the run stays in flight.
    pub async fn wait_for_completion(&mut self) -> Option<&Entry> {
        let in_flight = self.in_flight.as_mut()?;
        let outcome = (&mut in_flight.done).await;
        let in_flight = self.in_flight.take()?;

        let display = match outcome {
            Ok(outcome) => {
                if let Err(err) = &outcome {
                    if err.status_code().should_log_error() {
                        warn!(error = %err, status = %err.status_code(), "Command failed");
                    } else {
                        info!(error = %err, "Command did not complete");
                    }
                }
                render_outcome(&in_flight.title, &outcome)
            }
            Err(_) => {
                warn!("Worker task stopped without reporting");
                "❌ Error: worker task stopped unexpectedly".to_string()
            }
        };

        let transcript = self.session.transcript_mut();
        transcript.push_entry(&in_flight.raw, display);
        transcript.push_separator();
        self.session.transcript().last_entry()
    }

    /// Token of the in-flight run, if any.
    pub fn cancellation_token(&self) -> Option<CancellationToken> {
        self.in_flight.as_ref().map(|f| f.cancel.clone())
    }

    /// Asks the in-flight run to stop. Returns false when idle.
    pub fn cancel(&self) -> bool {
        match &self.in_flight {
            Some(in_flight) => {
                in_flight.cancel.cancel();
                true
            }
            None => false,
        }
    }
}

impl Drop for CommandShell {
    fn drop(&mut self) {
        if let Some(in_flight) = &self.in_flight {
            in_flight.cancel.cancel();
        }
        info!(username = self.session.username(), "Shell closed");
    }
}

fn is_path_like(filename: &str) -> bool {
    filename.contains("..") || filename.contains('/') || filename.contains('\\')
}

#[cfg(test)]
#[path = "shell.test.rs"]
mod tests;
