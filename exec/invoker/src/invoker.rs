//! Runs one invocation as a child process with a deadline and a
//! cancellation token.

use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Duration;
use std::time::Instant;

use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing::warn;

use crate::Invocation;
use crate::InvocationResult;
use crate::error::ProcessError;
use crate::error::process_error::CancelledSnafu;
use crate::error::process_error::ExecutionFailedSnafu;
use crate::error::process_error::NotFoundSnafu;
use crate::error::process_error::TimedOutSnafu;

/// Default invocation timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Spawns the storage CLI and collects its output.
#[derive(Debug, Clone)]
pub struct ProcessInvoker {
    timeout: Duration,
}

impl Default for ProcessInvoker {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

impl ProcessInvoker {
    /// A zero timeout falls back to the default.
    pub fn new(timeout: Duration) -> Self {
        let timeout = if timeout.is_zero() {
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        } else {
            timeout
        };
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Runs `invocation` to completion.
    ///
    /// stdin is closed and both output streams are captured. The exit code is
    /// recorded but a non-zero exit is still `Ok`. On timeout or cancellation
    /// the child is killed.
    pub async fn invoke(
        &self,
        invocation: &Invocation,
        cancel: CancellationToken,
    ) -> Result<InvocationResult, ProcessError> {
        let binary = invocation.binary_path();
        if which::which(binary).is_err() {
            warn!(path = %binary.display(), "CLI binary does not resolve to an executable");
            return NotFoundSnafu { path: binary }.fail();
        }

        let start = Instant::now();
        debug!(argv = ?invocation.argv(), "Spawning CLI");

        let child = tokio::process::Command::new(binary)
            .args(invocation.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn();

        let child = match child {
            Ok(child) => child,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %binary.display(), "CLI binary vanished before spawn");
                return NotFoundSnafu { path: binary }.fail();
            }
            Err(e) => {
                warn!(path = %binary.display(), error = %e, "Failed to spawn CLI");
                return ExecutionFailedSnafu {
                    detail: format!("Failed to start CLI: {e}"),
                }
                .fail();
            }
        };

        // Dropping the wait future drops the child, which kills it.
        tokio::select! {
            output = child.wait_with_output() => {
                let output = output.map_err(|e| {
                    ExecutionFailedSnafu {
                        detail: format!("Failed to read CLI output: {e}"),
                    }
                    .build()
                })?;
                let result = InvocationResult {
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                    exit_code: output.status.code(),
                    duration_ms: start.elapsed().as_millis() as i64,
                };
                debug!(
                    exit_code = ?result.exit_code,
                    duration_ms = result.duration_ms,
                    stdout_len = result.stdout.len(),
                    stderr_len = result.stderr.len(),
                    "CLI finished"
                );
                Ok(result)
            }
            _ = tokio::time::sleep(self.timeout) => {
                warn!(timeout_secs = self.timeout.as_secs(), "CLI timed out, killing");
                TimedOutSnafu { secs: self.timeout.as_secs() }.fail()
            }
            _ = cancel.cancelled() => {
                debug!("CLI run cancelled, killing");
                CancelledSnafu.fail()
            }
        }
    }
}

#[cfg(test)]
#[path = "invoker.test.rs"]
mod tests;
