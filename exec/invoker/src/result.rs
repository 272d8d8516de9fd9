use serde::Deserialize;
use serde::Serialize;

/// Captured output of a finished CLI run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationResult {
    /// Standard output, lossily decoded.
    pub stdout: String,
    /// Standard error, lossily decoded.
    pub stderr: String,
    /// Exit code if the process exited normally. Informational only.
    pub exit_code: Option<i32>,
    pub duration_ms: i64,
}

impl InvocationResult {
    /// stdout followed by stderr.
    pub fn combined_output(&self) -> String {
        let mut out = String::with_capacity(self.stdout.len() + self.stderr.len());
        out.push_str(&self.stdout);
        out.push_str(&self.stderr);
        out
    }
}
