//! Invocation construction.

use std::path::Path;
use std::path::PathBuf;

use tracing::debug;
use vdisk_sanitize::sanitize_filename;

use crate::Verb;

/// A fully built external-process call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    binary_path: PathBuf,
    verb: Verb,
    argv: Vec<String>,
}

impl Invocation {
    pub fn binary_path(&self) -> &Path {
        &self.binary_path
    }

    pub fn verb(&self) -> Verb {
        self.verb
    }

    /// Full argument vector, binary first.
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// Arguments passed to the binary, without argv[0].
    pub fn args(&self) -> &[String] {
        self.argv.get(1..).unwrap_or_default()
    }
}

/// Builds invocations around a fixed binary and meta-file.
#[derive(Debug, Clone)]
pub struct ArgvBuilder {
    binary_path: PathBuf,
    meta_file: String,
}

impl ArgvBuilder {
    /// The meta-file is sanitized once here and never touched again.
    pub fn new(binary_path: impl Into<PathBuf>, meta_file: &str) -> Self {
        Self {
            binary_path: binary_path.into(),
            meta_file: sanitize_filename(meta_file),
        }
    }

    pub fn binary_path(&self) -> &Path {
        &self.binary_path
    }

    pub fn meta_file(&self) -> &str {
        &self.meta_file
    }

    /// `[binary, verb, meta_file]`, plus `filename` for verbs that take one.
    pub fn build(&self, verb: Verb, filename: &str) -> Invocation {
        let mut argv = vec![
            self.binary_path.display().to_string(),
            verb.to_string(),
            self.meta_file.clone(),
        ];
        if verb.takes_filename() {
            argv.push(filename.to_string());
        }
        debug!(?argv, "Built invocation");
        Invocation {
            binary_path: self.binary_path.clone(),
            verb,
            argv,
        }
    }
}

#[cfg(test)]
#[path = "invocation.test.rs"]
mod tests;
