use strum::AsRefStr;
use strum::Display;
use strum::EnumIter;
use strum::EnumString;

/// The whitelisted operations the storage CLI accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Verb {
    ListFiles,
    ReadFile,
    WriteFile,
    DeleteFile,
}

impl Verb {
    /// Parses an exact, case-sensitive verb name.
    pub fn parse(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    /// Whether the CLI expects a filename after the meta-file.
    pub fn takes_filename(self) -> bool {
        !matches!(self, Self::ListFiles)
    }
}

#[cfg(test)]
#[path = "verb.test.rs"]
mod tests;
