//! Normalization of user-supplied filenames.

use std::sync::LazyLock;

use crate::rules::Pipeline;
use crate::rules::RegexReplace;
use crate::rules::RemoveChars;
use crate::rules::Trim;
use crate::rules::TrimMode;

static FILENAME_PIPELINE: LazyLock<Pipeline> = LazyLock::new(filename_pipeline);

/// Rules applied to a filename, in order.
///
/// 1. Remove non-breaking spaces.
/// 2. Remove whitespace on either side of each digit run.
/// 3. Remove whitespace around each `.`.
/// 4. Trim.
///
/// The result is idempotent: no rule reintroduces what an earlier rule
/// removed.
// Patterns are hardcoded and covered by tests.
#[allow(clippy::expect_used)]
pub fn filename_pipeline() -> Pipeline {
    Pipeline::new()
        .with_rule(RemoveChars::new("remove-nbsp", &['\u{00A0}']))
        .with_rule(
            RegexReplace::new("join-digit-runs", r"\s*([0-9]+)\s*", "${1}")
                .expect("digit run pattern is valid"),
        )
        .with_rule(
            RegexReplace::new("collapse-dot-spacing", r"\s*\.\s*", ".")
                .expect("dot spacing pattern is valid"),
        )
        .with_rule(Trim::new("trim", TrimMode::Both))
}

/// Cleans a filename typed into the shell (`"file 1 . txt"` -> `"file1.txt"`).
pub fn sanitize_filename(input: &str) -> String {
    FILENAME_PIPELINE.apply(input)
}

#[cfg(test)]
#[path = "filename.test.rs"]
mod tests;
