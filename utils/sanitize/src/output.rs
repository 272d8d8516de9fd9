//! Cleanup of combined stdout+stderr text captured from `storage_cli`.

use std::sync::LazyLock;

use crate::rules::DropLinesWithPrefix;
use crate::rules::JoinDigitsAfterWord;
use crate::rules::Pipeline;
use crate::rules::RegexReplace;
use crate::rules::RemoveChars;
use crate::rules::Trim;
use crate::rules::TrimMode;

/// Line prefixes the CLI uses for its own diagnostics.
pub const DIAGNOSTIC_PREFIXES: &[&str] = &["DEBUG", "argv["];

/// ESC followed by a single `@`-`Z` / `\`-`_` byte, or a full CSI sequence.
const ESCAPE_SEQUENCE: &str = r"\x1B(?:[@-Z\\-_]|\[[0-?]*[ -/]*[@-~])";

/// Zero-width space, zero-width non-joiner, non-breaking space.
const INVISIBLE_CHARS: &[char] = &['\u{200B}', '\u{200C}', '\u{00A0}'];

static OUTPUT_PIPELINE: LazyLock<Pipeline> = LazyLock::new(output_pipeline);

/// Rules applied to raw CLI output, in order.
///
/// Whitespace repairs only touch spaces and tabs; line breaks are kept so
/// the diagnostic line filter still sees every input line.
// Patterns are hardcoded and covered by tests.
#[allow(clippy::expect_used)]
pub fn output_pipeline() -> Pipeline {
    Pipeline::new()
        .with_rule(
            RegexReplace::new("strip-escape-sequences", ESCAPE_SEQUENCE, "")
                .expect("escape sequence pattern is valid"),
        )
        .with_rule(RemoveChars::new("remove-invisible", INVISIBLE_CHARS))
        .with_rule(
            JoinDigitsAfterWord::new("join-digits-after-word")
                .expect("digit gap pattern is valid"),
        )
        .with_rule(
            RegexReplace::new("collapse-dot-spacing", r"[^\S\r\n]*\.[^\S\r\n]*", ".")
                .expect("dot spacing pattern is valid"),
        )
        .with_rule(DropLinesWithPrefix::new(
            "drop-diagnostic-lines",
            DIAGNOSTIC_PREFIXES,
        ))
        .with_rule(Trim::new("trim-end", TrimMode::End))
}

/// Turns raw CLI output into transcript text.
///
/// A blank result is returned as-is; the shell decides what placeholder to
/// show.
pub fn sanitize_output(raw: &str) -> String {
    OUTPUT_PIPELINE.apply(raw)
}

#[cfg(test)]
#[path = "output.test.rs"]
mod tests;
