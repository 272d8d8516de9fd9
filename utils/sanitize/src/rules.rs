//! Artifact repair rules.
//!
//! Every rule is a pure `&str -> String` transform with a stable name so it
//! can be listed, tested, and logged on its own.

use std::borrow::Cow;
use std::fmt::Debug;

use regex::Regex;

/// A single named text transform.
pub trait RepairRule: Debug + Send + Sync {
    /// Stable identifier used in tests and diagnostics.
    fn name(&self) -> &'static str;

    /// Applies the rule, borrowing the input when nothing changes.
    fn apply<'a>(&self, input: &'a str) -> Cow<'a, str>;
}

/// Removes every occurrence of a fixed set of code points.
#[derive(Debug, Clone)]
pub struct RemoveChars {
    name: &'static str,
    chars: &'static [char],
}

impl RemoveChars {
    pub const fn new(name: &'static str, chars: &'static [char]) -> Self {
        Self { name, chars }
    }
}

impl RepairRule for RemoveChars {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        if !input.contains(self.chars) {
            return Cow::Borrowed(input);
        }
        Cow::Owned(input.chars().filter(|c| !self.chars.contains(c)).collect())
    }
}

/// Replaces every match of a pattern. The replacement may use `${N}` groups.
#[derive(Debug, Clone)]
pub struct RegexReplace {
    name: &'static str,
    regex: Regex,
    replacement: &'static str,
}

impl RegexReplace {
    pub fn new(
        name: &'static str,
        pattern: &str,
        replacement: &'static str,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            regex: Regex::new(pattern)?,
            replacement,
        })
    }
}

impl RepairRule for RegexReplace {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        self.regex.replace_all(input, self.replacement)
    }
}

/// Drops horizontal whitespace that separates a word character from the
/// digit run following it (`"disk 1"` -> `"disk1"`).
///
/// The preceding character is checked against the original input, so a
/// digit run that was itself joined still counts as a word character for
/// the next gap (`"v 1 2"` -> `"v12"`).
#[derive(Debug, Clone)]
pub struct JoinDigitsAfterWord {
    name: &'static str,
    gap: Regex,
}

impl JoinDigitsAfterWord {
    pub fn new(name: &'static str) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            gap: Regex::new(r"[^\S\r\n]+([0-9]+)")?,
        })
    }
}

impl RepairRule for JoinDigitsAfterWord {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        let mut out = String::new();
        let mut last = 0;
        for caps in self.gap.captures_iter(input) {
            let (Some(whole), Some(digits)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let follows_word = input[..whole.start()]
                .chars()
                .next_back()
                .is_some_and(is_word_char);
            if !follows_word {
                continue;
            }
            out.push_str(&input[last..whole.start()]);
            out.push_str(digits.as_str());
            last = whole.end();
        }

        if last == 0 {
            return Cow::Borrowed(input);
        }
        out.push_str(&input[last..]);
        Cow::Owned(out)
    }
}

/// Drops every line that starts with one of the given prefixes and rejoins
/// the survivors with `\n`.
#[derive(Debug, Clone)]
pub struct DropLinesWithPrefix {
    name: &'static str,
    prefixes: &'static [&'static str],
}

impl DropLinesWithPrefix {
    pub const fn new(name: &'static str, prefixes: &'static [&'static str]) -> Self {
        Self { name, prefixes }
    }
}

impl RepairRule for DropLinesWithPrefix {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        let kept: Vec<&str> = input
            .lines()
            .filter(|line| !self.prefixes.iter().any(|p| line.starts_with(p)))
            .collect();
        Cow::Owned(kept.join("\n"))
    }
}

/// Which ends [`Trim`] strips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimMode {
    Both,
    End,
}

/// Strips surrounding whitespace.
#[derive(Debug, Clone)]
pub struct Trim {
    name: &'static str,
    mode: TrimMode,
}

impl Trim {
    pub const fn new(name: &'static str, mode: TrimMode) -> Self {
        Self { name, mode }
    }
}

impl RepairRule for Trim {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        match self.mode {
            TrimMode::Both => Cow::Borrowed(input.trim()),
            TrimMode::End => Cow::Borrowed(input.trim_end()),
        }
    }
}

/// Ordered list of rules applied one after another.
#[derive(Debug, Default)]
pub struct Pipeline {
    rules: Vec<Box<dyn RepairRule>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule to the end of the pipeline.
    pub fn with_rule(mut self, rule: impl RepairRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Rule names in application order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn apply(&self, input: &str) -> String {
        let mut text = input.to_string();
        for rule in &self.rules {
            let next = rule.apply(&text).into_owned();
            text = next;
        }
        text
    }
}

/// Unicode-aware equivalent of the regex `\w` class.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
#[path = "rules.test.rs"]
mod tests;
