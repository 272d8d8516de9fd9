//! Append-only record of everything the shell has shown.

/// Number of `─` characters in a separator line.
pub const SEPARATOR_WIDTH: usize = 80;

/// The separator line, without a trailing newline.
pub fn separator_line() -> String {
    "─".repeat(SEPARATOR_WIDTH)
}

/// Renders `items` one per line.
pub fn render_items(items: &[TranscriptItem]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&item.render());
        out.push('\n');
    }
    out
}

/// One submitted line and what the shell showed for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    raw_input: String,
    display_output: String,
}

impl Entry {
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn display_output(&self) -> &str {
        &self.display_output
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptItem {
    Banner(String),
    Entry(Entry),
    Separator,
}

impl TranscriptItem {
    /// Display text for the item, without a trailing newline.
    pub fn render(&self) -> String {
        match self {
            Self::Banner(text) => text.clone(),
            Self::Entry(entry) => entry.display_output.clone(),
            Self::Separator => separator_line(),
        }
    }
}

/// Ordered transcript items. Items can only be appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    items: Vec<TranscriptItem>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[TranscriptItem] {
        &self.items
    }

    /// Items appended at or after `index`.
    pub fn items_since(&self, index: usize) -> &[TranscriptItem] {
        self.items.get(index..).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.items.iter().filter_map(|item| match item {
            TranscriptItem::Entry(entry) => Some(entry),
            _ => None,
        })
    }

    pub fn last_entry(&self) -> Option<&Entry> {
        self.items.iter().rev().find_map(|item| match item {
            TranscriptItem::Entry(entry) => Some(entry),
            _ => None,
        })
    }

    /// Every item rendered on its own line.
    pub fn render(&self) -> String {
        render_items(&self.items)
    }

    pub(crate) fn push_banner(&mut self, text: impl Into<String>) {
        self.items.push(TranscriptItem::Banner(text.into()));
    }

    pub(crate) fn push_entry(&mut self, raw_input: &str, display_output: String) {
        self.items.push(TranscriptItem::Entry(Entry {
            raw_input: raw_input.to_string(),
            display_output,
        }));
    }

    pub(crate) fn push_separator(&mut self) {
        self.items.push(TranscriptItem::Separator);
    }
}

#[cfg(test)]
#[path = "transcript.test.rs"]
mod tests;
