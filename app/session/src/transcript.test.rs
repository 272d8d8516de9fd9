use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_separator_line() {
    let line = separator_line();
    assert_eq!(line.chars().count(), SEPARATOR_WIDTH);
    assert!(line.chars().all(|c| c == '─'));
}

#[test]
fn test_items_keep_arrival_order() {
    let mut transcript = Transcript::new();
    assert!(transcript.is_empty());

    transcript.push_banner("hello");
    transcript.push_separator();
    transcript.push_entry("list_files", "out".to_string());
    transcript.push_separator();

    assert_eq!(transcript.len(), 4);
    assert_eq!(transcript.items()[0], TranscriptItem::Banner("hello".to_string()));
    assert_eq!(transcript.items()[1], TranscriptItem::Separator);
    assert!(matches!(transcript.items()[2], TranscriptItem::Entry(_)));
    assert_eq!(transcript.items()[3], TranscriptItem::Separator);
}

#[test]
fn test_entries_and_last_entry() {
    let mut transcript = Transcript::new();
    assert!(transcript.last_entry().is_none());

    transcript.push_entry("a", "one".to_string());
    assert_eq!(transcript.last_entry().map(Entry::raw_input), Some("a"));
    transcript.push_separator();
    transcript.push_entry("b", "two".to_string());

    let raws: Vec<&str> = transcript.entries().map(Entry::raw_input).collect();
    assert_eq!(raws, vec!["a", "b"]);
    assert_eq!(
        transcript.last_entry().map(Entry::display_output),
        Some("two")
    );
}

#[test]
fn test_items_since() {
    let mut transcript = Transcript::new();
    transcript.push_banner("x");
    let mark = transcript.len();
    transcript.push_entry("a", "one".to_string());
    transcript.push_separator();

    assert_eq!(transcript.items_since(mark).len(), 2);
    assert!(transcript.items_since(99).is_empty());
}

#[test]
fn test_render() {
    let mut transcript = Transcript::new();
    transcript.push_banner("hi");
    transcript.push_entry("a", "line1\nline2".to_string());
    transcript.push_separator();

    let expected = format!("hi\nline1\nline2\n{}\n", separator_line());
    assert_eq!(transcript.render(), expected);
}

#[test]
fn test_render_items_slice_matches_tail() {
    let mut transcript = Transcript::new();
    transcript.push_banner("📢 Welcome! Type a command below.");
    transcript.push_separator();
    let mark = transcript.len();
    transcript.push_entry("list_files", "📂 Files Stored in Virtual Disk:\na.txt".to_string());
    transcript.push_separator();

    let tail = render_items(transcript.items_since(mark));
    assert_eq!(
        tail,
        format!("📂 Files Stored in Virtual Disk:\na.txt\n{}\n", separator_line())
    );
    assert!(transcript.render().ends_with(&tail));
    assert_eq!(render_items(&[]), "");
}
