use super::*;
use pretty_assertions::assert_eq;

const SAMPLES: &[&str] = &[
    "",
    "   ",
    "notes.txt",
    "file 1",
    "name . txt",
    " report 2 . txt ",
    "my\u{00A0}file.txt",
    "a 1 b 2 . c",
    "data\t7\t.\tbin",
    "..  /etc/passwd",
    "x . . y",
    "\u{00A0} 3 \u{00A0}",
    "résumé 2024 . pdf",
];

#[test]
fn test_rule_order() {
    assert_eq!(
        filename_pipeline().rule_names(),
        vec!["remove-nbsp", "join-digit-runs", "collapse-dot-spacing", "trim"]
    );
}

#[test]
fn test_repairs_digit_gaps() {
    assert_eq!(sanitize_filename("file 1"), "file1");
    assert_eq!(sanitize_filename("disk 12 backup"), "disk12backup");
}

#[test]
fn test_repairs_dot_spacing() {
    assert_eq!(sanitize_filename("name . txt"), "name.txt");
    assert_eq!(sanitize_filename(" report 2 . txt "), "report2.txt");
}

#[test]
fn test_removes_non_breaking_space() {
    assert_eq!(sanitize_filename("my\u{00A0}file.txt"), "myfile.txt");
    for sample in SAMPLES {
        assert!(!sanitize_filename(sample).contains('\u{00A0}'), "{sample:?}");
    }
}

#[test]
fn test_keeps_inner_word_spacing() {
    assert_eq!(sanitize_filename("  my notes.txt "), "my notes.txt");
}

#[test]
fn test_idempotent() {
    for sample in SAMPLES {
        let once = sanitize_filename(sample);
        let twice = sanitize_filename(&once);
        assert_eq!(once, twice, "not idempotent for {sample:?}");
    }
}

#[test]
fn test_path_like_input_passes_through() {
    assert_eq!(sanitize_filename("../secret . txt"), "../secret.txt");
}
