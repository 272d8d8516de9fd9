use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_remove_chars_borrows_when_clean() {
    let rule = RemoveChars::new("nbsp", &['\u{00A0}']);
    assert!(matches!(rule.apply("plain"), Cow::Borrowed("plain")));
    assert_eq!(rule.apply("a\u{00A0}b"), "ab");
}

#[test]
fn test_regex_replace_uses_groups() {
    let rule = RegexReplace::new("digits", r"\s*([0-9]+)\s*", "${1}").expect("valid pattern");
    assert_eq!(rule.apply("file 12 x"), "file12x");
}

#[test]
fn test_regex_replace_rejects_bad_pattern() {
    assert!(RegexReplace::new("bad", "(unclosed", "").is_err());
}

#[test]
fn test_join_digits_requires_word_before_gap() {
    let rule = JoinDigitsAfterWord::new("join").expect("valid pattern");
    assert_eq!(rule.apply("disk 1"), "disk1");
    assert_eq!(rule.apply("size = 42"), "size = 42");
    assert_eq!(rule.apply("v 1 2"), "v12");
    assert_eq!(rule.apply("= 1 2"), "= 12");
}

#[test]
fn test_join_digits_keeps_line_breaks() {
    let rule = JoinDigitsAfterWord::new("join").expect("valid pattern");
    assert_eq!(rule.apply("Files:\n1 entry"), "Files:\n1 entry");
    assert_eq!(rule.apply("total\n 3"), "total\n 3");
}

#[test]
fn test_drop_lines_with_prefix() {
    let rule = DropLinesWithPrefix::new("drop", &["DEBUG", "argv["]);
    let input = "first\nDEBUG: argc = 3\nargv[0] = './storage_cli'\nsecond\r\nthird";
    assert_eq!(rule.apply(input), "first\nsecond\nthird");
}

#[test]
fn test_drop_lines_only_matches_line_start() {
    let rule = DropLinesWithPrefix::new("drop", &["DEBUG"]);
    assert_eq!(rule.apply("  DEBUG indented\nnot DEBUG"), "  DEBUG indented\nnot DEBUG");
}

#[test]
fn test_trim_modes() {
    assert_eq!(Trim::new("t", TrimMode::Both).apply("  x  "), "x");
    assert_eq!(Trim::new("t", TrimMode::End).apply("  x  \n"), "  x");
}

#[test]
fn test_pipeline_applies_in_order() {
    let pipeline = Pipeline::new()
        .with_rule(RemoveChars::new("strip-x", &['x']))
        .with_rule(Trim::new("trim", TrimMode::Both));
    assert_eq!(pipeline.rule_names(), vec!["strip-x", "trim"]);
    assert_eq!(pipeline.apply(" x a x "), "a");
}

#[test]
fn test_empty_pipeline_is_identity() {
    assert_eq!(Pipeline::new().apply(" unchanged "), " unchanged ");
}
