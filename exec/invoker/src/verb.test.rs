use super::*;
use strum::IntoEnumIterator;

#[test]
fn test_parse_whitelist() {
    assert_eq!(Verb::parse("list_files"), Some(Verb::ListFiles));
    assert_eq!(Verb::parse("read_file"), Some(Verb::ReadFile));
    assert_eq!(Verb::parse("write_file"), Some(Verb::WriteFile));
    assert_eq!(Verb::parse("delete_file"), Some(Verb::DeleteFile));
}

#[test]
fn test_parse_is_exact() {
    assert_eq!(Verb::parse("LIST_FILES"), None);
    assert_eq!(Verb::parse("list_files "), None);
    assert_eq!(Verb::parse("ls"), None);
    assert_eq!(Verb::parse(""), None);
}

#[test]
fn test_display_round_trips() {
    for verb in Verb::iter() {
        assert_eq!(Verb::parse(&verb.to_string()), Some(verb));
    }
}

#[test]
fn test_takes_filename() {
    assert!(!Verb::ListFiles.takes_filename());
    assert!(Verb::ReadFile.takes_filename());
    assert!(Verb::WriteFile.takes_filename());
    assert!(Verb::DeleteFile.takes_filename());
}
