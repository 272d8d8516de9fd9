use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_rule_order() {
    assert_eq!(
        output_pipeline().rule_names(),
        vec![
            "strip-escape-sequences",
            "remove-invisible",
            "join-digits-after-word",
            "collapse-dot-spacing",
            "drop-diagnostic-lines",
            "trim-end",
        ]
    );
}

#[test]
fn test_strips_color_codes() {
    assert_eq!(sanitize_output("\x1b[31mHello\x1b[0m"), "Hello");
    assert_eq!(sanitize_output("\x1b[1;32mbold green\x1b[m"), "bold green");
}

#[test]
fn test_strips_single_byte_escapes() {
    assert_eq!(sanitize_output("a\x1bMb\x1b\\c"), "abc");
}

#[test]
fn test_removes_invisible_characters() {
    assert_eq!(sanitize_output("zero\u{200B}width\u{200C}\u{00A0}"), "zerowidth");
}

#[test]
fn test_repairs_digit_and_dot_artifacts() {
    assert_eq!(sanitize_output("word 123 . txt"), "word123.txt");
}

#[test]
fn test_drops_diagnostic_lines_preserving_order() {
    let raw = "DEBUG: argc = 4\n\
               argv[0] = './storage_cli'\n\
               argv[1] = 'read_file'\n\
               first line\n\
               DEBUG trailing\n\
               second line\n";
    assert_eq!(sanitize_output(raw), "first line\nsecond line");
}

#[test]
fn test_dot_repair_does_not_merge_lines() {
    let raw = "Listing files in 'vdisk_disk1.meta'...\nDEBUG: x\nDisk Name: vdisk_disk1.meta\n";
    assert_eq!(
        sanitize_output(raw),
        "Listing files in 'vdisk_disk1.meta'...\nDisk Name: vdisk_disk1.meta"
    );
}

#[test]
fn test_strips_trailing_whitespace_only() {
    assert_eq!(sanitize_output("  indented\n\n\n  "), "  indented");
}

#[test]
fn test_blank_output_stays_blank() {
    assert_eq!(sanitize_output(""), "");
    assert_eq!(sanitize_output("DEBUG: argc = 3\n\x1b[0m\n"), "");
}

#[test]
fn test_realistic_write_output() {
    let raw = "DEBUG: argc = 4\n\
               argv[0] = './storage_cli'\n\
               argv[1] = 'write_file'\n\
               argv[2] = 'vdisk_disk1.meta'\n\
               argv[3] = 'notes 2.txt'\n\
               \u{1F9EA} Cleaned filename: 'notes2.txt'\n\
               \x1b[32m\u{2705} File 'notes2.txt' successfully written to virtual disk.\x1b[0m\n";
    assert_eq!(
        sanitize_output(raw),
        "\u{1F9EA} Cleaned filename: 'notes2.txt'\n\
         \u{2705} File 'notes2.txt' successfully written to virtual disk."
    );
}
