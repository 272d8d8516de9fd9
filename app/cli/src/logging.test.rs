use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_open_log_file_creates_dir() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let dir = tmp.path().join("nested").join("log");

    let (_file, path) = open_log_file(&dir).expect("open log");
    assert_eq!(path, dir.join(LOG_FILE_NAME));
    assert!(path.exists());
}

#[cfg(unix)]
#[test]
fn test_log_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = tempfile::tempdir().expect("create temp dir");
    let (_file, path) = open_log_file(tmp.path()).expect("open log");
    let mode = std::fs::metadata(&path).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o077, 0);
}

#[test]
fn test_open_log_file_appends() {
    use std::io::Write;

    let tmp = tempfile::tempdir().expect("create temp dir");
    {
        let (mut file, _) = open_log_file(tmp.path()).expect("open log");
        writeln!(file, "first").expect("write");
    }
    let (mut file, path) = open_log_file(tmp.path()).expect("reopen log");
    writeln!(file, "second").expect("write");

    let content = std::fs::read_to_string(path).expect("read log");
    assert_eq!(content, "first\nsecond\n");
}
