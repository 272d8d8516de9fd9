use super::*;
use crate::ArgvBuilder;
use crate::Verb;
use pretty_assertions::assert_eq;
use vdisk_error::ErrorExt;
use vdisk_error::StatusCode;

#[cfg(unix)]
fn write_script(dir: &std::path::Path, body: &str) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("storage_cli");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write script");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("chmod script");
    path
}

#[test]
fn test_zero_timeout_uses_default() {
    let invoker = ProcessInvoker::new(Duration::ZERO);
    assert_eq!(invoker.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    assert_eq!(ProcessInvoker::default().timeout(), invoker.timeout());
}

#[tokio::test]
async fn test_missing_binary_is_not_found() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let missing = tmp.path().join("storage_cli");
    let inv = ArgvBuilder::new(&missing, "vdisk_disk1.meta").build(Verb::ListFiles, "");

    let err = ProcessInvoker::default()
        .invoke(&inv, CancellationToken::new())
        .await
        .expect_err("missing binary");
    match &err {
        ProcessError::NotFound { path, .. } => assert_eq!(path, &missing),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.status_code(), StatusCode::BinaryNotFound);
}

#[cfg(unix)]
#[tokio::test]
async fn test_non_executable_file_is_not_found() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let path = tmp.path().join("storage_cli");
    std::fs::write(&path, "not a program").expect("write file");

    let inv = ArgvBuilder::new(&path, "m").build(Verb::ListFiles, "");
    let err = ProcessInvoker::default()
        .invoke(&inv, CancellationToken::new())
        .await
        .expect_err("not executable");
    assert!(matches!(err, ProcessError::NotFound { .. }));
}

#[cfg(unix)]
#[tokio::test]
async fn test_passes_argv_and_captures_output() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let script = write_script(
        tmp.path(),
        r#"echo "verb=$1 meta=$2 file=$3 argc=$#"
echo "warn" >&2"#,
    );
    let inv = ArgvBuilder::new(&script, "vdisk_disk1.meta").build(Verb::ReadFile, "notes.txt");

    let result = ProcessInvoker::default()
        .invoke(&inv, CancellationToken::new())
        .await
        .expect("run script");
    assert_eq!(
        result.stdout,
        "verb=read_file meta=vdisk_disk1.meta file=notes.txt argc=3\n"
    );
    assert_eq!(result.stderr, "warn\n");
    assert_eq!(result.exit_code, Some(0));
    assert_eq!(
        result.combined_output(),
        "verb=read_file meta=vdisk_disk1.meta file=notes.txt argc=3\nwarn\n"
    );
    assert!(result.duration_ms >= 0);
}

#[cfg(unix)]
#[tokio::test]
async fn test_nonzero_exit_is_still_ok() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let script = write_script(tmp.path(), "echo 'File not found'\nexit 3");
    let inv = ArgvBuilder::new(&script, "m").build(Verb::DeleteFile, "x");

    let result = ProcessInvoker::default()
        .invoke(&inv, CancellationToken::new())
        .await
        .expect("run script");
    assert_eq!(result.exit_code, Some(3));
    assert_eq!(result.stdout, "File not found\n");
}

#[cfg(unix)]
#[tokio::test]
async fn test_stdin_is_closed() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let script = write_script(tmp.path(), "cat; echo done");
    let inv = ArgvBuilder::new(&script, "m").build(Verb::ListFiles, "");

    let result = ProcessInvoker::new(Duration::from_secs(10))
        .invoke(&inv, CancellationToken::new())
        .await
        .expect("run script");
    assert_eq!(result.stdout, "done\n");
}

#[cfg(unix)]
#[tokio::test]
async fn test_invalid_utf8_is_lossy() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let script = write_script(tmp.path(), r"printf 'ok\377\n'");
    let inv = ArgvBuilder::new(&script, "m").build(Verb::ListFiles, "");

    let result = ProcessInvoker::default()
        .invoke(&inv, CancellationToken::new())
        .await
        .expect("run script");
    assert_eq!(result.stdout, "ok\u{FFFD}\n");
}

#[cfg(unix)]
#[tokio::test]
async fn test_timeout_kills_child() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let script = write_script(tmp.path(), "exec sleep 30");
    let inv = ArgvBuilder::new(&script, "m").build(Verb::ListFiles, "");

    let start = std::time::Instant::now();
    let err = ProcessInvoker::new(Duration::from_secs(1))
        .invoke(&inv, CancellationToken::new())
        .await
        .expect_err("timeout");
    assert!(start.elapsed() < Duration::from_secs(10));
    match &err {
        ProcessError::TimedOut { secs, .. } => assert_eq!(*secs, 1),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.to_string(), "CLI timed out after 1 seconds");
    assert_eq!(err.status_code(), StatusCode::Timeout);
}

#[cfg(unix)]
#[tokio::test]
async fn test_cancellation_kills_child() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let script = write_script(tmp.path(), "exec sleep 30");
    let inv = ArgvBuilder::new(&script, "m").build(Verb::ListFiles, "");

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let err = ProcessInvoker::new(Duration::from_secs(30))
        .invoke(&inv, cancel)
        .await
        .expect_err("cancelled");
    assert!(matches!(err, ProcessError::Cancelled { .. }));
    assert_eq!(err.status_code(), StatusCode::Cancelled);
}
