//! End-to-end dispatch against fake storage CLIs.

use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use vdisk_auth::StaticCredentialStore;
use vdisk_exec::ArgvBuilder;
use vdisk_exec::ProcessInvoker;
use vdisk_session::AuthGate;
use vdisk_session::CommandShell;
use vdisk_session::Entry;
use vdisk_session::ShellState;
use vdisk_session::Submitted;
use vdisk_session::TranscriptItem;

fn open_shell(binary: &Path, timeout: Duration) -> CommandShell {
    let session = AuthGate::new(Arc::new(StaticCredentialStore::builtin()))
        .authenticate("admin", "admin123")
        .expect("login");
    CommandShell::new(
        session,
        ArgvBuilder::new(binary, "vdisk_disk1.meta"),
        ProcessInvoker::new(timeout),
    )
}

#[cfg(unix)]
fn fake_cli(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("storage_cli");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write fake cli");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("chmod fake cli");
    path
}

#[tokio::test]
async fn test_missing_binary_renders_not_found_and_returns_to_idle() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let missing = tmp.path().join("storage_cli");
    let mut shell = open_shell(&missing, Duration::from_secs(5));

    assert_eq!(shell.submit("list_files").expect("submit"), Submitted::Dispatched);
    let entry = shell.wait_for_completion().await.expect("entry");
    assert_eq!(entry.raw_input(), "list_files");
    assert_eq!(
        entry.display_output(),
        format!("❌ CLI not found at '{}'.", missing.display())
    );
    assert_eq!(shell.state(), ShellState::Idle);
    assert_eq!(
        shell.transcript().items().last(),
        Some(&TranscriptItem::Separator)
    );
}

#[cfg(unix)]
#[tokio::test]
async fn test_output_is_sanitized_and_titled() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let cli = fake_cli(
        tmp.path(),
        r#"echo "DEBUG: argc = $#"
echo "argv[1] = '$1'"
printf '\033[1;34mFile: notes 2 . txt\033[0m\n'
printf 'Size: 12\342\200\213 bytes\n' >&2"#,
    );
    let mut shell = open_shell(&cli, Duration::from_secs(10));

    shell.submit("read_file notes 2 . txt").expect("submit");
    let entry = shell.wait_for_completion().await.expect("entry");
    assert_eq!(
        entry.display_output(),
        "📥 Reading file: notes2.txt\nFile: notes2.txt\nSize: 12 bytes"
    );
}

#[cfg(unix)]
#[tokio::test]
async fn test_argv_carries_meta_file_and_sanitized_filename() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let cli = fake_cli(tmp.path(), r#"echo "$1|$2|$3|$#""#);
    let mut shell = open_shell(&cli, Duration::from_secs(10));

    shell.submit("delete_file  old 1 . log").expect("submit");
    let entry = shell.wait_for_completion().await.expect("entry");
    assert_eq!(
        entry.display_output(),
        "🗑️ Deleting file: old1.log\ndelete_file|vdisk_disk1.meta|old1.log|3"
    );

    shell.submit("list_files ignored.txt").expect("submit");
    let entry = shell.wait_for_completion().await.expect("entry");
    assert_eq!(
        entry.display_output(),
        "📂 Files Stored in Virtual Disk:\nlist_files|vdisk_disk1.meta||2"
    );
}

#[cfg(unix)]
#[tokio::test]
async fn test_empty_output_shows_placeholder() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let cli = fake_cli(tmp.path(), "exit 1");
    let mut shell = open_shell(&cli, Duration::from_secs(10));

    shell.submit("write_file").expect("submit");
    let entry = shell.wait_for_completion().await.expect("entry");
    assert_eq!(
        entry.display_output(),
        "📤 Writing file: \nℹ️ No output from CLI."
    );
}

#[cfg(unix)]
#[tokio::test]
async fn test_cancel_stops_the_run() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let cli = fake_cli(tmp.path(), "exec sleep 30");
    let mut shell = open_shell(&cli, Duration::from_secs(60));

    shell.submit("list_files").expect("submit");
    let token = shell.cancellation_token().expect("in flight");
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        token.cancel();
    });

    let entry = tokio::time::timeout(Duration::from_secs(10), shell.wait_for_completion())
        .await
        .expect("completes after cancel")
        .expect("entry");
    assert_eq!(entry.display_output(), "❌ Error: command cancelled");
    assert_eq!(shell.state(), ShellState::Idle);
}

#[cfg(unix)]
#[tokio::test]
async fn test_timeout_is_reported() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let cli = fake_cli(tmp.path(), "exec sleep 30");
    let mut shell = open_shell(&cli, Duration::from_secs(1));

    shell.submit("read_file slow.bin").expect("submit");
    let entry = shell.wait_for_completion().await.expect("entry");
    assert_eq!(entry.display_output(), "❌ Error: CLI timed out after 1 seconds");
}

#[cfg(unix)]
#[tokio::test]
async fn test_transcript_records_a_whole_session() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let cli = fake_cli(tmp.path(), "echo ok");
    let mut shell = open_shell(&cli, Duration::from_secs(10));

    shell.submit("").expect("blank");
    shell.submit("bogus").expect("unknown");
    shell.submit("list_files").expect("dispatch");
    shell.wait_for_completion().await.expect("entry");

    let raws: Vec<&str> = shell
        .transcript()
        .entries()
        .map(Entry::raw_input)
        .collect();
    assert_eq!(raws, vec!["bogus", "list_files"]);

    let separators = shell
        .transcript()
        .items()
        .iter()
        .filter(|item| **item == TranscriptItem::Separator)
        .count();
    // Banner separator, blank line, unknown command, list_files.
    assert_eq!(separators, 4);
}
