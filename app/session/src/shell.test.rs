use super::*;
use crate::AuthGate;
use crate::TranscriptItem;
use crate::transcript::separator_line;
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use std::sync::Arc;
use vdisk_auth::StaticCredentialStore;
use vdisk_error::Location;
use vdisk_error::StatusCode;

fn open_shell(binary: &str) -> CommandShell {
    let session = AuthGate::new(Arc::new(StaticCredentialStore::builtin()))
        .authenticate("student", "stud123")
        .expect("login");
    CommandShell::new(
        session,
        ArgvBuilder::new(binary, "vdisk_disk1.meta"),
        ProcessInvoker::default(),
    )
}

fn here() -> Location {
    Location::new(file!(), line!(), column!())
}

#[test]
fn test_parse_commands() {
    assert_eq!(
        Command::parse("list_files").expect("parse"),
        Command {
            verb: Verb::ListFiles,
            argument: None,
        }
    );
    assert_eq!(
        Command::parse("  read_file \t my notes.txt ").expect("parse"),
        Command {
            verb: Verb::ReadFile,
            argument: Some("my notes.txt".to_string()),
        }
    );
}

#[test]
fn test_parse_unknown_verb() {
    let err = Command::parse("rm -rf /").expect_err("unknown");
    assert!(matches!(&err, DispatchError::UnknownCommand { verb, .. } if verb == "rm"));
    assert_eq!(err.status_code(), StatusCode::UnknownCommand);
    assert!(Command::parse("Read_File x").is_err());
}

#[test]
fn test_filename_is_sanitized() {
    let command = Command::parse("write_file report 2 . txt").expect("parse");
    assert_eq!(command.filename(), "report2.txt");
    assert_eq!(Command::parse("read_file").expect("parse").filename(), "");
}

#[test]
fn test_titles() {
    assert_eq!(title_for(Verb::ListFiles, "x"), "📂 Files Stored in Virtual Disk:");
    assert_eq!(title_for(Verb::ReadFile, "a.txt"), "📥 Reading file: a.txt");
    assert_eq!(title_for(Verb::WriteFile, "a.txt"), "📤 Writing file: a.txt");
    assert_eq!(title_for(Verb::DeleteFile, "a.txt"), "🗑️ Deleting file: a.txt");
}

#[test]
fn test_render_success_output() {
    let outcome = Ok(InvocationResult {
        stdout: "\x1b[32mhello\x1b[0m\nDEBUG: argc = 3\n".to_string(),
        stderr: "warn 1\n".to_string(),
        exit_code: Some(0),
        duration_ms: 1,
    });
    assert_eq!(render_outcome("T", &outcome), "T\nhello\nwarn1");
}

#[test]
fn test_render_blank_output() {
    let outcome = Ok(InvocationResult {
        stdout: "DEBUG: only diagnostics\n  \n".to_string(),
        ..Default::default()
    });
    assert_eq!(
        render_outcome("📂 Files Stored in Virtual Disk:", &outcome),
        "📂 Files Stored in Virtual Disk:\nℹ️ No output from CLI."
    );
}

#[test]
fn test_render_errors() {
    let not_found = Err(ProcessError::NotFound {
        path: PathBuf::from("./storage_cli"),
        location: here(),
    });
    assert_eq!(
        render_outcome("T", &not_found),
        "❌ CLI not found at './storage_cli'."
    );

    let failed = Err(ProcessError::ExecutionFailed {
        detail: "Permission denied".to_string(),
        location: here(),
    });
    assert_eq!(render_outcome("T", &failed), "❌ Error: Permission denied");

    let timed_out = Err(ProcessError::TimedOut {
        secs: 120,
        location: here(),
    });
    assert_eq!(
        render_outcome("T", &timed_out),
        "❌ Error: CLI timed out after 120 seconds"
    );

    let cancelled = Err(ProcessError::Cancelled { location: here() });
    assert_eq!(render_outcome("T", &cancelled), "❌ Error: command cancelled");
}

#[test]
fn test_new_shell_has_banner() {
    let shell = open_shell("./storage_cli");
    assert_eq!(shell.state(), ShellState::Idle);
    assert_eq!(
        shell.transcript().items(),
        [
            TranscriptItem::Banner(WELCOME_BANNER.to_string()),
            TranscriptItem::Separator,
        ]
    );
    assert_eq!(shell.title(), "💾 Storage Shell — student (STUDENT)");
}

#[test]
fn test_blank_line_appends_separator_only() {
    let mut shell = open_shell("./storage_cli");
    let before = shell.transcript().len();

    assert_eq!(shell.submit("   ").expect("submit"), Submitted::Blank);
    assert_eq!(shell.transcript().items_since(before), [TranscriptItem::Separator]);
    assert_eq!(shell.state(), ShellState::Idle);
}

#[test]
fn test_unknown_command_is_rendered() {
    let mut shell = open_shell("./storage_cli");
    let before = shell.transcript().len();

    assert_eq!(shell.submit("format_disk now").expect("submit"), Submitted::Rejected);
    assert_eq!(shell.state(), ShellState::Idle);

    let added = shell.transcript().items_since(before);
    assert_eq!(added.len(), 2);
    match &added[0] {
        TranscriptItem::Entry(entry) => {
            assert_eq!(entry.raw_input(), "format_disk now");
            assert_eq!(
                entry.display_output(),
                "❌ Unknown command.\n💡 Try: list_files | read_file <file> | write_file <file> | delete_file <file>"
            );
        }
        other => panic!("expected entry, got {other:?}"),
    }
    assert_eq!(added[1].render(), separator_line());
}

#[test]
fn test_dispatch_without_runtime_renders_error() {
    let mut shell = open_shell("./storage_cli");
    let before = shell.transcript().len();

    assert_eq!(shell.submit("list_files").expect("submit"), Submitted::Failed);
    assert_eq!(shell.state(), ShellState::Idle);

    let added = shell.transcript().items_since(before);
    assert_eq!(added.len(), 2);
    match &added[0] {
        TranscriptItem::Entry(entry) => {
            assert_eq!(entry.raw_input(), "list_files");
            assert!(
                entry.display_output().starts_with("❌ Error: no async runtime"),
                "{}",
                entry.display_output()
            );
        }
        other => panic!("expected entry, got {other:?}"),
    }
    assert_eq!(added[1], TranscriptItem::Separator);

    // The shell stays usable afterwards.
    assert_eq!(shell.submit("").expect("submit"), Submitted::Blank);
}

#[tokio::test]
async fn test_busy_while_executing() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let missing = tmp.path().join("storage_cli");
    let mut shell = open_shell(&missing.display().to_string());

    assert_eq!(shell.submit("list_files").expect("submit"), Submitted::Dispatched);
    assert_eq!(shell.state(), ShellState::Executing);
    let before = shell.transcript().len();

    let err = shell.submit("read_file a.txt").expect_err("busy");
    assert!(matches!(err, DispatchError::Busy { .. }));
    assert_eq!(err.status_code(), StatusCode::SessionBusy);
    assert_eq!(shell.transcript().len(), before);

    let entry = shell.wait_for_completion().await.expect("entry");
    assert_eq!(
        entry.display_output(),
        format!("❌ CLI not found at '{}'.", missing.display())
    );
    assert_eq!(shell.state(), ShellState::Idle);
    assert!(shell.submit("read_file a.txt").is_ok());
}

#[tokio::test]
async fn test_idle_shell_has_nothing_to_wait_for() {
    let mut shell = open_shell("./storage_cli");
    assert!(shell.wait_for_completion().await.is_none());
    assert!(!shell.cancel());
    assert!(shell.cancellation_token().is_none());
}

#[test]
fn test_path_like_filenames() {
    assert!(is_path_like("../etc/passwd"));
    assert!(is_path_like("dir/file"));
    assert!(is_path_like("dir\\file"));
    assert!(!is_path_like("notes.txt"));
}
