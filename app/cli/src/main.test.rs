use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_no_flags() {
    let cli = Cli::try_parse_from(["vdisk-shell"]).expect("parse");
    assert_eq!(cli.overrides(), ConfigOverrides::default());
    assert!(cli.config.is_none());
}

#[test]
fn test_all_flags() {
    let cli = Cli::try_parse_from([
        "vdisk-shell",
        "-c",
        "/tmp/config.json",
        "--cli-bin",
        "/opt/storage_cli",
        "--meta-file",
        "disk2.meta",
        "--timeout",
        "30",
        "-v",
    ])
    .expect("parse");

    assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.json")));
    assert_eq!(
        cli.overrides(),
        ConfigOverrides {
            cli_bin: Some(PathBuf::from("/opt/storage_cli")),
            meta_file: Some("disk2.meta".to_string()),
            timeout_secs: Some(30),
            verbose: true,
        }
    );
}

#[test]
fn test_rejects_bad_timeout() {
    assert!(Cli::try_parse_from(["vdisk-shell", "--timeout", "soon"]).is_err());
    assert!(Cli::try_parse_from(["vdisk-shell", "--timeout", "-1"]).is_err());
}
