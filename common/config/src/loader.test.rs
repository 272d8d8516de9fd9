use super::*;
use pretty_assertions::assert_eq;
use serial_test::serial;
use tempfile::TempDir;
use vdisk_error::ErrorExt;
use vdisk_error::StatusCode;

#[test]
fn test_default_config_dir() {
    let dir = default_config_dir();
    assert!(dir.ends_with(DEFAULT_CONFIG_DIR));
}

#[test]
fn test_missing_file_yields_defaults() {
    let loader = ConfigLoader::from_path("/nonexistent/path");
    assert_eq!(loader.load().unwrap(), AppConfig::default());
}

#[test]
fn test_blank_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(CONFIG_FILE), "  \n").unwrap();

    let loader = ConfigLoader::from_path(temp_dir.path());
    assert_eq!(loader.load().unwrap(), AppConfig::default());
}

#[test]
fn test_load_from_dir() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(CONFIG_FILE),
        r#"{"meta_file": "disk2.meta", "timeout_secs": 5}"#,
    )
    .unwrap();

    let config = ConfigLoader::from_path(temp_dir.path()).load().unwrap();
    assert_eq!(config.meta_file.as_deref(), Some("disk2.meta"));
    assert_eq!(config.timeout_secs, Some(5));
}

#[test]
fn test_load_explicit_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("custom.json");
    std::fs::write(&file, r#"{"cli_bin": "/bin/storage"}"#).unwrap();

    let loader = ConfigLoader::from_file(&file);
    assert_eq!(loader.config_file(), file.as_path());
    let config = loader.load().unwrap();
    assert_eq!(config.cli_bin, Some(PathBuf::from("/bin/storage")));
}

#[test]
fn test_invalid_json_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(CONFIG_FILE), "{ not json").unwrap();

    let err = ConfigLoader::from_path(temp_dir.path()).load().unwrap_err();
    assert!(matches!(err, ConfigError::JsonParse { .. }));
    assert!(err.to_string().contains(CONFIG_FILE));
    assert_eq!(err.status_code(), StatusCode::ConfigFileError);
}

#[test]
fn test_unreadable_path_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    // A directory where the file should be.
    std::fs::create_dir(temp_dir.path().join(CONFIG_FILE)).unwrap();

    let err = ConfigLoader::from_path(temp_dir.path()).load().unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
#[serial]
fn test_home_and_log_dir_env_overrides() {
    let temp_dir = TempDir::new().unwrap();
    let home = temp_dir.path().join("home");
    let logs = temp_dir.path().join("logs");

    // SAFETY: serialized with the other env-touching tests.
    unsafe {
        std::env::set_var(VDISK_SHELL_HOME_ENV, &home);
        std::env::remove_var(VDISK_SHELL_LOG_DIR_ENV);
    }
    assert_eq!(find_home(), home);
    assert_eq!(log_dir(), home.join(LOG_DIR_NAME));
    assert_eq!(
        ConfigLoader::from_home().config_file(),
        home.join(CONFIG_FILE).as_path()
    );

    unsafe {
        std::env::set_var(VDISK_SHELL_LOG_DIR_ENV, &logs);
    }
    assert_eq!(log_dir(), logs);

    unsafe {
        std::env::remove_var(VDISK_SHELL_HOME_ENV);
        std::env::remove_var(VDISK_SHELL_LOG_DIR_ENV);
    }
    assert_eq!(find_home(), default_config_dir());
}

#[test]
#[serial]
fn test_relative_home_resolves_against_cwd() {
    unsafe {
        std::env::set_var(VDISK_SHELL_HOME_ENV, "relative-home");
    }
    let home = find_home();
    unsafe {
        std::env::remove_var(VDISK_SHELL_HOME_ENV);
    }
    assert!(home.is_absolute());
    assert!(home.ends_with("relative-home"));
}
