use super::*;
use pretty_assertions::assert_eq;
use vdisk_utils_common::TimezoneConfig;

#[test]
fn test_empty_object_is_default() {
    let config: AppConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_full_config() {
    let json = r#"{
        "cli_bin": "/opt/vdisk/storage_cli",
        "meta_file": "disk2.meta",
        "timeout_secs": 30,
        "logging": { "level": "debug", "timezone": "utc", "location": true },
        "users": [
            { "username": "ta", "salt": "s1", "password_sha256": "ab", "role": "student" }
        ]
    }"#;
    let config: AppConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.cli_bin, Some(PathBuf::from("/opt/vdisk/storage_cli")));
    assert_eq!(config.meta_file.as_deref(), Some("disk2.meta"));
    assert_eq!(config.timeout_secs, Some(30));
    assert_eq!(config.users.len(), 1);
    assert_eq!(config.users[0].role, "student");

    let logging = config.logging.unwrap().to_common_logging();
    assert_eq!(logging.level, "debug");
    assert_eq!(logging.timezone, TimezoneConfig::Utc);
    assert!(logging.location);
    assert!(!logging.target);
}

#[test]
fn test_unknown_field_rejected() {
    let result: Result<AppConfig, _> = serde_json::from_str(r#"{"cli_binary": "x"}"#);
    assert!(result.is_err());
}

#[test]
fn test_logging_defaults() {
    let logging = LoggingConfig::default().to_common_logging();
    assert_eq!(logging, vdisk_utils_common::LoggingConfig::default());
}
