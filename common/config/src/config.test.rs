use super::*;
use crate::json_config::LoggingConfig;
use pretty_assertions::assert_eq;

#[test]
fn test_defaults() {
    let config = ShellConfig::default();
    assert_eq!(config.cli_bin, PathBuf::from("./storage_cli"));
    assert_eq!(config.meta_file, "vdisk_disk1.meta");
    assert_eq!(config.timeout, Duration::from_secs(120));
    assert_eq!(config.logging, vdisk_utils_common::LoggingConfig::default());
    assert!(config.users.is_empty());
}

#[test]
fn test_file_overrides_defaults() {
    let file = AppConfig {
        cli_bin: Some(PathBuf::from("/opt/storage_cli")),
        meta_file: Some("disk2.meta".to_string()),
        timeout_secs: Some(10),
        ..Default::default()
    };
    let config = ShellConfig::resolve(file, ConfigOverrides::default());
    assert_eq!(config.cli_bin, PathBuf::from("/opt/storage_cli"));
    assert_eq!(config.meta_file, "disk2.meta");
    assert_eq!(config.timeout, Duration::from_secs(10));
}

#[test]
fn test_cli_overrides_file() {
    let file = AppConfig {
        cli_bin: Some(PathBuf::from("/opt/storage_cli")),
        meta_file: Some("disk2.meta".to_string()),
        timeout_secs: Some(10),
        ..Default::default()
    };
    let overrides = ConfigOverrides {
        cli_bin: Some(PathBuf::from("./bin/cli")),
        meta_file: None,
        timeout_secs: Some(3),
        verbose: false,
    };
    let config = ShellConfig::resolve(file, overrides);
    assert_eq!(config.cli_bin, PathBuf::from("./bin/cli"));
    assert_eq!(config.meta_file, "disk2.meta");
    assert_eq!(config.timeout, Duration::from_secs(3));
}

#[test]
fn test_zero_timeout_falls_back_to_default() {
    let file = AppConfig {
        timeout_secs: Some(0),
        ..Default::default()
    };
    let config = ShellConfig::resolve(file, ConfigOverrides::default());
    assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));

    let overrides = ConfigOverrides {
        timeout_secs: Some(0),
        ..Default::default()
    };
    let config = ShellConfig::resolve(AppConfig::default(), overrides);
    assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
}

#[test]
fn test_verbose_adds_debug_directives() {
    let file = AppConfig {
        logging: Some(LoggingConfig {
            level: Some("warn".to_string()),
            modules: Some(vec!["hyper=off".to_string()]),
            ..Default::default()
        }),
        ..Default::default()
    };
    let overrides = ConfigOverrides {
        verbose: true,
        ..Default::default()
    };
    let config = ShellConfig::resolve(file, overrides);
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.modules[0], "hyper=off");
    assert!(
        config
            .logging
            .modules
            .contains(&"vdisk_session=debug".to_string())
    );
}
