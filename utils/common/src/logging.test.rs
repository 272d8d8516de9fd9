use super::*;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

#[test]
fn test_configurable_timer_local() {
    let timer = ConfigurableTimer::new(TimezoneConfig::Local);
    let mut buf = String::new();
    let mut writer = Writer::new(&mut buf);
    timer.format_time(&mut writer).expect("format local time");
    assert!(buf.contains('T'));
}

#[test]
fn test_configurable_timer_utc() {
    let timer = ConfigurableTimer::new(TimezoneConfig::Utc);
    let mut buf = String::new();
    let mut writer = Writer::new(&mut buf);
    timer.format_time(&mut writer).expect("format utc time");
    assert!(buf.ends_with("+00:00"));
}

#[test]
fn test_build_env_filter_with_default() {
    let logging = LoggingConfig::default();
    let filter = build_env_filter(&logging, "error");
    let _ = format!("{filter:?}");
}

#[test]
fn test_build_env_filter_with_modules() {
    let logging = LoggingConfig {
        location: false,
        target: false,
        timezone: TimezoneConfig::Local,
        level: "info".to_string(),
        modules: vec![
            "vdisk_session=debug".to_string(),
            "vdisk_exec=trace".to_string(),
        ],
    };
    let filter = build_env_filter(&logging, "error");
    let filter_str = format!("{filter:?}");
    assert!(filter_str.contains("vdisk_session") || filter_str.contains("debug"));
}

#[test]
fn test_timezone_config_serde() {
    let tz: TimezoneConfig = serde_json::from_str("\"utc\"").expect("parse");
    assert_eq!(tz, TimezoneConfig::Utc);
}
