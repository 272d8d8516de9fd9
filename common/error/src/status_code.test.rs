use super::*;
use strum::IntoEnumIterator;

#[test]
fn test_status_code_values() {
    // General categories (01-05)
    assert_eq!(StatusCode::Success as i32, 00_000);
    assert_eq!(StatusCode::Unknown as i32, 01_000);
    assert_eq!(StatusCode::UnknownCommand as i32, 02_004);
    assert_eq!(StatusCode::AuthenticationFailed as i32, 05_000);

    // Business categories (10-14)
    assert_eq!(StatusCode::InvalidConfig as i32, 10_000);
    assert_eq!(StatusCode::BinaryNotFound as i32, 13_000);
    assert_eq!(StatusCode::SessionBusy as i32, 14_000);
}

#[test]
fn test_should_log_error() {
    assert!(StatusCode::Unknown.should_log_error());
    assert!(StatusCode::ExecutionFailed.should_log_error());
    assert!(!StatusCode::UnknownCommand.should_log_error());
    assert!(!StatusCode::AuthenticationFailed.should_log_error());
}

#[test]
fn test_display_and_name() {
    assert_eq!(format!("{}", StatusCode::Success), "Success");
    assert_eq!(StatusCode::BinaryNotFound.name(), "BinaryNotFound");
    assert_eq!(StatusCode::SessionBusy.as_ref(), "SessionBusy");
}

#[test]
fn test_metadata_consistency() {
    for code in StatusCode::iter() {
        let meta = code.meta();
        let value = code as i32;

        // Verify category matches code range (XX_YYY format)
        match meta.category {
            StatusCategory::Success => assert_eq!(value, 0),
            StatusCategory::Common => assert!((01_000..02_000).contains(&value)),
            StatusCategory::Input => assert!((02_000..03_000).contains(&value)),
            StatusCategory::Auth => assert!((05_000..06_000).contains(&value)),
            StatusCategory::Config => assert!((10_000..11_000).contains(&value)),
            StatusCategory::Process => assert!((13_000..14_000).contains(&value)),
            StatusCategory::Session => assert!((14_000..15_000).contains(&value)),
        }
    }
}
