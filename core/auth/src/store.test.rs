use super::*;
use crate::digest::digest_password;
use pretty_assertions::assert_eq;
use vdisk_error::ErrorExt;
use vdisk_error::StatusCode;

#[test]
fn test_builtin_users_verify() {
    let store = StaticCredentialStore::builtin();
    assert_eq!(store.len(), 3);
    assert_eq!(store.verify("admin", "admin123"), Some(Role::Admin));
    assert_eq!(store.verify("student", "stud123"), Some(Role::Student));
    assert_eq!(store.verify("guest", "guest123"), Some(Role::Guest));
}

#[test]
fn test_wrong_password_and_unknown_user_look_the_same() {
    let store = StaticCredentialStore::builtin();
    assert_eq!(store.verify("admin", "wrong"), None);
    assert_eq!(store.verify("nobody", "admin123"), None);
}

#[test]
fn test_verify_is_exact() {
    let store = StaticCredentialStore::builtin();
    assert_eq!(store.verify("Admin", "admin123"), None);
    assert_eq!(store.verify("admin", "admin123 "), None);
    assert_eq!(store.verify("admin", ""), None);
}

#[test]
fn test_empty_store_rejects_everyone() {
    let store = StaticCredentialStore::empty();
    assert!(store.is_empty());
    assert_eq!(store.verify("admin", "admin123"), None);
}

#[test]
fn test_records_from_digest_override_builtin() {
    let digest = digest_password("pepper", "n3w-pass");
    let record =
        CredentialRecord::from_digest("admin", "pepper", &digest.to_uppercase(), Role::Admin)
            .expect("valid digest");
    let store = StaticCredentialStore::builtin().with_records([record]);

    assert_eq!(store.len(), 3);
    assert_eq!(store.verify("admin", "admin123"), None);
    assert_eq!(store.verify("admin", "n3w-pass"), Some(Role::Admin));
}

#[test]
fn test_records_can_add_users() {
    let digest = digest_password("s", "pw");
    let record = CredentialRecord::from_digest(" ta ", "s", &digest, Role::Student)
        .expect("valid digest");
    assert_eq!(record.username(), "ta");

    let store = StaticCredentialStore::builtin().with_records([record]);
    assert_eq!(store.len(), 4);
    assert_eq!(store.verify("ta", "pw"), Some(Role::Student));
}

#[test]
fn test_from_digest_rejects_bad_input() {
    let err = CredentialRecord::from_digest("ta", "s", "not-hex", Role::Guest)
        .expect_err("bad digest");
    assert!(err.to_string().contains("'ta'"));
    assert_eq!(err.status_code(), StatusCode::InvalidConfig);

    let digest = digest_password("s", "pw");
    assert!(CredentialRecord::from_digest("  ", "s", &digest, Role::Guest).is_err());
}

#[test]
fn test_debug_does_not_expose_digest() {
    let record = CredentialRecord::from_password("admin", "salt", "admin123", Role::Admin);
    let rendered = format!("{record:?}");
    assert!(rendered.contains("admin"));
    assert!(!rendered.contains(&digest_password("salt", "admin123")));
}
