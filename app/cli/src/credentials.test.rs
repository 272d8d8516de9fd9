use super::*;
use pretty_assertions::assert_eq;
use vdisk_auth::CredentialStore;
use vdisk_auth::digest::digest_password;

fn user(username: &str, salt: &str, password: &str, role: &str) -> UserConfig {
    UserConfig {
        username: username.to_string(),
        salt: salt.to_string(),
        password_sha256: digest_password(salt, password),
        role: role.to_string(),
    }
}

#[test]
fn test_no_config_users_keeps_builtins() {
    let store = build_store(&[]).expect("store");
    assert_eq!(store.len(), 3);
    assert_eq!(store.verify("guest", "guest123"), Some(Role::Guest));
}

#[test]
fn test_config_users_extend_and_override() {
    let store = build_store(&[
        user("ta", "s1", "ta-pass", "student"),
        user("guest", "s2", "changed", "guest"),
    ])
    .expect("store");

    assert_eq!(store.len(), 4);
    assert_eq!(store.verify("ta", "ta-pass"), Some(Role::Student));
    assert_eq!(store.verify("guest", "guest123"), None);
    assert_eq!(store.verify("guest", "changed"), Some(Role::Guest));
}

#[test]
fn test_unknown_role_is_rejected() {
    let err = build_store(&[user("ta", "s", "p", "superuser")]).expect_err("bad role");
    assert!(err.to_string().contains("superuser"));
}

#[test]
fn test_bad_digest_is_rejected() {
    let mut bad = user("ta", "s", "p", "admin");
    bad.password_sha256 = "1234".to_string();
    assert!(build_store(&[bad]).is_err());
}
