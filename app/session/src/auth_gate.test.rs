use super::*;
use pretty_assertions::assert_eq;
use vdisk_auth::Role;
use vdisk_auth::StaticCredentialStore;
use vdisk_error::ErrorExt;
use vdisk_error::StatusCode;

fn gate() -> AuthGate {
    AuthGate::new(Arc::new(StaticCredentialStore::builtin()))
}

#[test]
fn test_builtin_logins() {
    let gate = gate();
    for (user, pass, role) in [
        ("admin", "admin123", Role::Admin),
        ("student", "stud123", Role::Student),
        ("guest", "guest123", Role::Guest),
    ] {
        let session = gate.authenticate(user, pass).expect("login");
        assert_eq!(session.username(), user);
        assert_eq!(session.role(), role);
        assert!(session.transcript().is_empty());
    }
}

#[test]
fn test_username_is_trimmed() {
    let session = gate().authenticate("  admin \t", "admin123").expect("login");
    assert_eq!(session.username(), "admin");
}

#[test]
fn test_password_is_not_trimmed() {
    assert!(gate().authenticate("admin", " admin123").is_err());
}

#[test]
fn test_failures_share_one_message() {
    let gate = gate();
    let wrong_password = gate.authenticate("admin", "nope").expect_err("bad password");
    let unknown_user = gate.authenticate("root", "admin123").expect_err("unknown user");

    assert_eq!(wrong_password.to_string(), "Invalid username or password");
    assert_eq!(unknown_user.to_string(), wrong_password.to_string());
    assert_eq!(unknown_user.status_code(), StatusCode::AuthenticationFailed);
}

#[test]
fn test_custom_store() {
    #[derive(Debug)]
    struct AllowAll;

    impl CredentialStore for AllowAll {
        fn verify(&self, _username: &str, _password: &str) -> Option<Role> {
            Some(Role::Guest)
        }
    }

    let session = AuthGate::new(Arc::new(AllowAll))
        .authenticate("anyone", "")
        .expect("login");
    assert_eq!(session.role(), Role::Guest);
}
