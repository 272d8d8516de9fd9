use super::*;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use vdisk_auth::StaticCredentialStore;

#[test]
fn test_greeting() {
    let gate = AuthGate::new(Arc::new(StaticCredentialStore::builtin()));
    let session = gate.authenticate(" student ", "stud123").expect("login");
    assert_eq!(greeting(&session), "Welcome student (student)");
}
