use super::*;

#[test]
fn test_digest_is_stable_hex() {
    let a = digest_password("salt", "admin123");
    let b = digest_password("salt", "admin123");
    assert_eq!(a, b);
    assert!(is_digest_hex(&a));
}

#[test]
fn test_digest_depends_on_salt() {
    assert_ne!(
        digest_password("vdisk-shell:admin", "pw"),
        digest_password("vdisk-shell:guest", "pw")
    );
}

#[test]
fn test_salt_and_password_do_not_run_together() {
    assert_ne!(digest_password("ab", "c"), digest_password("a", "bc"));
}

#[test]
fn test_known_vector() {
    // sha256("\0") with an empty salt and password.
    assert_eq!(
        digest_password("", ""),
        "6e340b9cffb37a989ca544e6bb780a2c78901d3fb33738768511a30617afa01d"
    );
}

#[test]
fn test_is_digest_hex() {
    assert!(!is_digest_hex("abc"));
    assert!(!is_digest_hex(&"G".repeat(DIGEST_HEX_LEN)));
    assert!(!is_digest_hex(&"A".repeat(DIGEST_HEX_LEN)));
    assert!(is_digest_hex(&"0".repeat(DIGEST_HEX_LEN)));
}

#[test]
fn test_constant_time_eq() {
    assert!(constant_time_eq(b"same", b"same"));
    assert!(!constant_time_eq(b"same", b"sane"));
    assert!(!constant_time_eq(b"short", b"longer"));
    assert!(constant_time_eq(b"", b""));
}
