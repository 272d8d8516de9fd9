use super::*;
use std::str::FromStr;

#[test]
fn test_role_display_is_lowercase() {
    assert_eq!(Role::Admin.to_string(), "admin");
    assert_eq!(Role::Student.as_ref(), "student");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("guest").expect("parse"), Role::Guest);
    assert!(Role::from_str("root").is_err());
}

#[test]
fn test_role_serde() {
    let role: Role = serde_json::from_str("\"admin\"").expect("deserialize");
    assert_eq!(role, Role::Admin);
    assert_eq!(serde_json::to_string(&Role::Guest).expect("serialize"), "\"guest\"");
}
