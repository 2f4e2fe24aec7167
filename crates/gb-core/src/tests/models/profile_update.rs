use crate::ProfileUpdate;

use serde_json::json;

#[test]
fn test_profile_update_without_password_omits_password_fields() {
    let update = ProfileUpdate::new("Ana Maria", "a@b.com");
    let body = serde_json::to_value(&update).unwrap();

    assert_eq!(body, json!({ "name": "Ana Maria", "email": "a@b.com" }));
    assert!(!update.changes_password());
}

#[test]
fn test_profile_update_with_password_change_sends_all_three() {
    let update =
        ProfileUpdate::new("Ana", "a@b.com").with_password_change("old", "new-pw", "new-pw");
    let body = serde_json::to_value(&update).unwrap();

    assert_eq!(body["old_password"], "old");
    assert_eq!(body["password"], "new-pw");
    assert_eq!(body["password_confirmation"], "new-pw");
    assert!(update.changes_password());
}

#[test]
fn test_profile_update_empty_old_password_is_not_a_change() {
    let update = ProfileUpdate::new("Ana", "a@b.com").with_password_change("", "x", "x");

    assert!(!update.changes_password());
    assert!(update.password.is_none());
}

#[test]
fn test_profile_update_debug_hides_passwords() {
    let update = ProfileUpdate::new("Ana", "a@b.com").with_password_change("old", "secret", "secret");
    let debug = format!("{update:?}");

    assert!(!debug.contains("secret"));
    assert!(!debug.contains("old"));
}
