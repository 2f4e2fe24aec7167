use crate::{AvatarUpload, User};

#[test]
fn test_user_deserializes_api_payload() {
    let json = r#"{"id":"1","name":"Ana","email":"a@b.com","avatar_url":""}"#;
    let user: User = serde_json::from_str(json).unwrap();

    assert_eq!(user.id, "1");
    assert_eq!(user.name, "Ana");
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.avatar_url, Some(String::new()));
}

#[test]
fn test_user_missing_or_null_avatar_is_none() {
    let missing: User = serde_json::from_str(r#"{"id":"1","name":"Ana","email":"a@b.com"}"#).unwrap();
    let null: User =
        serde_json::from_str(r#"{"id":"1","name":"Ana","email":"a@b.com","avatar_url":null}"#)
            .unwrap();

    assert!(missing.avatar_url.is_none());
    assert!(null.avatar_url.is_none());
}

#[test]
fn test_user_missing_required_field_fails() {
    let result = serde_json::from_str::<User>(r#"{"id":"1","email":"a@b.com"}"#);
    assert!(result.is_err());
}

#[test]
fn test_avatar_upload_named_after_user() {
    let user = User::new("42", "Ana", "a@b.com");
    let upload = AvatarUpload::jpeg_for(&user, vec![0xFF, 0xD8]);

    assert_eq!(upload.file_name, "42.jpg");
    assert_eq!(upload.content_type, "image/jpeg");
    assert_eq!(upload.bytes.len(), 2);
}
