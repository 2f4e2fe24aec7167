use crate::{Credentials, Session, SessionState, User};

fn ana() -> User {
    User::new("1", "Ana", "a@b.com")
}

#[test]
fn test_session_state_defaults_to_bootstrapping() {
    let state = SessionState::default();

    assert!(state.is_bootstrapping());
    assert!(!state.is_authenticated());
    assert!(state.token().is_none());
    assert!(state.user().is_none());
}

#[test]
fn test_authenticated_exposes_token_and_user_together() {
    let state = SessionState::Authenticated(Session::new("tok123", ana()));

    assert_eq!(state.as_str(), "authenticated");
    assert_eq!(state.token(), Some("tok123"));
    assert_eq!(state.user(), Some(&ana()));
}

#[test]
fn test_snapshot_carries_user_but_not_bootstrapping() {
    let state = SessionState::Authenticated(Session::new("tok123", ana()));
    let snapshot = state.snapshot();

    assert_eq!(snapshot.current_user, Some(ana()));
    assert!(!snapshot.is_bootstrapping);
    assert!(snapshot.is_signed_in());
}

#[test]
fn test_snapshot_while_bootstrapping_has_no_user() {
    let snapshot = SessionState::Bootstrapping.snapshot();

    assert!(snapshot.current_user.is_none());
    assert!(snapshot.is_bootstrapping);
}

#[test]
fn test_debug_output_redacts_secrets() {
    let session = Session::new("tok123", ana());
    let credentials = Credentials::new("a@b.com", "hunter2");

    assert!(!format!("{session:?}").contains("tok123"));
    assert!(!format!("{credentials:?}").contains("hunter2"));
}

#[test]
fn test_session_response_deserializes() {
    let json = r#"{"token":"tok123","user":{"id":"1","name":"Ana","email":"a@b.com","avatar_url":""}}"#;
    let session: Session = serde_json::from_str(json).unwrap();

    assert_eq!(session.token, "tok123");
    assert_eq!(session.user.name, "Ana");
}
