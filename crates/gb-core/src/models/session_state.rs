use crate::{Session, User};

/// In-memory session state.
///
/// A token never exists without its user (and vice versa): both live in
/// [`Session`] and only `Authenticated` carries one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Startup, before the persisted record has been read. Never re-entered.
    #[default]
    Bootstrapping,
    Unauthenticated,
    Authenticated(Session),
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bootstrapping => "bootstrapping",
            Self::Unauthenticated => "unauthenticated",
            Self::Authenticated(_) => "authenticated",
        }
    }

    pub fn is_bootstrapping(&self) -> bool {
        matches!(self, Self::Bootstrapping)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.session().map(|s| s.token.as_str())
    }

    pub fn user(&self) -> Option<&User> {
        self.session().map(|s| &s.user)
    }

    /// Read-only view handed to observers. Carries no token.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            current_user: self.user().cloned(),
            is_bootstrapping: self.is_bootstrapping(),
        }
    }
}

/// What the UI is allowed to see of the session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
    pub current_user: Option<User>,
    pub is_bootstrapping: bool,
}

impl SessionSnapshot {
    pub fn is_signed_in(&self) -> bool {
        self.current_user.is_some()
    }
}
