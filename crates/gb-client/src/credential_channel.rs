use std::sync::{Arc, PoisonError, RwLock};

/// Bearer token shared by every request the [`crate::ApiClient`] builds.
///
/// Clones share the same slot. Setting or clearing it takes effect for the
/// next request built, with no await in between.
#[derive(Clone, Default)]
pub struct CredentialChannel {
    token: Arc<RwLock<Option<String>>>,
}

impl CredentialChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_token(&self, token: &str) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
    }

    pub fn clear(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn has_token(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Value for the `Authorization` header, if a token is set.
    pub fn authorization(&self) -> Option<String> {
        self.token().map(|token| format!("Bearer {token}"))
    }
}

impl std::fmt::Debug for CredentialChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialChannel")
            .field("has_token", &self.has_token())
            .finish()
    }
}
