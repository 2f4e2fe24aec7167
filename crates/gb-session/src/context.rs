use crate::{
    AuthSessionManager, BootstrapOutcome, SessionObserver, SessionResult, SubscriptionId,
};

use std::sync::Arc;

use gb_core::{AvatarUpload, ProfileUpdate, SessionSnapshot, User};

/// The surface screens use: current user, bootstrapping flag and the session
/// operations. It never exposes the token.
#[derive(Clone)]
pub struct SessionContext {
    manager: Arc<AuthSessionManager>,
}

impl SessionContext {
    pub fn new(manager: Arc<AuthSessionManager>) -> Self {
        Self { manager }
    }

    pub fn current_user(&self) -> Option<User> {
        self.manager.current_user()
    }

    pub fn is_bootstrapping(&self) -> bool {
        self.manager.is_bootstrapping()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.manager.snapshot()
    }

    pub fn subscribe(&self, observer: Arc<dyn SessionObserver>) -> SubscriptionId {
        self.manager.subscribe(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.manager.unsubscribe(id)
    }

    pub async fn bootstrap(&self) -> BootstrapOutcome {
        self.manager.bootstrap().await
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> SessionResult<()> {
        self.manager.sign_in(email, password).await
    }

    pub async fn sign_out(&self) {
        self.manager.sign_out().await
    }

    pub async fn update_user(&self, user: User) -> SessionResult<()> {
        self.manager.update_user(user).await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> SessionResult<User> {
        self.manager.update_profile(update).await
    }

    pub async fn update_avatar(&self, upload: &AvatarUpload) -> SessionResult<User> {
        self.manager.update_avatar(upload).await
    }
}
