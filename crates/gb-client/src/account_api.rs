use crate::ClientResult;

use async_trait::async_trait;
use gb_core::{AvatarUpload, Credentials, ProfileUpdate, Session, User};

/// Remote account endpoints the session manager depends on.
#[async_trait]
pub trait AccountApi: Send + Sync {
    /// `POST /sessions`
    async fn create_session(&self, credentials: &Credentials) -> ClientResult<Session>;

    /// `PUT /profile`
    async fn update_profile(&self, update: &ProfileUpdate) -> ClientResult<User>;

    /// `PATCH /users/avatar`
    async fn update_avatar(&self, upload: &AvatarUpload) -> ClientResult<User>;
}
