use crate::{PersistentStore, StoreError, StoreResult};

use std::sync::Arc;

use gb_core::{Session, User};
use log::{debug, warn};

/// Raw bearer token.
pub const TOKEN_KEY: &str = "session.token";
/// JSON-encoded [`User`].
pub const USER_KEY: &str = "session.user";

/// The persisted session: token and user, always written and removed together.
#[derive(Clone)]
pub struct SessionRecordStore {
    store: Arc<dyn PersistentStore>,
}

impl SessionRecordStore {
    pub fn new(store: Arc<dyn PersistentStore>) -> Self {
        Self { store }
    }

    /// Returns the stored session, or `None` unless both keys hold a value.
    ///
    /// A half-written record (one key without the other) reads as no session.
    pub async fn read_session_record(&self) -> StoreResult<Option<Session>> {
        let mut values = self.store.get_many(&[TOKEN_KEY, USER_KEY]).await?;

        let token = values
            .remove(TOKEN_KEY)
            .flatten()
            .filter(|v| !v.is_empty());
        let user = values.remove(USER_KEY).flatten().filter(|v| !v.is_empty());

        match (token, user) {
            (Some(token), Some(user_json)) => {
                let user: User = serde_json::from_str(&user_json)
                    .map_err(|e| StoreError::deserialization(USER_KEY, e))?;
                Ok(Some(Session::new(token, user)))
            }
            (None, None) => Ok(None),
            (token, user) => {
                warn!(
                    "Ignoring partial session record (token present: {}, user present: {})",
                    token.is_some(),
                    user.is_some()
                );
                Ok(None)
            }
        }
    }

    pub async fn write_session_record(&self, session: &Session) -> StoreResult<()> {
        let user_json = serde_json::to_string(&session.user)?;
        self.store
            .set_many(&[(TOKEN_KEY, session.token.as_str()), (USER_KEY, user_json.as_str())])
            .await?;

        debug!("Persisted session record for user {}", session.user.id);
        Ok(())
    }

    pub async fn clear_session_record(&self) -> StoreResult<()> {
        self.store.remove_many(&[TOKEN_KEY, USER_KEY]).await?;

        debug!("Cleared session record");
        Ok(())
    }
}
