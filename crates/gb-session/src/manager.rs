use crate::{
    BootstrapOutcome, SessionError, SessionObserver, SessionObservers, SessionResult,
    SubscriptionId,
};

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use gb_client::{AccountApi, ClientError, CredentialChannel};
use gb_core::{
    AvatarUpload, Credentials, ProfileUpdate, Session, SessionSnapshot, SessionState, User,
};
use gb_store::{PersistentStore, SessionRecordStore};
use log::{debug, info, warn};

/// Owns the session state and drives its transitions.
///
/// ```text
/// Bootstrapping --bootstrap--> Authenticated | Unauthenticated
/// Unauthenticated --sign_in--> Authenticated
/// Authenticated --sign_in--> Authenticated (replaces the session)
/// Authenticated --update_user--> Authenticated (token kept)
/// any --sign_out--> Unauthenticated
/// ```
///
/// The state lock is never held across an await. Observers are notified after
/// the credential channel has been updated for the new state.
pub struct AuthSessionManager {
    records: SessionRecordStore,
    api: Arc<dyn AccountApi>,
    credentials: CredentialChannel,
    state: RwLock<SessionState>,
    observers: SessionObservers,
}

impl AuthSessionManager {
    pub fn new(
        store: Arc<dyn PersistentStore>,
        api: Arc<dyn AccountApi>,
        credentials: CredentialChannel,
    ) -> Self {
        Self {
            records: SessionRecordStore::new(store),
            api,
            credentials,
            state: RwLock::new(SessionState::Bootstrapping),
            observers: SessionObservers::new(),
        }
    }

    // =========================================================================
    // State access
    // =========================================================================

    pub fn state(&self) -> SessionState {
        self.read_state().clone()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.read_state().snapshot()
    }

    pub fn current_user(&self) -> Option<User> {
        self.read_state().user().cloned()
    }

    pub fn is_bootstrapping(&self) -> bool {
        self.read_state().is_bootstrapping()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read_state().is_authenticated()
    }

    // =========================================================================
    // Observers
    // =========================================================================

    /// Registers `observer` and immediately hands it the current snapshot.
    pub fn subscribe(&self, observer: Arc<dyn SessionObserver>) -> SubscriptionId {
        let id = self.observers.subscribe(observer.clone());
        observer.on_session_changed(&self.snapshot());
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Restores the persisted session, once. Never fails: an unreadable or
    /// partial record leaves the manager `Unauthenticated`.
    pub async fn bootstrap(&self) -> BootstrapOutcome {
        if !self.is_bootstrapping() {
            debug!("Bootstrap requested again; ignoring");
            return BootstrapOutcome::AlreadyBootstrapped;
        }

        let (restored, outcome) = match self.records.read_session_record().await {
            Ok(Some(session)) => (Some(session), BootstrapOutcome::Restored),
            Ok(None) => (None, BootstrapOutcome::NoSession),
            Err(e) => {
                warn!("Stored session unusable, starting signed out: {e}");
                (None, BootstrapOutcome::Degraded(SessionError::from_read(e)))
            }
        };

        {
            let mut state = self.write_state();
            if !state.is_bootstrapping() {
                return BootstrapOutcome::AlreadyBootstrapped;
            }

            *state = match restored {
                Some(session) => {
                    self.credentials.set_token(&session.token);
                    info!("Restored session for user {}", session.user.id);
                    SessionState::Authenticated(session)
                }
                None => {
                    info!("No stored session; signed out");
                    SessionState::Unauthenticated
                }
            };
        }

        self.notify();
        outcome
    }

    /// Signs in against `POST /sessions`, replacing any current session.
    ///
    /// On failure nothing changes: not the state, not the header, not the
    /// persisted record.
    pub async fn sign_in(&self, email: &str, password: &str) -> SessionResult<()> {
        self.ensure_ready()?;

        let credentials = Credentials::new(email, password);
        let session = match self.api.create_session(&credentials).await {
            Ok(session) => session,
            Err(e) => {
                warn!("Sign-in rejected: {e}");
                return Err(SessionError::auth_endpoint(e));
            }
        };

        if session.token.is_empty() {
            warn!("Sign-in response carried an empty token");
            return Err(SessionError::auth_endpoint(ClientError::invalid_response(
                "session token is empty",
            )));
        }

        if let Err(e) = self.records.write_session_record(&session).await {
            warn!("Sign-in succeeded but session could not be persisted; rolling back: {e}");
            return Err(SessionError::storage_write(e));
        }

        let user_id = session.user.id.clone();
        {
            let mut state = self.write_state();
            self.credentials.set_token(&session.token);
            *state = SessionState::Authenticated(session);
        }
        self.notify();

        info!("Signed in as user {user_id}");
        Ok(())
    }

    /// Drops the session. Cannot fail: the header and in-memory state are
    /// cleared before storage is touched, and a storage error is only logged.
    pub async fn sign_out(&self) {
        self.credentials.clear();
        *self.write_state() = SessionState::Unauthenticated;

        if let Err(e) = self.records.clear_session_record().await {
            warn!("Failed to remove stored session (ignored): {e}");
        }

        self.notify();
        info!("Signed out");
    }

    /// Replaces the signed-in user, keeping the token.
    ///
    /// The whole record is rewritten with the in-memory token, so a store that
    /// lost its token key (e.g. a corrupted file moved aside) gets it back.
    pub async fn update_user(&self, user: User) -> SessionResult<()> {
        self.ensure_ready()?;

        let token = self
            .read_state()
            .token()
            .map(String::from)
            .ok_or_else(SessionError::not_authenticated)?;

        let record = Session::new(token.clone(), user.clone());
        self.records
            .write_session_record(&record)
            .await
            .map_err(SessionError::storage_write)?;

        let applied = {
            let mut state = self.write_state();
            match &mut *state {
                SessionState::Authenticated(session) if session.token == token => {
                    session.user = user;
                    true
                }
                _ => false,
            }
        };

        if !applied {
            warn!("Session changed while updating user; restoring stored record");
            self.reconcile_record().await;
            return Err(SessionError::not_authenticated());
        }

        self.notify();
        debug!("Updated stored user");
        Ok(())
    }

    /// `PUT /profile`, then adopts the returned user.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> SessionResult<User> {
        self.ensure_authenticated()?;

        let user = self
            .api
            .update_profile(update)
            .await
            .map_err(SessionError::profile_endpoint)?;

        self.update_user(user.clone()).await?;
        Ok(user)
    }

    /// `PATCH /users/avatar`, then adopts the returned user.
    pub async fn update_avatar(&self, upload: &AvatarUpload) -> SessionResult<User> {
        self.ensure_authenticated()?;

        let user = self
            .api
            .update_avatar(upload)
            .await
            .map_err(SessionError::profile_endpoint)?;

        self.update_user(user.clone()).await?;
        Ok(user)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn ensure_ready(&self) -> SessionResult<()> {
        if self.is_bootstrapping() {
            return Err(SessionError::not_ready());
        }
        Ok(())
    }

    fn ensure_authenticated(&self) -> SessionResult<()> {
        self.ensure_ready()?;
        if !self.is_authenticated() {
            return Err(SessionError::not_authenticated());
        }
        Ok(())
    }

    /// Rewrites the persisted record from the in-memory state.
    async fn reconcile_record(&self) {
        let session: Option<Session> = self.read_state().session().cloned();

        let result = match session {
            Some(ref session) => self.records.write_session_record(session).await,
            None => self.records.clear_session_record().await,
        };

        if let Err(e) = result {
            warn!("Failed to reconcile stored session: {e}");
        }
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        let notified = self.observers.notify(&snapshot);
        debug!(
            "Session is {} ({} observers notified)",
            self.read_state().as_str(),
            notified
        );
    }

    fn read_state(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
