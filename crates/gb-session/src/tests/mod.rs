
use crate::AuthSessionManager;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gb_client::{AccountApi, ClientError, ClientResult, CredentialChannel};
use gb_core::{AvatarUpload, Credentials, ProfileUpdate, Session, SessionSnapshot, User};
use gb_store::{MemoryStore, PersistentStore, StoreError, StoreResult, TOKEN_KEY, USER_KEY};
use tokio::sync::Notify;

pub(crate) const ANA_JSON: &str = r#"{"id":"1","name":"Ana","email":"a@b.com","avatar_url":""}"#;

pub(crate) fn ana() -> User {
    User::new("1", "Ana", "a@b.com").with_avatar_url("")
}

pub(crate) fn stored_ana() -> Arc<TestStore> {
    Arc::new(TestStore::with_entries([
        (TOKEN_KEY, "tok123"),
        (USER_KEY, ANA_JSON),
    ]))
}

/// Canned account API. `None` answers are server errors.
#[derive(Default)]
pub(crate) struct StubApi {
    pub(crate) session: Option<Session>,
    pub(crate) profile_user: Option<User>,
    pub(crate) calls: AtomicUsize,
}

impl StubApi {
    pub(crate) fn signing_in_as(token: &str, user: User) -> Self {
        Self {
            session: Some(Session::new(token, user)),
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccountApi for StubApi {
    async fn create_session(&self, _credentials: &Credentials) -> ClientResult<Session> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.session.clone().ok_or_else(|| {
            ClientError::api_error(401, "Incorrect email/password combination.")
        })
    }

    async fn update_profile(&self, _update: &ProfileUpdate) -> ClientResult<User> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.profile_user
            .clone()
            .ok_or_else(|| ClientError::api_error(500, "Internal server error"))
    }

    async fn update_avatar(&self, _upload: &AvatarUpload) -> ClientResult<User> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.profile_user
            .clone()
            .ok_or_else(|| ClientError::api_error(500, "Internal server error"))
    }
}

/// MemoryStore with switchable failures and a gate that parks writes.
#[derive(Default)]
pub(crate) struct TestStore {
    inner: MemoryStore,
    pub(crate) fail_reads: AtomicBool,
    pub(crate) fail_writes: AtomicBool,
    pub(crate) fail_removes: AtomicBool,
    pub(crate) hold_writes: AtomicBool,
    pub(crate) write_entered: Notify,
    pub(crate) write_released: Notify,
}

impl TestStore {
    pub(crate) fn with_entries<K: Into<String>, V: Into<String>>(
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        Self {
            inner: MemoryStore::with_entries(entries),
            ..Self::default()
        }
    }

    pub(crate) async fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key).await
    }

    fn medium_error() -> StoreError {
        StoreError::write(PathBuf::from("memory"), std::io::Error::other("disk full"))
    }
}

#[async_trait]
impl PersistentStore for TestStore {
    async fn get_many(&self, keys: &[&str]) -> StoreResult<HashMap<String, Option<String>>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::read(
                PathBuf::from("memory"),
                std::io::Error::other("locked"),
            ));
        }
        self.inner.get_many(keys).await
    }

    async fn set_many(&self, entries: &[(&str, &str)]) -> StoreResult<()> {
        if self.hold_writes.swap(false, Ordering::SeqCst) {
            self.write_entered.notify_one();
            self.write_released.notified().await;
        }
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::medium_error());
        }
        self.inner.set_many(entries).await
    }

    async fn remove_many(&self, keys: &[&str]) -> StoreResult<()> {
        if self.fail_removes.load(Ordering::SeqCst) {
            return Err(Self::medium_error());
        }
        self.inner.remove_many(keys).await
    }
}

pub(crate) fn manager_with(
    store: Arc<TestStore>,
    api: Arc<StubApi>,
) -> (Arc<AuthSessionManager>, CredentialChannel) {
    let channel = CredentialChannel::new();
    let manager = AuthSessionManager::new(store, api, channel.clone());
    (Arc::new(manager), channel)
}

/// Observer that keeps every snapshot it receives.
pub(crate) fn recorder() -> (
    Arc<dyn crate::SessionObserver>,
    Arc<Mutex<Vec<SessionSnapshot>>>,
) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let observer: Arc<dyn crate::SessionObserver> = Arc::new(move |snapshot: &SessionSnapshot| {
        sink.lock().unwrap().push(snapshot.clone());
    });
    (observer, seen)
}
