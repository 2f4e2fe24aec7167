#![allow(dead_code)]

use gb_client::{ApiClient, CredentialChannel};
use gb_session::AuthSessionManager;
use gb_store::FileStore;

use std::path::Path;
use std::sync::Arc;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

pub struct App {
    pub manager: Arc<AuthSessionManager>,
    pub api: Arc<ApiClient>,
    pub channel: CredentialChannel,
}

/// Wires the session core the way the app does at process start.
pub fn start_app(server: &MockServer, session_file: &Path) -> App {
    let channel = CredentialChannel::new();
    let api = Arc::new(ApiClient::new(&server.uri(), channel.clone()));
    let store = Arc::new(FileStore::new(session_file));
    let manager = Arc::new(AuthSessionManager::new(store, api.clone(), channel.clone()));

    App {
        manager,
        api,
        channel,
    }
}

pub fn ana_json() -> serde_json::Value {
    json!({ "id": "1", "name": "Ana", "email": "a@b.com", "avatar_url": "" })
}

pub async fn mount_sign_in(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/sessions"))
        .and(body_json(json!({ "email": "a@b.com", "password": "pw" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "tok123",
            "user": ana_json()
        })))
        .mount(server)
        .await;
}
