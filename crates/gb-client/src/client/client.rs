use crate::{AccountApi, ClientError, ClientResult, CredentialChannel};

use async_trait::async_trait;
use gb_core::{AvatarUpload, Credentials, ProfileUpdate, Session, User};
use log::debug;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use reqwest::{Client as ReqwestClient, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;

const AVATAR_FIELD: &str = "avatar";

/// HTTP client for the GoBarber REST API
pub struct ApiClient {
    pub base_url: String,
    credentials: CredentialChannel,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:3333")
    /// * `credentials` - Channel whose token is sent as `Authorization: Bearer ...`
    pub fn new(base_url: &str, credentials: CredentialChannel) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            client: ReqwestClient::new(),
        }
    }

    /// Build a request, attaching the current bearer token if any
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(authorization) = self.credentials.authorization() {
            req = req.header(AUTHORIZATION, authorization);
        }

        req
    }

    /// Execute request and handle errors
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        // Error bodies look like {"status": "error", "message": "..."}
        if !status.is_success() {
            let message = serde_json::from_slice::<Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                });
            debug!("Request failed with status {}: {}", status.as_u16(), message);
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        Ok(serde_json::from_slice(&body)?)
    }

    /// GET any authenticated resource (appointments, providers, ...)
    pub async fn get(&self, path: &str) -> ClientResult<Value> {
        let req = self.request(Method::GET, path);
        self.execute(req).await
    }
}

#[async_trait]
impl AccountApi for ApiClient {
    async fn create_session(&self, credentials: &Credentials) -> ClientResult<Session> {
        let req = self.request(Method::POST, "/sessions").json(credentials);
        self.execute(req).await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> ClientResult<User> {
        let req = self.request(Method::PUT, "/profile").json(update);
        self.execute(req).await
    }

    async fn update_avatar(&self, upload: &AvatarUpload) -> ClientResult<User> {
        let part = Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(&upload.content_type)?;
        let form = Form::new().part(AVATAR_FIELD, part);

        let req = self.request(Method::PATCH, "/users/avatar").multipart(form);
        self.execute(req).await
    }
}
