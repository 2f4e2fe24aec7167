use crate::{ConfigError, ConfigErrorResult, DEFAULT_API_BASE_URL};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Root of the GoBarber REST API, e.g. "https://api.gobarber.app"
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_API_BASE_URL),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let rest = self
            .base_url
            .strip_prefix("https://")
            .or_else(|| self.base_url.strip_prefix("http://"));

        match rest {
            Some(host) if !host.trim_matches('/').is_empty() => Ok(()),
            _ => Err(ConfigError::api(format!(
                "api.base_url must be an http(s) URL with a host, got '{}'",
                self.base_url
            ))),
        }
    }
}
