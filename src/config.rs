//! Client configuration.

use crate::error::{Result, SeedanceError};
use crate::video::models::ModelTable;
use std::time::Duration;

/// Default ModelArk endpoint (BytePlus, Asia-Pacific).
pub const DEFAULT_BASE_URL: &str = "https://ark.ap-southeast.bytepluses.com/api/v3";
/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "ARK_API_KEY";
/// Environment variable holding the base URL.
pub const BASE_URL_ENV: &str = "ARK_BASE_URL";

/// Everything a [`SeedanceClient`](crate::SeedanceClient) needs. Read-only once built.
#[derive(Clone)]
pub struct ClientConfig {
    /// ModelArk API key.
    pub api_key: String,
    /// API base URL, without trailing slash.
    pub base_url: String,
    /// Logical model → wire id table.
    pub models: ModelTable,
    /// Delay between status polls.
    pub poll_interval: Duration,
    /// Wall-clock budget for [`generate`](crate::SeedanceClient::generate).
    pub timeout: Duration,
    /// Timeout of each individual HTTP call.
    pub request_timeout: Duration,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.masked_api_key())
            .field("base_url", &self.base_url)
            .field("models", &self.models)
            .field("poll_interval", &self.poll_interval)
            .field("timeout", &self.timeout)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Creates a new `ClientConfigBuilder`.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the API key with all but its last four characters hidden.
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{tail}", "*".repeat(20))
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    models: Option<ModelTable>,
    poll_interval: Duration,
    timeout: Duration,
    request_timeout: Duration,
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            models: None,
            poll_interval: Duration::from_secs(3),
            timeout: Duration::from_secs(180),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfigBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key. Falls back to `ARK_API_KEY` env var.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the base URL. Falls back to `ARK_BASE_URL`, then [`DEFAULT_BASE_URL`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the model table. Defaults to [`ModelTable::from_env`].
    pub fn models(mut self, models: ModelTable) -> Self {
        self.models = Some(models);
        self
    }

    /// Sets the polling interval.
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Sets the maximum time to wait for generation.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the timeout of each HTTP call.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Builds the configuration, resolving env fallbacks.
    pub fn build(self) -> Result<ClientConfig> {
        let api_key = self
            .api_key
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                SeedanceError::Config(format!("{API_KEY_ENV} not set and no API key provided"))
            })?;

        let base_url = self
            .base_url
            .or_else(|| std::env::var(BASE_URL_ENV).ok())
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(SeedanceError::Config(format!(
                "base URL must start with http:// or https://, got {base_url}"
            )));
        }

        if self.poll_interval.is_zero() {
            return Err(SeedanceError::Config("poll interval must be non-zero".into()));
        }

        Ok(ClientConfig {
            api_key,
            base_url,
            models: self.models.unwrap_or_else(ModelTable::from_env),
            poll_interval: self.poll_interval,
            timeout: self.timeout,
            request_timeout: self.request_timeout,
        })
    }
}
