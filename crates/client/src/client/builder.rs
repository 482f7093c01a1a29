//! Client builder for constructing [`GroupClient`] instances.
//!
//! # Invariants
//! - An API key is required and must not be blank
//! - The base URL defaults to the public cloud API and is normalized to have
//!   no trailing slashes
//! - The HTTP client keeps no idle connections, so each connection lives only
//!   as long as its request

use reqwest::Url;
use secrecy::{ExposeSecret, SecretString};

use crate::client::GroupClient;
use crate::error::{ClientError, Result};
use groups_config::Config;
use groups_config::constants::DEFAULT_BASE_URL;

/// Builder for creating a new [`GroupClient`].
///
/// # Example
///
/// ```rust,ignore
/// use groups_client::GroupClient;
/// use secrecy::SecretString;
///
/// let client = GroupClient::builder()
///     .api_key(SecretString::new("my-key".to_string().into()))
///     .base_url("http://localhost:8080/cloud/v2".to_string())
///     .build()?;
/// ```
#[derive(Default)]
pub struct GroupClientBuilder {
    base_url: Option<String>,
    api_key: Option<SecretString>,
}

impl GroupClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL, e.g. `https://apis.roblox.com/cloud/v2`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the API key sent with every request.
    pub fn api_key(mut self, api_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Create a client builder from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.base_url.clone());
        self.api_key = Some(config.api_key.clone());
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`GroupClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingApiKey`] if no non-blank key was provided.
    /// Returns [`ClientError::InvalidUrl`] if the base URL does not parse.
    /// Returns `ClientError::Http` if the HTTP client fails to build.
    pub fn build(self) -> Result<GroupClient> {
        let api_key = self
            .api_key
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or(ClientError::MissingApiKey)?;

        let base_url = Self::normalize_base_url(
            self.base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        );
        Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let http = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(GroupClient {
            http,
            base_url,
            api_key,
        })
    }
}
