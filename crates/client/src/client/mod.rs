//! Main group API client and API methods.
//!
//! This module provides the primary [`GroupClient`]. It holds the API key
//! and an HTTP client, both immutable after construction.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `roles`: Role listing and rank resolution
//! - `memberships`: Member role assignment
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Loading the API key from the environment (see `groups_config`)
//!
//! # Invariants
//! - Calls within one operation are issued strictly one after another
//! - No operation retries; the first failure aborts the whole operation

pub mod builder;

mod memberships;
mod roles;

use reqwest::Method;
use reqwest::header::HeaderMap;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::endpoints::{self, RequestResult};
use crate::error::Result;

/// Group API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use groups_client::GroupClient;
///
/// let client = GroupClient::new("my-api-key")?;
/// let roles = client.list_roles(1000).await?;
/// ```
///
/// Use [`GroupClient::builder()`] to point the client at another base URL.
#[derive(Debug, Clone)]
pub struct GroupClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_key: SecretString,
}

impl GroupClient {
    /// Create a client for the default base URL from a single API key.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError::MissingApiKey`] if the key is blank.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key: String = api_key.into();
        Self::builder()
            .api_key(SecretString::new(api_key.into()))
            .build()
    }

    /// Create a new client builder.
    pub fn builder() -> builder::GroupClientBuilder {
        builder::GroupClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a single request relative to the base URL.
    ///
    /// The API key and JSON content type headers are always attached.
    /// Non-200 statuses are returned, not raised.
    pub async fn request(
        &self,
        path: &str,
        extra_headers: Option<HeaderMap>,
        method: Method,
        body: Option<&Value>,
    ) -> Result<RequestResult> {
        endpoints::execute_request(
            &self.http,
            &self.base_url,
            self.api_key.expose_secret(),
            path,
            extra_headers,
            method,
            body,
        )
        .await
    }
}
