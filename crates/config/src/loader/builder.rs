//! Builder for assembling a [`Config`].
//!
//! Invariants:
//! - `load_dotenv()` is a no-op when `DOTENV_DISABLED` is `1` or `true`.
//! - The base URL falls back to [`DEFAULT_BASE_URL`] and is normalized without
//!   trailing slashes.
//! - An API key is required; blank keys are rejected.

use secrecy::{ExposeSecret, SecretString};

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{DEFAULT_BASE_URL, ENV_DOTENV_DISABLED};
use crate::types::Config;

/// Configuration loader that builds config from explicit values and the environment.
#[derive(Default)]
pub struct ConfigLoader {
    pub(super) base_url: Option<String>,
    pub(super) api_key: Option<SecretString>,
}

impl ConfigLoader {
    /// Create a new loader with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// Missing `.env` files are silently ignored.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DotenvParse` if the file has invalid syntax and
    /// `ConfigError::DotenvIo` if it exists but cannot be read.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            tracing::debug!("dotenv loading disabled");
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Set the API key explicitly. Takes precedence over `GROUPS_API_KEY`.
    pub fn with_api_key(mut self, api_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Set the base URL explicitly. Takes precedence over `GROUPS_BASE_URL`.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Fill any values not set explicitly from environment variables.
    pub fn from_env(mut self) -> Self {
        apply_env(&mut self);
        self
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingApiKey` when no non-blank key was provided
    /// and `ConfigError::InvalidValue` when the base URL is not an absolute
    /// http(s) URL.
    pub fn build(self) -> Result<Config, ConfigError> {
        let api_key = self
            .api_key
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = validate_and_normalize_base_url(
            self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
        )?;

        Ok(Config { base_url, api_key })
    }
}

/// Validate that a base URL is an absolute http(s) URL and strip trailing slashes.
fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "base_url".into(),
        message: format!("must be an absolute http(s) URL: {e}"),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: "host is required".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
