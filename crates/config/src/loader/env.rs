//! Environment variable parsing for configuration.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Values already set on the loader are not overwritten.

use secrecy::SecretString;

use super::builder::ConfigLoader;
use crate::constants::{ENV_API_KEY, ENV_BASE_URL};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub(crate) fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Fill unset loader fields from the environment.
pub fn apply_env(loader: &mut ConfigLoader) {
    if loader.api_key.is_none()
        && let Some(key) = env_var_or_none(ENV_API_KEY)
    {
        loader.api_key = Some(SecretString::new(key.into()));
    }
    if loader.base_url.is_none()
        && let Some(url) = env_var_or_none(ENV_BASE_URL)
    {
        loader.base_url = Some(url);
    }
}
