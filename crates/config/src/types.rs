//! Resolved configuration types.
//!
//! Invariants:
//! - `base_url` is an absolute http(s) URL without trailing slashes.
//! - `api_key` is never printed; `Debug` redacts it.

use secrecy::SecretString;
use std::fmt;

/// Configuration needed to construct a group client.
#[derive(Clone)]
pub struct Config {
    /// Base URL of the remote API.
    pub base_url: String,
    /// API key sent with every request.
    pub api_key: SecretString,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .finish()
    }
}
