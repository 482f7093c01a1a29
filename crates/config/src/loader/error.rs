//! Error types for configuration loading.
//!
//! Invariants:
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.
//! - Errors never include the API key.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("API key is required. Set GROUPS_API_KEY or pass --api-key.")]
    MissingApiKey,

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// Only the byte index of the parse failure is kept, not the line itself.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
