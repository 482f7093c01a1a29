//! Error types for the groups client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during group client operations.
///
/// Every public operation aborts on the first error; no partial results are
/// returned alongside an error.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure (connection, TLS, reading the response body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote API answered with a status other than 200.
    #[error("API error ({status}) at {path}: {message}")]
    ApiError {
        status: u16,
        path: String,
        message: String,
    },

    /// A 200 response whose body is missing or lacks an expected field.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Pagination finished without any role carrying the requested rank.
    #[error("No role with rank {rank} in group {group_id}")]
    RankNotFound { group_id: u64, rank: u8 },

    /// Invalid base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// No API key was supplied.
    #[error("API key is required")]
    MissingApiKey,
}

impl ClientError {
    /// Check whether this error came from the remote service rejecting a call.
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::ApiError { .. })
    }

    /// Check whether this error means the requested rank does not exist.
    pub fn is_rank_not_found(&self) -> bool {
        matches!(self, Self::RankNotFound { .. })
    }

    /// HTTP status of an API error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
