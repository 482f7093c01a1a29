//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map client and configuration errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).

use groups_client::ClientError;
use groups_config::ConfigError;

/// Structured exit codes for the `groups` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Missing or rejected API key.
    AuthenticationFailed = 2,

    /// Network failure or unusable base URL.
    ConnectionError = 3,

    /// Group, member, or rank does not exist.
    NotFound = 4,

    /// The request or the response was malformed.
    ValidationError = 5,

    /// The API key lacks the required scope.
    PermissionDenied = 6,

    /// HTTP 429 Too Many Requests.
    RateLimited = 7,

    /// HTTP 502/503/504.
    ServiceUnavailable = 8,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::MissingApiKey => ExitCode::AuthenticationFailed,
            ClientError::Http(_) | ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::RankNotFound { .. } => ExitCode::NotFound,
            ClientError::InvalidResponse(_) => ExitCode::ValidationError,
            ClientError::ApiError { status, .. } => match status {
                400 => ExitCode::ValidationError,
                401 => ExitCode::AuthenticationFailed,
                403 => ExitCode::PermissionDenied,
                404 => ExitCode::NotFound,
                429 => ExitCode::RateLimited,
                502..=504 => ExitCode::ServiceUnavailable,
                _ => ExitCode::GeneralError,
            },
        }
    }
}

impl From<&anyhow::Error> for ExitCode {
    fn from(err: &anyhow::Error) -> Self {
        for cause in err.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return Self::from(client_err);
            }
            if let Some(ConfigError::MissingApiKey) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::AuthenticationFailed;
            }
        }
        ExitCode::GeneralError
    }
}
