//! Request executor shared by every endpoint.
//!
//! Invariants:
//! - Every request carries the API key header and a JSON content type.
//! - Caller-supplied headers are merged last and replace a default header of
//!   the same name.
//! - Response bodies are parsed as JSON regardless of status; anything that
//!   does not parse (or is JSON `null`) becomes `None` instead of an error.
//! - No retries: one call, one network round trip.

use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::debug;

use crate::error::{ClientError, Result};
use groups_config::constants::API_KEY_HEADER;

/// Status code and parsed body of one API call.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestResult {
    pub status_code: u16,
    pub body: Option<Value>,
}

impl RequestResult {
    /// Whether the call returned exactly HTTP 200.
    pub fn is_ok(&self) -> bool {
        self.status_code == 200
    }

    /// Convert a rejected call into an [`ClientError::ApiError`].
    pub fn into_api_error(self, path: &str) -> ClientError {
        let message = match self.body {
            Some(body) => body
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| body.to_string()),
            None => "empty or non-JSON response body".to_string(),
        };

        ClientError::ApiError {
            status: self.status_code,
            path: path.to_string(),
            message,
        }
    }
}

/// Execute a single request against `base_url`.
///
/// # Arguments
///
/// * `path` - Path relative to the base URL, including any query string
/// * `extra_headers` - Headers merged over the defaults
/// * `method` - HTTP method (`GET`, `POST`, `PATCH`)
/// * `body` - Optional value sent as the JSON payload
///
/// # Errors
///
/// Returns [`ClientError::Http`] only for transport failures. Non-200
/// statuses are reported through [`RequestResult::status_code`].
pub async fn execute_request(
    client: &Client,
    base_url: &str,
    api_key: &str,
    path: &str,
    extra_headers: Option<HeaderMap>,
    method: Method,
    body: Option<&Value>,
) -> Result<RequestResult> {
    let url = format!("{}/{}", base_url, path.trim_start_matches('/'));

    let mut builder = client
        .request(method.clone(), &url)
        .header(API_KEY_HEADER, api_key)
        .header(CONTENT_TYPE, "application/json");

    if let Some(headers) = extra_headers {
        builder = builder.headers(headers);
    }

    if let Some(body) = body {
        builder = builder.json(body);
    }

    let response = builder.send().await?;
    let status_code = response.status().as_u16();
    let bytes = response.bytes().await?;
    let body = parse_body(&bytes);

    debug!(
        method = %method,
        path = path,
        status = status_code,
        has_body = body.is_some(),
        "Request completed"
    );

    Ok(RequestResult { status_code, body })
}

/// Parse a response body, mapping empty, invalid, and `null` bodies to `None`.
pub(crate) fn parse_body(bytes: &[u8]) -> Option<Value> {
    serde_json::from_slice::<Value>(bytes)
        .ok()
        .filter(|value| !value.is_null())
}
