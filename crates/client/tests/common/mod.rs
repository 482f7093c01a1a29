//! Common test utilities for integration tests.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

#[allow(unused_imports)]
pub use groups_client::testing::load_fixture;
#[allow(unused_imports)]
pub use groups_client::{ClientError, GroupClient, GroupRole};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use secrecy::SecretString;

/// API key used by every test client.
#[allow(dead_code)]
pub const TEST_API_KEY: &str = "test-api-key";

/// Build a client pointed at the mock server.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> GroupClient {
    GroupClient::builder()
        .base_url(server.uri())
        .api_key(SecretString::new(TEST_API_KEY.to_string().into()))
        .build()
        .expect("test client should build")
}
