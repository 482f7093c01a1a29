//! Request executor tests.
//!
//! # Invariants
//! - The API key and JSON content type headers are sent on every request
//! - Extra headers are merged in and replace defaults of the same name
//! - Non-200 statuses are returned as results, not errors
//! - Bodies that are not JSON are reported as `None`

mod common;

use common::*;
use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};

#[tokio::test]
async fn test_default_headers_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/groups/1/roles"))
        .and(header("x-api-key", TEST_API_KEY))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client
        .request("groups/1/roles", None, Method::GET, None)
        .await
        .unwrap();

    assert_eq!(result.status_code, 200);
    assert_eq!(result.body, Some(json!({"ok": true})));
}

#[tokio::test]
async fn test_extra_headers_are_merged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/groups/1/roles"))
        .and(header("x-api-key", TEST_API_KEY))
        .and(header("x-request-id", "req-42"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut headers = HeaderMap::new();
    headers.insert("x-request-id", HeaderValue::from_static("req-42"));

    let client = test_client(&mock_server);
    let result = client
        .request("groups/1/roles", Some(headers), Method::GET, None)
        .await
        .unwrap();

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_extra_header_replaces_default_of_same_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/groups/1/roles"))
        .and(header("x-api-key", "override-key"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut headers = HeaderMap::new();
    headers.insert("x-api-key", HeaderValue::from_static("override-key"));

    let client = test_client(&mock_server);
    let result = client
        .request("groups/1/roles", Some(headers), Method::GET, None)
        .await
        .unwrap();

    assert_eq!(result.status_code, 200);
}

#[tokio::test]
async fn test_body_serialized_as_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/groups/1/things"))
        .and(body_json(json!({"name": "thing", "count": 2})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "9"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let body = json!({"name": "thing", "count": 2});
    let result = client
        .request("groups/1/things", None, Method::POST, Some(&body))
        .await
        .unwrap();

    assert_eq!(result.status_code, 201);
    assert!(!result.is_ok());
    assert_eq!(result.body, Some(json!({"id": "9"})));
}

#[tokio::test]
async fn test_error_status_returned_with_parsed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/groups/1/roles"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"code": "NOT_FOUND", "message": "Group not found"})),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client
        .request("groups/1/roles", None, Method::GET, None)
        .await
        .unwrap();

    assert_eq!(result.status_code, 404);
    assert_eq!(result.body.unwrap()["message"], "Group not found");
}

#[tokio::test]
async fn test_non_json_body_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/groups/1/roles"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client
        .request("groups/1/roles", None, Method::GET, None)
        .await
        .unwrap();

    assert_eq!(result.status_code, 200);
    assert_eq!(result.body, None);
}

#[tokio::test]
async fn test_leading_slash_in_path_is_tolerated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/groups/1/roles"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client
        .request("/groups/1/roles", None, Method::GET, None)
        .await
        .unwrap();

    assert_eq!(result.status_code, 200);
}

#[tokio::test]
async fn test_connection_refused_is_http_error() {
    let client = GroupClient::builder()
        .base_url("http://127.0.0.1:1".to_string())
        .api_key(secrecy::SecretString::new(TEST_API_KEY.to_string().into()))
        .build()
        .unwrap();

    let result = client
        .request("groups/1/roles", None, Method::GET, None)
        .await;

    assert!(matches!(result, Err(ClientError::Http(_))));
}
