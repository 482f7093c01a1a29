//! URL encoding utilities for query string values.
//!
//! Page tokens are opaque and may contain characters with special meaning in
//! a query string (`&`, `=`, `+`, `/`), so they are percent-encoded before
//! being appended.
//!
//! # Example
//!
//! ```
//! use groups_client::endpoints::url_encoding::encode_query_component;
//!
//! assert_eq!(encode_query_component("a+b/c=="), "a%2Bb%2Fc%3D%3D");
//! ```

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters that must be percent-encoded in a query component.
///
/// Everything except ASCII alphanumerics and the unreserved marks
/// `- _ . ! ~ * ' ( )`.
pub const QUERY_COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string for use as a single query parameter value.
pub fn encode_query_component(value: &str) -> String {
    utf8_percent_encode(value, QUERY_COMPONENT_ENCODE_SET).to_string()
}
