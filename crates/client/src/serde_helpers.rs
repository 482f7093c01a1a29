//! Serde helpers for loosely typed JSON identifiers.
//!
//! The remote API encodes resource ids as decimal strings in some responses
//! and as JSON numbers in others; both are accepted here.
//!
//! Descriptive fields that nothing depends on use the lenient helpers, which
//! map an unexpected type to `None` instead of rejecting the whole document.

use serde::Deserialize;
use serde::de::Error as _;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum U64OrString {
    U64(u64),
    I64(i64),
    String(String),
}

pub fn u64_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = U64OrString::deserialize(deserializer)?;
    match value {
        U64OrString::U64(v) => Ok(v),
        U64OrString::I64(v) => u64::try_from(v).map_err(D::Error::custom),
        U64OrString::String(s) => s.trim().parse::<u64>().map_err(D::Error::custom),
    }
}

/// Optional text field; numbers and booleans are stringified, anything else is `None`.
pub fn opt_string_lenient<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Optional count field; a number or numeric string, anything else is `None`.
pub fn opt_u64_lenient<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_u64(),
        serde_json::Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    })
}
