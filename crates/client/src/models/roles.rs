//! Group role models.

use serde::{Deserialize, Serialize};

/// A role within a group.
///
/// Only `id` and `rank` are strictly typed. The descriptive fields are kept
/// when the remote service sends them and dropped when their type is unexpected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRole {
    #[serde(deserialize_with = "crate::serde_helpers::u64_from_string_or_number")]
    pub id: u64,
    pub rank: u8,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde_helpers::opt_string_lenient"
    )]
    pub path: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde_helpers::opt_string_lenient"
    )]
    pub display_name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde_helpers::opt_string_lenient"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde_helpers::opt_u64_lenient"
    )]
    pub member_count: Option<u64>,
}

impl GroupRole {
    /// A role with only its id and rank set.
    pub fn new(id: u64, rank: u8) -> Self {
        Self {
            id,
            rank,
            path: None,
            display_name: None,
            description: None,
            member_count: None,
        }
    }
}

/// One page of the group roles listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRoleListResponse {
    pub group_roles: Vec<GroupRole>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl GroupRoleListResponse {
    /// Token for the following page; empty tokens mean there is none.
    pub fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref().filter(|t| !t.is_empty())
    }
}
