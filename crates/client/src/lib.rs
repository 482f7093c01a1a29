//! Group roles REST API client.
//!
//! This crate provides a small type-safe client for the group-management
//! cloud API (version 2). It authenticates with a static API key, lists a
//! group's roles across pages, resolves a rank number to a role id, and
//! updates a member's role by rank.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod serde_helpers;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::GroupClient;
pub use client::builder::GroupClientBuilder;
pub use endpoints::RequestResult;
pub use error::{ClientError, Result};
pub use models::{GroupRole, GroupRoleListResponse, UpdateMembershipRole};
