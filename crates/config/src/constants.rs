//! Centralized constants for the groups client workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Remote API
// =============================================================================

/// Base URL of the group-management cloud API (version 2).
pub const DEFAULT_BASE_URL: &str = "https://apis.roblox.com/cloud/v2";

/// Header carrying the raw API key on every request.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Page size requested when listing group roles.
pub const ROLES_PAGE_SIZE: u32 = 20;

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "GROUPS_API_KEY";

/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "GROUPS_BASE_URL";

/// Environment variable that disables `.env` loading when set to `1` or `true`.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
