//! Data models for group API responses and request bodies.

pub mod memberships;
pub mod roles;

pub use memberships::UpdateMembershipRole;
pub use roles::{GroupRole, GroupRoleListResponse};
