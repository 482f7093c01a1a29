//! Group membership request bodies.

use serde::Serialize;

/// Body of a membership update that points the member at a new role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateMembershipRole {
    /// Full resource path of the role, `groups/{groupId}/roles/{roleId}`.
    pub role: String,
}

impl UpdateMembershipRole {
    pub fn new(group_id: u64, role_id: u64) -> Self {
        Self {
            role: format!("groups/{}/roles/{}", group_id, role_id),
        }
    }
}
