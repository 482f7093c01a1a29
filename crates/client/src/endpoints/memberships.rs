//! Group membership update endpoint.

use reqwest::{Client, Method};
use serde_json::json;
use tracing::{info, warn};

use crate::endpoints::request::execute_request;
use crate::error::Result;
use crate::models::UpdateMembershipRole;

/// Build the relative path of a member's membership resource.
pub fn membership_path(group_id: u64, user_id: u64) -> String {
    format!("groups/{}/memberships/{}", group_id, user_id)
}

/// Point a member's membership at the given role.
///
/// Succeeds only when the remote service answers with exactly HTTP 200; the
/// response body is ignored.
pub async fn update_membership_role(
    client: &Client,
    base_url: &str,
    api_key: &str,
    group_id: u64,
    user_id: u64,
    role_id: u64,
) -> Result<()> {
    let path = membership_path(group_id, user_id);
    let body = json!(UpdateMembershipRole::new(group_id, role_id));

    let result = execute_request(
        client,
        base_url,
        api_key,
        &path,
        None,
        Method::PATCH,
        Some(&body),
    )
    .await?;

    if !result.is_ok() {
        warn!(
            group_id,
            user_id,
            role_id,
            status = result.status_code,
            "Membership update rejected"
        );
        return Err(result.into_api_error(&path));
    }

    info!(group_id, user_id, role_id, "Membership role updated");
    Ok(())
}
