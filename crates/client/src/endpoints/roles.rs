//! Group role listing endpoint.

use reqwest::{Client, Method};
use tracing::debug;

use crate::endpoints::request::execute_request;
use crate::endpoints::url_encoding::encode_query_component;
use crate::error::{ClientError, Result};
use crate::models::GroupRoleListResponse;
use groups_config::constants::ROLES_PAGE_SIZE;

/// Build the relative path for one page of a group's roles.
pub fn roles_page_path(group_id: u64, page_token: Option<&str>) -> String {
    let mut path = format!("groups/{}/roles?maxPageSize={}", group_id, ROLES_PAGE_SIZE);
    if let Some(token) = page_token {
        path.push_str("&pageToken=");
        path.push_str(&encode_query_component(token));
    }
    path
}

/// Fetch a single page of a group's roles.
///
/// # Errors
///
/// - [`ClientError::ApiError`] if the status is not 200
/// - [`ClientError::InvalidResponse`] if the body is absent or has no `groupRoles` array
pub async fn list_group_roles_page(
    client: &Client,
    base_url: &str,
    api_key: &str,
    group_id: u64,
    page_token: Option<&str>,
) -> Result<GroupRoleListResponse> {
    let path = roles_page_path(group_id, page_token);
    let result = execute_request(client, base_url, api_key, &path, None, Method::GET, None).await?;

    if !result.is_ok() {
        return Err(result.into_api_error(&path));
    }

    let body = result.body.ok_or_else(|| {
        ClientError::InvalidResponse("Missing body in group roles response".to_string())
    })?;

    let page: GroupRoleListResponse = serde_json::from_value(body).map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse group roles page: {}", e))
    })?;

    debug!(
        group_id,
        roles = page.group_roles.len(),
        has_next = page.next_page_token().is_some(),
        "Fetched group roles page"
    );

    Ok(page)
}
