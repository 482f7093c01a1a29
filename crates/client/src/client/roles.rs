//! Role listing and rank resolution for [`GroupClient`].
//!
//! # What this module handles:
//! - Walking every page of a group's roles
//! - Resolving a rank number to the first matching role
//!
//! # Invariants
//! - Pages are requested one at a time, each with the previous page's token
//! - Any failed page aborts the operation; no partial list is returned
//! - Rank lookups stop fetching as soon as a page contains a match

use secrecy::ExposeSecret;
use tracing::debug;

use crate::client::GroupClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::GroupRole;

/// Cursor over the pages of one group's roles.
struct RolePages<'a> {
    client: &'a GroupClient,
    group_id: u64,
    next_token: Option<String>,
    finished: bool,
}

impl<'a> RolePages<'a> {
    fn new(client: &'a GroupClient, group_id: u64) -> Self {
        Self {
            client,
            group_id,
            next_token: None,
            finished: false,
        }
    }

    /// Fetch the next page, or `None` once the last page has been returned.
    async fn next_page(&mut self) -> Result<Option<Vec<GroupRole>>> {
        if self.finished {
            return Ok(None);
        }

        let page = endpoints::list_group_roles_page(
            &self.client.http,
            &self.client.base_url,
            self.client.api_key.expose_secret(),
            self.group_id,
            self.next_token.as_deref(),
        )
        .await?;

        self.next_token = page.next_page_token().map(str::to_string);
        self.finished = self.next_token.is_none();

        Ok(Some(page.group_roles))
    }
}

impl GroupClient {
    /// List every role of a group, following pagination to the end.
    ///
    /// Roles are returned in page order, preserving the order within each page.
    /// A group without roles yields an empty vector.
    pub async fn list_roles(&self, group_id: u64) -> Result<Vec<GroupRole>> {
        let mut pages = RolePages::new(self, group_id);
        let mut roles = Vec::new();

        while let Some(page) = pages.next_page().await? {
            roles.extend(page);
        }

        debug!(group_id, total = roles.len(), "Listed group roles");
        Ok(roles)
    }

    /// Find the first role, in page order, whose rank equals `rank`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::RankNotFound`] if no page contains the rank, or
    /// the error of the first page that failed.
    pub async fn find_role_by_rank(&self, group_id: u64, rank: u8) -> Result<GroupRole> {
        let mut pages = RolePages::new(self, group_id);

        while let Some(page) = pages.next_page().await? {
            if let Some(role) = page.into_iter().find(|role| role.rank == rank) {
                debug!(group_id, rank, role_id = role.id, "Resolved rank");
                return Ok(role);
            }
        }

        Err(ClientError::RankNotFound { group_id, rank })
    }

    /// Resolve a rank number to the id of the role carrying it.
    pub async fn role_id_for_rank(&self, group_id: u64, rank: u8) -> Result<u64> {
        self.find_role_by_rank(group_id, rank)
            .await
            .map(|role| role.id)
    }
}
