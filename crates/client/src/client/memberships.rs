//! Member role assignment for [`GroupClient`].

use secrecy::ExposeSecret;

use crate::client::GroupClient;
use crate::endpoints;
use crate::error::Result;

impl GroupClient {
    /// Set a member's role to the role carrying `rank`.
    ///
    /// The rank is resolved first; if that fails, no update is sent. The
    /// update counts as successful only when the remote service answers 200.
    pub async fn set_member_rank(&self, group_id: u64, user_id: u64, rank: u8) -> Result<()> {
        let role_id = self.role_id_for_rank(group_id, rank).await?;

        endpoints::update_membership_role(
            &self.http,
            &self.base_url,
            self.api_key.expose_secret(),
            group_id,
            user_id,
            role_id,
        )
        .await
    }
}
