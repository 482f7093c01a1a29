//! Members command implementation.

use anyhow::{Context, Result};
use clap::Subcommand;
use groups_client::GroupClient;
use tracing::info;

#[derive(Debug, Subcommand)]
pub enum MembersCommand {
    /// Set a member's role by rank
    SetRank {
        /// Group id
        #[arg(short, long)]
        group: u64,
        /// User id of the member
        #[arg(short, long)]
        user: u64,
        /// Rank (0-255) of the role to assign
        #[arg(short, long)]
        rank: u8,
    },
}

pub async fn run(client: &GroupClient, command: MembersCommand) -> Result<()> {
    match command {
        MembersCommand::SetRank { group, user, rank } => {
            info!(group, user, rank, "Setting member rank");
            client
                .set_member_rank(group, user, rank)
                .await
                .with_context(|| {
                    format!("Failed to set rank {} for user {} in group {}", rank, user, group)
                })?;
            println!("Set rank {} for user {} in group {}", rank, user, group);
        }
    }
    Ok(())
}
