//! Roles command implementation.
//!
//! Responsibilities:
//! - List every role of a group as JSON
//! - Resolve a rank to its role id
//!
//! Does NOT handle:
//! - Direct REST API calls (handled by client crate)

use anyhow::{Context, Result};
use clap::Subcommand;
use groups_client::GroupClient;
use tracing::info;

#[derive(Debug, Subcommand)]
pub enum RolesCommand {
    /// List every role of a group
    List {
        /// Group id
        #[arg(short, long)]
        group: u64,
    },
    /// Print the id of the role carrying a rank
    Resolve {
        /// Group id
        #[arg(short, long)]
        group: u64,
        /// Rank (0-255)
        #[arg(short, long)]
        rank: u8,
    },
}

pub async fn run(client: &GroupClient, command: RolesCommand) -> Result<()> {
    match command {
        RolesCommand::List { group } => {
            info!(group, "Listing roles");
            let roles = client
                .list_roles(group)
                .await
                .with_context(|| format!("Failed to list roles of group {}", group))?;
            println!("{}", serde_json::to_string_pretty(&roles)?);
        }
        RolesCommand::Resolve { group, rank } => {
            info!(group, rank, "Resolving rank");
            let role_id = client
                .role_id_for_rank(group, rank)
                .await
                .with_context(|| format!("Failed to resolve rank {} in group {}", rank, group))?;
            println!("{}", role_id);
        }
    }
    Ok(())
}
