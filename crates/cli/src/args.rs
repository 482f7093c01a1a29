//! CLI argument definitions and parsing.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Parser)]
#[command(name = "groups")]
#[command(about = "Inspect group roles and set member ranks", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  groups roles list --group 1000\n  groups roles resolve --group 1000 --rank 50\n  groups members set-rank --group 1000 --user 555 --rank 50\n"
)]
pub struct Cli {
    /// API key sent with every request
    #[arg(short, long, global = true, env = "GROUPS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the group API (defaults to the public cloud API)
    #[arg(short, long, global = true, env = "GROUPS_BASE_URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect a group's roles
    Roles {
        #[command(subcommand)]
        command: commands::roles::RolesCommand,
    },
    /// Change group members
    Members {
        #[command(subcommand)]
        command: commands::members::MembersCommand,
    },
}
