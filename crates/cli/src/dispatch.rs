//! Command dispatch: resolve configuration, build the client, run the command.

use anyhow::{Context, Result};
use groups_client::GroupClient;
use groups_config::{Config, ConfigLoader};
use secrecy::SecretString;

use crate::args::{Cli, Commands};
use crate::commands;

/// Build configuration with CLI flags taking precedence over the environment.
fn build_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new();

    if let Some(ref key) = cli.api_key {
        loader = loader.with_api_key(SecretString::new(key.clone().into()));
    }
    if let Some(ref url) = cli.base_url {
        loader = loader.with_base_url(url.clone());
    }

    Ok(loader.from_env().build()?)
}

pub async fn run_command(cli: Cli) -> Result<()> {
    let config = build_config(&cli)?;
    let client = GroupClient::builder()
        .from_config(&config)
        .build()
        .context("Failed to build client")?;

    tracing::debug!(base_url = client.base_url(), "Client ready");

    match cli.command {
        Commands::Roles { command } => commands::roles::run(&client, command).await,
        Commands::Members { command } => commands::members::run(&client, command).await,
    }
}
