//! Groups CLI - manage group member ranks from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute group API commands via the shared client library.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap defaults.
//! - Logs go to stderr; command output goes to stdout.

mod args;
mod commands;
mod dispatch;
mod error;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::ExitCode;
use groups_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run_command(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(ExitCode::from(&e).as_i32());
    }
}
