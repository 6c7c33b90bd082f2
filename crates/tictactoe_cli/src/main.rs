//! Tic-tac-toe terminal host.

use anyhow::Result;
use clap::Parser;
use std::io;
use tictactoe_cli::{Cli, Host, HostConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => HostConfig::from_file(path)?,
        None => HostConfig::default(),
    };
    if let Some(mark) = cli.first {
        config = config.with_starting_mark(mark);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    debug!(?config, "Configuration resolved");
    info!(starting_mark = %config.starting_mark(), "Starting tic-tac-toe");

    let stdin = io::stdin();
    let mut host = Host::new(&config, io::stdout());
    let ledger = host.run(stdin.lock(), cli.rounds)?;

    if cli.json {
        println!("{}", serde_json::to_string(&ledger)?);
    }

    Ok(())
}
