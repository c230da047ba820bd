//! Noughts - unified CLI.
//!
//! One binary, two front ends over the same engine.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use noughts::ServerConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play => {
            // Keep stdout prompts clean unless RUST_LOG says otherwise.
            init_tracing("warn");
            noughts::play()
        }
        Command::Serve { config, host, port } => {
            init_tracing("info");
            let config = ServerConfig::load_or_default(&config)?.merged(host, port);
            noughts::serve(config).await
        }
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}
