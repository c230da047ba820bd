//! Command-line interface for noughts.

use clap::{Parser, Subcommand};

/// Noughts - hot-seat noughts and crosses
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Hot-seat noughts and crosses with terminal and web front ends", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game at the terminal
    Play,

    /// Serve the web board over HTTP
    Serve {
        /// Path to the configuration file
        #[arg(short, long, default_value = "noughts.toml")]
        config: std::path::PathBuf,

        /// Host to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,
    },
}
