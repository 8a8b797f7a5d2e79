//! Command-line interface for xogo.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// xogo - stateless tic-tac-toe over HTTP
#[derive(Parser, Debug)]
#[command(name = "xogo")]
#[command(about = "Stateless tic-tac-toe server speaking JSON with hyperlinks", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Public URL prefix used in affordance links
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Play squares (0-8) on a fresh game and print the result
    Replay {
        /// Squares in play order
        squares: Vec<usize>,

        /// Public URL prefix used in affordance links
        #[arg(long, default_value = "http://localhost:8080")]
        base_url: String,
    },
}
