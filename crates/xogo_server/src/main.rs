//! xogo - unified CLI
//!
//! Serves the stateless game API, or replays a game locally.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use xogo_server::{GameEnvelope, Links, ServerConfig, router};
use xogo_tictactoe::{Game, Position};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            config,
            host,
            port,
            base_url,
        } => run_server(config, host, port, base_url).await,
        Command::Replay { squares, base_url } => run_replay(&squares, &base_url),
    }
}

/// Run the HTTP game server
#[instrument(skip_all)]
async fn run_server(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
    base_url: Option<String>,
) -> Result<()> {
    let config = ServerConfig::load(config_path.as_deref())?
        .with_port_env(std::env::var("PORT").ok())?
        .with_overrides(host, port, base_url);

    let links = Links::new(config.base_url());
    info!(host = %config.host(), port = config.port(), base_url = %links.base_url(), "Starting xogo server");

    let app = router(links);
    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port()))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host(), config.port()))?;

    info!("Server ready at http://{}:{}/", config.host(), config.port());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Replay squares on a fresh game and print the board and response body
#[instrument]
fn run_replay(squares: &[usize], base_url: &str) -> Result<()> {
    let positions = squares
        .iter()
        .map(|&i| Position::from_index(i).with_context(|| format!("No such square: {}", i)))
        .collect::<Result<Vec<_>>>()?;

    let game = Game::replay(&positions);
    let envelope = GameEnvelope::new(game, &Links::new(base_url));

    println!("{}\n", game.grid().display());
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}
