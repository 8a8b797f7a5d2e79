//! Stateless JSON-over-HTTP transport for the xogo tic-tac-toe engine.
//!
//! The server keeps nothing between requests. A client fetches `/new`,
//! then posts the game it holds to one of the `mark` URLs listed under
//! `validActions`, and receives the updated game with a fresh set of
//! affordances.
//!
//! # Example
//!
//! ```no_run
//! use xogo_server::{Links, ServerConfig, router};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServerConfig::default();
//! let app = router(Links::new(config.base_url()));
//! let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod actions;
mod config;
mod envelope;
mod error;
mod routes;

pub use actions::{Links, ValidActions};
pub use config::{ConfigError, ServerConfig};
pub use envelope::{GameEnvelope, parse_game};
pub use error::{ApiError, ApiErrorKind};
pub use routes::{AppState, router};
