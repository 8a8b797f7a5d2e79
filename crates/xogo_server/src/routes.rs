//! HTTP routes.
//!
//! Handlers hold no game state. Every request carries the full game and
//! every response returns the updated one.

use crate::actions::Links;
use crate::envelope::{GameEnvelope, parse_game};
use crate::error::{ApiError, ApiErrorKind};
use axum::body::{Body, Bytes};
use axum::extract::{Path, State};
use axum::http::Request;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::{debug, info, instrument};
use xogo_tictactoe::{Game, MarkOutcome, Position};

/// Shared, read-only handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    links: Arc<Links>,
}

impl AppState {
    /// Creates handler state publishing affordances under `links`.
    pub fn new(links: Links) -> Self {
        Self {
            links: Arc::new(links),
        }
    }
}

/// Builds the application router.
///
/// - `GET|POST /new`: fresh game
/// - `POST /mark/{square}`: mark a square on the posted game
#[instrument(skip(links), fields(base_url = %links.base_url()))]
pub fn router(links: Links) -> Router {
    info!("Building router");
    Router::new()
        .route("/new", get(new_game).post(new_game))
        .route("/mark/{square}", post(mark_square))
        .layer(ServiceBuilder::new().map_request(|req: Request<Body>| {
            info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
            req
        }))
        .with_state(AppState::new(links))
}

/// Starts a new game.
#[instrument(skip(state))]
async fn new_game(State(state): State<AppState>) -> Json<GameEnvelope> {
    debug!("Creating new game");
    Json(GameEnvelope::new(Game::new(), &state.links))
}

/// Marks `square` on the game carried in the body.
#[instrument(skip(state, body))]
async fn mark_square(
    State(state): State<AppState>,
    Path(segment): Path<String>,
    body: Bytes,
) -> Result<Json<GameEnvelope>, ApiError> {
    let square = parse_square(&segment)?;
    let pos = Position::from_index(square)
        .ok_or_else(|| ApiError::new(ApiErrorKind::UnknownSquare(segment.clone())))?;
    let mut game = parse_game(&body)?;

    let outcome = game.mark(pos);
    match outcome {
        MarkOutcome::Won(winner) => info!(square, ?winner, "Game won"),
        MarkOutcome::Placed(_) if game.grid().is_full() => {
            info!(square, "Board full with no winner")
        }
        _ => debug!(square, %outcome, "Mark applied"),
    }

    Ok(Json(GameEnvelope::new(game, &state.links)))
}

/// Parses a `/mark/{square}` segment. Anything but a plain index is unknown.
fn parse_square(segment: &str) -> Result<usize, ApiError> {
    segment
        .parse()
        .map_err(|_| ApiError::new(ApiErrorKind::UnknownSquare(segment.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_square() {
        assert_eq!(parse_square("4").expect("index"), 4);
        for bad in ["center", "-1", "99999999999999999999999", ""] {
            let err = parse_square(bad).unwrap_err();
            assert_eq!(err.kind, ApiErrorKind::UnknownSquare(bad.to_string()));
        }
    }
}
