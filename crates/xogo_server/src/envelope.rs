//! Request and response bodies.

use crate::actions::{Links, ValidActions};
use crate::error::{ApiError, ApiErrorKind};
use serde::Serialize;
use tracing::{debug, instrument};
use xogo_tictactoe::Game;

/// Response body: the game plus what the client may do next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEnvelope {
    game_board: Game,
    valid_actions: ValidActions,
}

impl GameEnvelope {
    /// Wraps `game` with affordances for its legal moves.
    pub fn new(game: Game, links: &Links) -> Self {
        Self {
            valid_actions: links.valid_actions(&game),
            game_board: game,
        }
    }

    /// The game.
    pub fn game_board(&self) -> &Game {
        &self.game_board
    }

    /// Affordances for the game.
    pub fn valid_actions(&self) -> &ValidActions {
        &self.valid_actions
    }
}

/// Parses a request body into a game.
///
/// Accepts a previously returned envelope (`{"gameBoard": ..}`, other keys
/// ignored) or a bare game object.
#[instrument(skip(body), fields(len = body.len()))]
pub fn parse_game(body: &[u8]) -> Result<Game, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::new(ApiErrorKind::MissingBody));
    }

    let mut value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::new(ApiErrorKind::MalformedBody(e.to_string())))?;

    let value = match value.get_mut("gameBoard").map(serde_json::Value::take) {
        Some(board) => {
            debug!("Unwrapping gameBoard envelope");
            board
        }
        None => value,
    };

    serde_json::from_value(value)
        .map_err(|e| ApiError::new(ApiErrorKind::MalformedBody(e.to_string())))
}
