//! Game state and the single "mark a square" transition.

use super::legal::LegalMoves;
use super::position::Position;
use super::rules;
use super::types::{Grid, GridError, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// What a call to [`Game::mark`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MarkOutcome {
    /// The square was marked and play continues.
    #[display("{} placed", _0)]
    Placed(Mark),
    /// The square was marked and completed a line.
    #[display("{} wins", _0)]
    Won(Mark),
    /// The square already held a mark; nothing changed.
    #[display("square occupied")]
    Occupied,
    /// The game was already decided; nothing changed.
    #[display("game over")]
    GameOver,
}

impl MarkOutcome {
    /// True if the game value was modified.
    pub fn changed(self) -> bool {
        matches!(self, MarkOutcome::Placed(_) | MarkOutcome::Won(_))
    }
}

/// Complete game state: the grid, whose turn it is, and the winner.
///
/// Exactly one of these holds:
/// - in progress: `winner` is `Empty` and `next_to_move` is not;
/// - decided: `winner` is set and `next_to_move` is `Empty`.
///
/// Serializes as `{"gameGrid": [..9], "nextMove": n, "winner": n, "pretty": ".."}`.
/// Deserialization rejects values that break the invariant above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "GameRecord", try_from = "GameRecord")]
pub struct Game {
    grid: Grid,
    next_to_move: Mark,
    winner: Mark,
}

impl Game {
    /// Creates a fresh game: empty grid, X to move.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            next_to_move: Mark::X,
            winner: Mark::Empty,
        }
    }

    /// Assembles a game from its parts, checking they agree with each other.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InconsistentState`] if the winner disagrees with
    /// the lines on the grid, or the turn slot contradicts the winner.
    #[instrument(level = "debug")]
    pub fn from_parts(grid: Grid, next_to_move: Mark, winner: Mark) -> Result<Self, GridError> {
        let line_winner = rules::check_winner(&grid).unwrap_or_default();
        if winner != line_winner {
            return Err(GridError::InconsistentState(format!(
                "winner is {:?} but the grid shows {:?}",
                winner, line_winner
            )));
        }
        if winner.is_empty() == next_to_move.is_empty() {
            return Err(GridError::InconsistentState(format!(
                "next move {:?} does not fit winner {:?}",
                next_to_move, winner
            )));
        }
        Ok(Self {
            grid,
            next_to_move,
            winner,
        })
    }

    /// Replays squares in order on a fresh game.
    ///
    /// Occupied squares and moves after a win are skipped, just as
    /// [`Game::mark`] skips them.
    #[instrument]
    pub fn replay(squares: &[Position]) -> Self {
        let mut game = Self::new();
        for &pos in squares {
            game.mark(pos);
        }
        game
    }

    /// Marks a square for the player whose turn it is.
    ///
    /// Marking an occupied square, or any square once the game is decided,
    /// leaves the game untouched. That is a rejection, not an error.
    #[instrument(skip(self), fields(next = ?self.next_to_move))]
    pub fn mark(&mut self, pos: Position) -> MarkOutcome {
        if self.is_decided() {
            debug!(winner = ?self.winner, "Game already decided, ignoring mark");
            return MarkOutcome::GameOver;
        }
        if !self.grid.is_empty(pos) {
            debug!(occupant = ?self.grid.get(pos), "Square occupied, ignoring mark");
            return MarkOutcome::Occupied;
        }

        let mover = self.next_to_move;
        self.grid.set(pos, mover);

        if rules::check_winner(&self.grid).is_some() {
            info!(winner = ?mover, "Line completed");
            self.winner = mover;
            self.next_to_move = Mark::Empty;
            return MarkOutcome::Won(mover);
        }

        self.next_to_move = mover.opponent();
        MarkOutcome::Placed(mover)
    }

    /// Squares that can still be marked. Empty once the game is decided.
    pub fn legal_moves(&self) -> LegalMoves {
        if self.is_decided() {
            return LegalMoves::NONE;
        }
        Position::ALL
            .into_iter()
            .filter(|&pos| self.grid.is_empty(pos))
            .collect()
    }

    /// True once a line has been completed.
    pub fn is_decided(&self) -> bool {
        !self.winner.is_empty()
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mark to play next, `Empty` once decided.
    pub fn next_to_move(&self) -> Mark {
        self.next_to_move
    }

    /// Winning mark, `Empty` until decided.
    pub fn winner(&self) -> Mark {
        self.winner
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Wire shape of a [`Game`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GameRecord {
    game_grid: Grid,
    next_move: Mark,
    winner: Mark,
    // Output only; clients may echo it back.
    #[serde(default, skip_deserializing)]
    pretty: String,
}

impl From<Game> for GameRecord {
    fn from(game: Game) -> Self {
        Self {
            game_grid: game.grid,
            next_move: game.next_to_move,
            winner: game.winner,
            pretty: game.grid.pretty(),
        }
    }
}

impl TryFrom<GameRecord> for Game {
    type Error = GridError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        Game::from_parts(record.game_grid, record.next_move, record.winner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.next_to_move(), Mark::X);
        assert_eq!(game.winner(), Mark::Empty);
        assert_eq!(game.legal_moves(), LegalMoves::ALL);
    }

    #[test]
    fn test_mark_alternates_turns() {
        let mut game = Game::new();
        assert_eq!(game.mark(Position::Center), MarkOutcome::Placed(Mark::X));
        assert_eq!(game.mark(Position::TopLeft), MarkOutcome::Placed(Mark::O));
        assert_eq!(game.next_to_move(), Mark::X);
    }

    #[test]
    fn test_mark_after_win_is_ignored() {
        let mut game = Game::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ]);
        assert_eq!(game.winner(), Mark::X);
        let before = game;
        assert_eq!(game.mark(Position::BottomRight), MarkOutcome::GameOver);
        assert_eq!(game, before);
    }

    #[test]
    #[rustfmt::skip]
    fn test_from_parts_rejects_missing_winner() {
        let grid = Grid::from_cells([
            Mark::X, Mark::X, Mark::X,
            Mark::O, Mark::O, Mark::Empty,
            Mark::Empty, Mark::Empty, Mark::Empty,
        ]);
        assert!(Game::from_parts(grid, Mark::O, Mark::Empty).is_err());
        assert!(Game::from_parts(grid, Mark::Empty, Mark::X).is_ok());
    }

    #[test]
    fn test_from_parts_rejects_turn_without_player() {
        assert!(Game::from_parts(Grid::new(), Mark::Empty, Mark::Empty).is_err());
    }

    #[test]
    fn test_outcome_changed() {
        assert!(MarkOutcome::Won(Mark::O).changed());
        assert!(!MarkOutcome::Occupied.changed());
    }
}
