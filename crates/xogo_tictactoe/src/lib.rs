//! Pure tic-tac-toe game logic.
//!
//! A [`Game`] is a plain value: a 3x3 [`Grid`] of [`Mark`]s, whose turn it
//! is, and the winner once a line is complete. The only transition is
//! [`Game::mark`]. Marking an occupied square, or playing on after a win,
//! is a silent no-op, so replaying a request never corrupts state.
//!
//! ```
//! use xogo_tictactoe::{Game, Mark, Position};
//!
//! let game = Game::replay(&[
//!     Position::TopLeft,
//!     Position::TopCenter,
//!     Position::MiddleLeft,
//!     Position::Center,
//!     Position::BottomLeft,
//! ]);
//! assert_eq!(game.winner(), Mark::X);
//! assert!(game.legal_moves().is_empty());
//! ```
//!
//! There is no draw detection: a full grid without a line stays "in
//! progress" with no legal moves left.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod legal;
mod position;
pub mod rules;
mod types;

pub use game::{Game, MarkOutcome};
pub use legal::LegalMoves;
pub use position::Position;
pub use types::{Grid, GridError, Mark};
