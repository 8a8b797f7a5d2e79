//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Grid`](super::Grid), kept apart from the turn
//! bookkeeping in [`Game`](super::Game).

pub mod win;

pub use win::{LINES, check_winner};
