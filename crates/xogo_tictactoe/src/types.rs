//! Core domain types: marks and the grid that holds them.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// The value occupying a cell, or whose turn it is.
///
/// On the wire a mark is an integer: 0 for empty, 1 for X, 2 for O.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Mark {
    /// No mark. Also used for "nobody" in the turn and winner slots.
    #[default]
    #[display(" ")]
    Empty,
    /// Player X (moves first).
    #[display("X")]
    X,
    /// Player O.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the other player. `Empty` has no opponent.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    /// True for `Mark::Empty`.
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

impl From<Mark> for u8 {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Empty => 0,
            Mark::X => 1,
            Mark::O => 2,
        }
    }
}

impl TryFrom<u8> for Mark {
    type Error = GridError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Mark::Empty),
            1 => Ok(Mark::X),
            2 => Ok(Mark::O),
            other => Err(GridError::InvalidMark(other)),
        }
    }
}

/// Error raised when a wire value does not describe a valid game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GridError {
    /// A cell or turn value outside 0-2.
    #[display("invalid mark {}: expected 0 (empty), 1 (X) or 2 (O)", _0)]
    InvalidMark(u8),

    /// Turn, winner and grid contradict each other.
    #[display("inconsistent game state: {}", _0)]
    InconsistentState(String),
}

impl std::error::Error for GridError {}

/// 3x3 grid of marks in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: [Mark; 9],
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a grid from raw cells.
    pub fn from_cells(cells: [Mark; 9]) -> Self {
        Self { cells }
    }

    /// Mark at the given square.
    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.to_index()]
    }

    pub(crate) fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.to_index()] = mark;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// All cells in index order.
    pub fn cells(&self) -> &[Mark; 9] {
        &self.cells
    }

    /// True when every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|m| !m.is_empty())
    }

    /// Compact one-line rendering: rows of three separated by commas.
    pub fn pretty(&self) -> String {
        self.cells
            .chunks(3)
            .map(|row| row.iter().map(ToString::to_string).collect::<String>())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Multi-line rendering with empty squares numbered 1-9.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row, cells) in self.cells.chunks(3).enumerate() {
            for (col, mark) in cells.iter().enumerate() {
                match mark {
                    Mark::Empty => result.push_str(&(row * 3 + col + 1).to_string()),
                    other => result.push_str(&other.to_string()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}
