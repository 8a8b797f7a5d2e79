//! Named squares of the 3x3 grid.

use serde::{Deserialize, Serialize};

/// A square on the grid, numbered 0-8 in row-major order.
///
/// Square indices arriving from the outside world are converted with
/// [`Position::from_index`], so an out-of-range index never reaches the
/// engine.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (0)
    TopLeft,
    /// Top-center (1)
    TopCenter,
    /// Top-right (2)
    TopRight,
    /// Middle-left (3)
    MiddleLeft,
    /// Center (4)
    Center,
    /// Middle-right (5)
    MiddleRight,
    /// Bottom-left (6)
    BottomLeft,
    /// Bottom-center (7)
    BottomCenter,
    /// Bottom-right (8)
    BottomRight,
}

impl Position {
    /// All nine squares in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Grid index of this square (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Looks up the square for a grid index, `None` outside 0-8.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Key under which the "mark this square" affordance is published.
    pub fn action_name(self) -> &'static str {
        match self {
            Position::TopLeft => "markTopLeft",
            Position::TopCenter => "markTopMid",
            Position::TopRight => "markTopRight",
            Position::MiddleLeft => "markMidLeft",
            Position::Center => "markCenter",
            Position::MiddleRight => "markMidRight",
            Position::BottomLeft => "markBotLeft",
            Position::BottomCenter => "markBotMid",
            Position::BottomRight => "markBotRight",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
