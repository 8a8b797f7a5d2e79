//! Win detection over the eight fixed lines.

use super::super::{Grid, Mark, Position};
use tracing::instrument;

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the mark holding a complete line, if any.
///
/// Lines are checked in the order of [`LINES`]; the first complete one wins.
#[instrument(level = "trace")]
pub fn check_winner(grid: &Grid) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = grid.get(a);
        (!mark.is_empty() && mark == grid.get(b) && mark == grid.get(c)).then_some(mark)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(mark: Mark, squares: &[Position]) -> Grid {
        let mut grid = Grid::new();
        for &pos in squares {
            grid.set(pos, mark);
        }
        grid
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Grid::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            assert_eq!(check_winner(&grid_with(Mark::O, &line)), Some(Mark::O));
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let grid = grid_with(Mark::X, &[Position::TopLeft, Position::TopCenter]);
        assert_eq!(check_winner(&grid), None);
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut grid = grid_with(Mark::X, &[Position::TopLeft, Position::TopCenter]);
        grid.set(Position::TopRight, Mark::O);
        assert_eq!(check_winner(&grid), None);
    }
}
