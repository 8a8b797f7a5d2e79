//! Fixed-size set of legal squares.

use super::Position;

/// Set of squares, one bit per grid index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LegalMoves(u16);

impl LegalMoves {
    /// No legal squares.
    pub const NONE: LegalMoves = LegalMoves(0);

    /// Every square.
    pub const ALL: LegalMoves = LegalMoves(0x1FF);

    /// True if the square is in the set.
    pub fn contains(self, pos: Position) -> bool {
        self.0 & Self::bit(pos) != 0
    }

    /// Number of squares in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// True if no square is legal.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Squares in index order.
    pub fn iter(self) -> impl Iterator<Item = Position> {
        Position::ALL.into_iter().filter(move |&pos| self.contains(pos))
    }

    /// Adds a square.
    pub fn insert(&mut self, pos: Position) {
        self.0 |= Self::bit(pos);
    }

    fn bit(pos: Position) -> u16 {
        1 << pos.to_index()
    }
}

impl FromIterator<Position> for LegalMoves {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = LegalMoves::NONE;
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}
