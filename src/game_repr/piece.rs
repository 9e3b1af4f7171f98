use super::board::ROWS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Red,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Red,
            Self::Red => Self::White,
        }
    }
}

/// A single checker, identified by its board coordinates.
///
/// Pieces are plain values: moving one produces an updated copy in the target
/// square, and a piece looked up on a cloned board carries the same
/// coordinates as its counterpart on the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub row: usize,
    pub col: usize,
    pub color: Color,
    pub king: bool,
}

impl Piece {
    pub fn new(row: usize, col: usize, color: Color) -> Self {
        Self {
            row,
            col,
            color,
            king: false,
        }
    }

    /// Row a man of this color is promoted on. White starts at the top of
    /// the board and advances toward the last row, Red the reverse.
    pub fn promotion_row(&self) -> usize {
        match self.color {
            Color::White => ROWS - 1,
            Color::Red => 0,
        }
    }

    pub fn square(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn is(&self, color: Color) -> bool {
        self.color == color
    }
}
