use std::collections::BTreeMap;
use std::fmt;

use smallvec::SmallVec;

use super::piece::{Color, Piece};

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND LOGIC
 */

pub const ROWS: usize = 8;
pub const COLS: usize = 8;

/// Board coordinates as (row, col).
pub type Square = (usize, usize);

/// Pieces captured along one move. Jumps capture one piece, multi-jump
/// chains a few more; slides capture none.
pub type CaptureList = SmallVec<[Piece; 2]>;

/// Destination square to the pieces captured on the way there. A `BTreeMap`
/// keeps per-piece move enumeration deterministic.
pub type MoveMap = BTreeMap<Square, CaptureList>;

/// Full game state as a plain value. `Clone` yields a fully independent
/// copy; mutating a clone never touches the original, which is what lets
/// the search explore sibling positions safely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; COLS]; ROWS],
    white_left: u8,
    red_left: u8,
    white_kings: u8,
    red_kings: u8,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Opening position: twelve men per side on the dark squares, White on
    /// the first three rows, Red on the last three.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for row in 0..ROWS {
            for col in 0..COLS {
                if col % 2 != (row + 1) % 2 {
                    continue;
                }
                if row < 3 {
                    board.place(row, col, Color::White, false);
                } else if row > 4 {
                    board.place(row, col, Color::Red, false);
                }
            }
        }
        board
    }

    /// Board with no pieces on it, for building synthetic positions.
    pub fn empty() -> Self {
        Self {
            squares: [[None; COLS]; ROWS],
            white_left: 0,
            red_left: 0,
            white_kings: 0,
            red_kings: 0,
        }
    }

    /// Put a piece on an empty square, updating the piece counters.
    pub fn place(&mut self, row: usize, col: usize, color: Color, king: bool) {
        self.squares[row][col] = Some(Piece {
            row,
            col,
            color,
            king,
        });
        match color {
            Color::White => {
                self.white_left += 1;
                if king {
                    self.white_kings += 1;
                }
            }
            Color::Red => {
                self.red_left += 1;
                if king {
                    self.red_kings += 1;
                }
            }
        }
    }

    pub fn get_piece(&self, row: usize, col: usize) -> Option<Piece> {
        self.squares[row][col]
    }

    /// Every piece of `color`, in row-major order. The enumeration order is
    /// what makes search results reproducible across runs.
    pub fn get_all_pieces(&self, color: Color) -> Vec<Piece> {
        self.squares
            .iter()
            .flatten()
            .flatten()
            .filter(|piece| piece.is(color))
            .copied()
            .collect()
    }

    pub fn pieces_left(&self, color: Color) -> u8 {
        match color {
            Color::White => self.white_left,
            Color::Red => self.red_left,
        }
    }

    pub fn kings(&self, color: Color) -> u8 {
        match color {
            Color::White => self.white_kings,
            Color::Red => self.red_kings,
        }
    }

    /// Move `piece` to (row, col) in place. A man reaching its promotion row
    /// is kinged; a king stays a king.
    ///
    /// Panics if the piece's square is empty: the caller handed us a piece
    /// that is not on this board, which breaks the clone-and-resolve
    /// contract the search relies on.
    pub fn move_piece(&mut self, piece: &Piece, row: usize, col: usize) {
        let mut moved = match self.squares[piece.row][piece.col].take() {
            Some(p) => p,
            None => panic!("no piece to move at ({}, {})", piece.row, piece.col),
        };
        moved.row = row;
        moved.col = col;
        if !moved.king && row == moved.promotion_row() {
            moved.king = true;
            match moved.color {
                Color::White => self.white_kings += 1,
                Color::Red => self.red_kings += 1,
            }
        }
        self.squares[row][col] = Some(moved);
    }

    /// Remove captured pieces in place, updating the counters.
    pub fn remove(&mut self, pieces: &[Piece]) {
        for piece in pieces {
            if self.squares[piece.row][piece.col].take().is_none() {
                continue;
            }
            match piece.color {
                Color::White => {
                    self.white_left -= 1;
                    if piece.king {
                        self.white_kings -= 1;
                    }
                }
                Color::Red => {
                    self.red_left -= 1;
                    if piece.king {
                        self.red_kings -= 1;
                    }
                }
            }
        }
    }

    /// Side that has captured all opposing pieces, if any.
    pub fn winner(&self) -> Option<Color> {
        if self.red_left == 0 {
            Some(Color::White)
        } else if self.white_left == 0 {
            Some(Color::Red)
        } else {
            None
        }
    }

    /// Static material balance from White's perspective, kings worth an
    /// extra half point.
    pub fn evaluate(&self) -> f64 {
        f64::from(self.white_left) - f64::from(self.red_left)
            + 0.5 * (f64::from(self.white_kings) - f64::from(self.red_kings))
    }

    /// All legal destinations for `piece` with the pieces captured on the
    /// way. Men scan the two forward diagonals, kings all four; jumps may
    /// chain through further jumps from the landing square.
    pub fn get_valid_moves(&self, piece: &Piece) -> MoveMap {
        let mut moves = MoveMap::new();
        let row = piece.row as i32;
        let left = piece.col as i32 - 1;
        let right = piece.col as i32 + 1;
        let no_captures = CaptureList::new();

        // Red advances toward row 0, White toward the last row.
        if piece.color == Color::Red || piece.king {
            let stop = (row - 3).max(-1);
            moves.extend(self.scan(row - 1, stop, -1, piece.color, left, -1, &no_captures));
            moves.extend(self.scan(row - 1, stop, -1, piece.color, right, 1, &no_captures));
        }
        if piece.color == Color::White || piece.king {
            let stop = (row + 3).min(ROWS as i32);
            moves.extend(self.scan(row + 1, stop, 1, piece.color, left, -1, &no_captures));
            moves.extend(self.scan(row + 1, stop, 1, piece.color, right, 1, &no_captures));
        }
        moves
    }

    /// Walk one diagonal for at most two steps: a slide onto the first empty
    /// square, or a jump over one enemy piece onto the square behind it.
    /// After a jump the scan recurses from the landing square with the
    /// accumulated captures, which is how multi-jump chains are found.
    /// `skipped` is non-empty exactly when we are mid-chain, where plain
    /// slides are not legal continuations.
    #[allow(clippy::too_many_arguments)]
    fn scan(
        &self,
        start: i32,
        stop: i32,
        row_step: i32,
        color: Color,
        col_start: i32,
        col_step: i32,
        skipped: &CaptureList,
    ) -> MoveMap {
        let mut moves = MoveMap::new();
        let mut pending: Option<Piece> = None;
        let mut row = start;
        let mut col = col_start;

        while row != stop {
            if !(0..COLS as i32).contains(&col) {
                break;
            }
            match self.squares[row as usize][col as usize] {
                None => {
                    if !skipped.is_empty() && pending.is_none() {
                        break;
                    }
                    let mut captured = CaptureList::new();
                    if let Some(p) = pending {
                        captured.push(p);
                    }
                    captured.extend(skipped.iter().copied());
                    moves.insert((row as usize, col as usize), captured.clone());

                    if pending.is_some() {
                        let next_stop = if row_step < 0 {
                            (row - 3).max(-1)
                        } else {
                            (row + 3).min(ROWS as i32)
                        };
                        let next_row = row + row_step;
                        moves.extend(self.scan(
                            next_row, next_stop, row_step, color, col - 1, -1, &captured,
                        ));
                        moves.extend(self.scan(
                            next_row, next_stop, row_step, color, col + 1, 1, &captured,
                        ));
                    }
                    break;
                }
                Some(p) if p.is(color) => break,
                Some(p) => {
                    // Two enemies in a row block the diagonal, and a chain
                    // may not jump the same piece twice.
                    if pending.is_some() || skipped.contains(&p) {
                        break;
                    }
                    pending = Some(p);
                }
            }
            row += row_step;
            col += col_step;
        }
        moves
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.squares {
            for square in row {
                let glyph = match square {
                    Some(p) => match (p.color, p.king) {
                        (Color::White, false) => 'w',
                        (Color::White, true) => 'W',
                        (Color::Red, false) => 'r',
                        (Color::Red, true) => 'R',
                    },
                    None => '.',
                };
                write!(f, "{} ", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
