//! Immutable 8x8 board value.
//!
//! `Board` is the only game state the core knows about. It is a plain `Copy`
//! grid; every transition goes through `apply_move` and yields a new value.

use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::checkers_types::*;

/// Row-major grid of cells, row 0 at the top (Dark's home rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl Board {
    #[inline]
    pub const fn new_empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Standard opening layout: Dark men on the dark squares of rows 0-2,
    /// Light men on the dark squares of rows 5-7.
    pub fn new_game() -> Self {
        let mut board = Self::new_empty();
        for square in Self::squares().filter(|sq| sq.is_dark()) {
            match square.row {
                0..=2 => board.set_cell(square, Cell::Man(Side::Dark)),
                5..=7 => board.set_cell(square, Cell::Man(Side::Light)),
                _ => {}
            }
        }
        board
    }

    #[inline]
    pub const fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    #[inline]
    pub const fn rows(&self) -> usize {
        BOARD_SIZE
    }

    #[inline]
    pub const fn cols(&self) -> usize {
        BOARD_SIZE
    }

    #[inline]
    pub fn cell(&self, square: Square) -> Cell {
        self.cells[usize::from(square.row)][usize::from(square.col)]
    }

    #[inline]
    pub(crate) fn set_cell(&mut self, square: Square, cell: Cell) {
        self.cells[usize::from(square.row)][usize::from(square.col)] = cell;
    }

    #[inline]
    pub fn cells(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Every square on the board in row-major order.
    pub fn squares() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square { row, col }))
    }

    /// Occupied squares of `side`, row-major.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Square, Cell)> + '_ {
        Self::squares()
            .map(move |sq| (sq, self.cell(sq)))
            .filter(move |(_, cell)| cell.belongs_to(side))
    }

    pub fn count(&self, side: Side, kind: PieceKind) -> usize {
        self.pieces(side)
            .filter(|(_, cell)| cell.kind() == Some(kind))
            .count()
    }
}

/// The fixed starting position.
#[inline]
pub fn initial_board() -> Board {
    Board::new_game()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_has_twelve_men_each() {
        let board = initial_board();
        for side in Side::ALL {
            assert_eq!(board.count(side, PieceKind::Man), 12);
            assert_eq!(board.count(side, PieceKind::King), 0);
        }
        assert_eq!(board.rows(), 8);
        assert_eq!(board.cols(), 8);
    }

    #[test]
    fn starting_position_keeps_middle_rows_empty() {
        let board = initial_board();
        for sq in Board::squares().filter(|sq| sq.row == 3 || sq.row == 4) {
            assert!(board.cell(sq).is_empty(), "{sq} should be empty");
        }
    }

    #[test]
    fn pieces_only_sit_on_dark_squares() {
        let board = initial_board();
        for side in Side::ALL {
            assert!(board.pieces(side).all(|(sq, _)| sq.is_dark()));
        }
        assert_eq!(board.cell(Square { row: 0, col: 1 }), Cell::Man(Side::Dark));
        assert_eq!(board.cell(Square { row: 7, col: 0 }), Cell::Man(Side::Light));
    }
}
