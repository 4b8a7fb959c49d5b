//! Core value types shared by the board model, move generation, and search.
//!
//! Everything here is a small `Copy` value so boards and moves can be passed
//! around by value through the recursive search.

use std::fmt;

use crate::game_state::checkers_rules::BOARD_SIZE;

/// One of the two competing colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Dark,
    Light,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Dark, Side::Light];

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Dark => Side::Light,
            Side::Light => Side::Dark,
        }
    }

    /// Row step a man of this side takes when moving forward.
    #[inline]
    pub const fn forward_row_step(self) -> i8 {
        match self {
            Side::Dark => 1,
            Side::Light => -1,
        }
    }

    /// Row on which a man of this side is promoted.
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Side::Dark => BOARD_SIZE as u8 - 1,
            Side::Light => 0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Dark => write!(f, "Dark"),
            Side::Light => write!(f, "Light"),
        }
    }
}

/// Piece kind (side is carried separately by `Cell`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Man,
    King,
}

/// Content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Man(Side),
    King(Side),
}

impl Cell {
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    pub const fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Man(side) | Cell::King(side) => Some(side),
        }
    }

    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        match self {
            Cell::Empty => None,
            Cell::Man(_) => Some(PieceKind::Man),
            Cell::King(_) => Some(PieceKind::King),
        }
    }

    #[inline]
    pub fn belongs_to(self, side: Side) -> bool {
        self.side() == Some(side)
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self, Cell::King(_))
    }
}

/// Grid coordinate, `(row, col)` with both in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Square reached by stepping `(d_row, d_col)`, or `None` off the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        let limit = BOARD_SIZE as i8;
        if (0..limit).contains(&row) && (0..limit).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Dark squares are the only ones pieces ever occupy.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single step or a single jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    #[inline]
    pub fn is_capture(self) -> bool {
        self.from.row.abs_diff(self.to.row) == 2
    }

    /// Midpoint of a capture move; `None` for simple moves.
    #[inline]
    pub fn captured_square(self) -> Option<Square> {
        if !self.is_capture() {
            return None;
        }
        Some(Square {
            row: (self.from.row + self.to.row) / 2,
            col: (self.from.col + self.to.col) / 2,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
