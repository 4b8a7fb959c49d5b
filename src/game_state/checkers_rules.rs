//! Canonical checkers-rule constants.
//!
//! Board dimensions, movement directions, and the standard starting layout in
//! board notation (see `utils::board_notation`).

/// Rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// Diagonal directions as `(d_row, d_col)`, in generation order.
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Standard starting position, row 0 first.
pub const STARTING_POSITION: &str =
    ".b.b.b.b/b.b.b.b./.b.b.b.b/......../......../w.w.w.w./.w.w.w.w/w.w.w.w.";
