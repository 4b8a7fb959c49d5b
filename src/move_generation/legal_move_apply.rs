//! Board transition under a single move.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::*;

/// Returns the board after `mv`; the input board is left untouched.
///
/// The move is trusted to come from `legal_moves`. Anything else yields an
/// unspecified (but memory-safe) board.
pub fn apply_move(board: &Board, mv: Move) -> Board {
    let mut next = *board;
    let piece = board.cell(mv.from);

    next.set_cell(mv.from, Cell::Empty);
    next.set_cell(mv.to, promote_if_on_back_rank(piece, mv.to));

    if let Some(captured) = mv.captured_square() {
        next.set_cell(captured, Cell::Empty);
    }

    next
}

fn promote_if_on_back_rank(piece: Cell, to: Square) -> Cell {
    match piece {
        Cell::Man(side) if to.row == side.back_rank() => Cell::King(side),
        other => other,
    }
}
