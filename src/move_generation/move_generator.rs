use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Move, Side};
use crate::move_generation::legal_move_generator::legal_moves;

/// Source of candidate moves for search, perft, and engines.
///
/// Implementations must be deterministic: search tie-breaks follow the order
/// of the returned moves.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, board: &Board, side: Side) -> Vec<Move>;
}

/// Single-step and single-jump moves, no mandatory capture.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckersMoveGenerator;

impl MoveGenerator for CheckersMoveGenerator {
    #[inline]
    fn generate_legal_moves(&self, board: &Board, side: Side) -> Vec<Move> {
        legal_moves(board, side)
    }
}
