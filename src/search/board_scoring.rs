//! Pluggable board evaluation interface and the material scorer.
//!
//! Search delegates static position scoring to `BoardScorer`, so alternate
//! heuristics can be swapped in without touching the search code.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{PieceKind, Side};

pub trait BoardScorer: Send + Sync {
    /// Score from `side`'s point of view; higher is better for `side`.
    fn score(&self, board: &Board, side: Side) -> f64;
}

/// Men count one, kings count two.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> f64 {
        match piece {
            PieceKind::Man => 1.0,
            PieceKind::King => 2.0,
        }
    }

    fn material(board: &Board, side: Side) -> f64 {
        board
            .pieces(side)
            .filter_map(|(_, cell)| cell.kind())
            .map(Self::piece_value)
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board, side: Side) -> f64 {
        Self::material(board, side) - Self::material(board, side.opposite())
    }
}

/// Material score of `board` for `side`.
#[inline]
pub fn evaluate(board: &Board, side: Side) -> f64 {
    MaterialScorer.score(board, side)
}
