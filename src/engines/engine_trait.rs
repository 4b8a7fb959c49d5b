//! Engine abstraction layer used by the terminal driver and match harness.
//!
//! Defines common input parameters and output payloads so different move
//! choosers can be selected at runtime behind a single trait interface.

use crate::errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Move, Side};

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Overrides the engine's configured search depth.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` when the side to move has no legal move.
    pub best_move: Option<Move>,
    pub score: Option<f64>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(
        &mut self,
        board: &Board,
        side: Side,
        params: &GoParams,
    ) -> CheckersResult<EngineOutput>;
}
