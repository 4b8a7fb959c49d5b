//! Fixed-depth alpha-beta engine.
//!
//! Wraps the minimax search with the material scorer; the automated player
//! of the terminal game.

use tracing::debug;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Side;
use crate::move_generation::move_generator::CheckersMoveGenerator;
use crate::search::alpha_beta::{best_move_search, SearchConfig, DEFAULT_SEARCH_DEPTH};
use crate::search::board_scoring::MaterialScorer;

pub struct MinimaxEngine {
    default_depth: u8,
    move_generator: CheckersMoveGenerator,
    scorer: MaterialScorer,
}

impl MinimaxEngine {
    pub fn new(default_depth: u8) -> Self {
        Self {
            default_depth,
            move_generator: CheckersMoveGenerator,
            scorer: MaterialScorer,
        }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEPTH)
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "PlumCheckers Minimax"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        side: Side,
        params: &GoParams,
    ) -> CheckersResult<EngineOutput> {
        let depth = params.depth.unwrap_or(self.default_depth);
        let outcome = best_move_search(
            board,
            &self.move_generator,
            &self.scorer,
            SearchConfig { max_depth: depth },
            side,
        );

        debug!(
            engine = self.name(),
            depth,
            nodes = outcome.stats.nodes,
            "minimax engine chose move"
        );

        let mut out = EngineOutput {
            best_move: outcome.result.best_move,
            score: Some(outcome.result.score),
            ..EngineOutput::default()
        };
        out.info_lines.push(format!(
            "info depth {} score {} nodes {} cutoffs {}",
            depth, outcome.result.score, outcome.stats.nodes, outcome.stats.cutoffs
        ));
        Ok(out)
    }
}
