//! Random-move engine.
//!
//! Selects uniformly from legal moves; used as a weak sparring partner and in
//! match-harness tests. Seeded construction makes its choices reproducible.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Side;
use crate::move_generation::move_generator::{CheckersMoveGenerator, MoveGenerator};

pub struct RandomEngine {
    move_generator: CheckersMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            move_generator: CheckersMoveGenerator,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: CheckersMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "PlumCheckers Random"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        side: Side,
        params: &GoParams,
    ) -> CheckersResult<EngineOutput> {
        let legal_moves = self.move_generator.generate_legal_moves(board, side);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));
        if let Some(depth) = params.depth {
            out.info_lines.push(format!(
                "info string random_engine ignores requested_depth {}",
                depth
            ));
        }

        out.best_move = legal_moves.as_slice().choose(&mut self.rng).copied();
        debug!(engine = self.name(), best_move = ?out.best_move, "random engine chose move");
        Ok(out)
    }
}
