//! Crate root module declarations for the Plum Checkers engine project.
//!
//! This file exposes the board model, move generation, search, engines, and
//! utility helpers so binaries, tests, and benchmarks can import stable module
//! paths. The five core operations are re-exported at the root.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod checkers_rules;
    pub mod checkers_types;
}

pub mod move_generation {
    pub mod game_over;
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod board_notation;
    pub mod driver_config;
    pub mod engine_match_harness;
    pub mod move_notation;
    pub mod render_board;
    pub mod terminal_game;
}

pub use errors::{CheckersError, CheckersResult};
pub use game_state::board::{initial_board, Board};
pub use game_state::checkers_types::{Cell, Move, PieceKind, Side, Square};
pub use move_generation::game_over::is_game_over;
pub use move_generation::legal_move_apply::apply_move;
pub use move_generation::legal_move_generator::legal_moves;
pub use search::alpha_beta::{best_move, SearchResult};
