//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Leaves are always scored from the perspective side of the root call, so
//! maximizing nodes want higher scores and minimizing nodes want lower ones on
//! the same scale. Maximizing nodes enumerate the perspective side's moves,
//! minimizing nodes the opponent's. Ties keep the first move in generation
//! order.

use tracing::debug;

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Move, Side};
use crate::move_generation::game_over::is_game_over_with;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::move_generator::{CheckersMoveGenerator, MoveGenerator};
use crate::search::board_scoring::{BoardScorer, MaterialScorer};

/// Depth used by the automated player when nothing else is configured.
pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub max_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

/// Score of a node and the move that achieves it.
///
/// `best_move` is `None` only when the node is a leaf or its side has no move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub score: f64,
    pub best_move: Option<Move>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    pub result: SearchResult,
    pub stats: SearchStats,
}

/// Recursive searcher bound to one generator, scorer, and perspective side.
pub struct AlphaBetaSearch<'a, G: ?Sized, S: ?Sized> {
    generator: &'a G,
    scorer: &'a S,
    perspective: Side,
    stats: SearchStats,
}

impl<'a, G, S> AlphaBetaSearch<'a, G, S>
where
    G: MoveGenerator + ?Sized,
    S: BoardScorer + ?Sized,
{
    pub fn new(generator: &'a G, scorer: &'a S, perspective: Side) -> Self {
        Self {
            generator,
            scorer,
            perspective,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn search(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> SearchResult {
        self.stats.nodes += 1;

        if depth == 0 || is_game_over_with(self.generator, board) {
            return SearchResult {
                score: self.scorer.score(board, self.perspective),
                best_move: None,
            };
        }

        let mover = if maximizing {
            self.perspective
        } else {
            self.perspective.opposite()
        };

        let mut best = SearchResult {
            score: if maximizing {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            },
            best_move: None,
        };

        for mv in self.generator.generate_legal_moves(board, mover) {
            let next = apply_move(board, mv);
            let score = self.search(&next, depth - 1, alpha, beta, !maximizing).score;

            // The first move is always recorded so a node with moves never
            // reports an absent move, even when every line scores a sentinel.
            let improves = if maximizing {
                score > best.score
            } else {
                score < best.score
            };
            if improves || best.best_move.is_none() {
                best = SearchResult {
                    score,
                    best_move: Some(mv),
                };
            }

            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

/// Searches `board` for `side` with explicit generator and scorer.
pub fn best_move_search<G, S>(
    board: &Board,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
    side: Side,
) -> SearchOutcome
where
    G: MoveGenerator + ?Sized,
    S: BoardScorer + ?Sized,
{
    let mut searcher = AlphaBetaSearch::new(generator, scorer, side);
    let result = searcher.search(
        board,
        config.max_depth,
        f64::NEG_INFINITY,
        f64::INFINITY,
        true,
    );
    let stats = searcher.stats();

    debug!(
        side = %side,
        depth = config.max_depth,
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        score = result.score,
        best_move = ?result.best_move,
        "alpha-beta search finished"
    );

    SearchOutcome { result, stats }
}

/// One node of the search with the standard generator and material scorer.
pub fn alpha_beta(
    board: &Board,
    depth: u8,
    alpha: f64,
    beta: f64,
    maximizing: bool,
    perspective: Side,
) -> SearchResult {
    AlphaBetaSearch::new(&CheckersMoveGenerator, &MaterialScorer, perspective)
        .search(board, depth, alpha, beta, maximizing)
}

/// Best move for `side` searching `depth` plies.
pub fn best_move(board: &Board, depth: u8, side: Side) -> SearchResult {
    best_move_search(
        board,
        &CheckersMoveGenerator,
        &MaterialScorer,
        SearchConfig { max_depth: depth },
        side,
    )
    .result
}
