//! Move-path enumeration for generator regression testing.
//!
//! Counts leaf nodes of the full game tree to a fixed depth with sides
//! alternating each ply, along with how many leaf moves were captures and
//! how many promoted a man.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Cell, Move, Side};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
    }
}

pub fn perft<G: MoveGenerator + ?Sized>(
    generator: &G,
    board: &Board,
    side: Side,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(board, side) {
        perft_recurse(generator, board, side, mv, depth, 1, &mut total);
    }
    total
}

/// Per-root-move breakdown, in generation order.
pub fn perft_divide<G: MoveGenerator + ?Sized>(
    generator: &G,
    board: &Board,
    side: Side,
    depth: u8,
) -> Vec<(Move, PerftCounts)> {
    if depth == 0 {
        return Vec::new();
    }

    generator
        .generate_legal_moves(board, side)
        .into_iter()
        .map(|mv| {
            let mut counts = PerftCounts::default();
            perft_recurse(generator, board, side, mv, depth, 1, &mut counts);
            (mv, counts)
        })
        .collect()
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    board: &Board,
    mover: Side,
    mv: Move,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    let next = apply_move(board, mv);

    if current_depth == search_depth {
        counts.nodes += 1;
        if mv.is_capture() {
            counts.captures += 1;
        }
        if matches!(board.cell(mv.from), Cell::Man(_)) && next.cell(mv.to).is_king() {
            counts.promotions += 1;
        }
        return;
    }

    let replier = mover.opposite();
    let mut local = PerftCounts::default();
    for child in generator.generate_legal_moves(&next, replier) {
        perft_recurse(
            generator,
            &next,
            replier,
            child,
            search_depth,
            current_depth + 1,
            &mut local,
        );
    }
    counts.merge(local);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::initial_board;
    use crate::game_state::checkers_types::Square;
    use crate::move_generation::move_generator::CheckersMoveGenerator;
    use crate::utils::board_notation::parse_board_notation;

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let counts = perft(&CheckersMoveGenerator, &initial_board(), Side::Dark, 0);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn perft_from_opening_matches_known_node_counts() {
        let board = initial_board();
        let expected = [7usize, 49, 379, 2872, 23_582];
        for (idx, nodes) in expected.iter().enumerate() {
            let depth = (idx + 1) as u8;
            let counts = perft(&CheckersMoveGenerator, &board, Side::Dark, depth);
            assert_eq!(counts.nodes, *nodes, "depth {depth}");
        }
    }

    #[test]
    fn perft_counts_captures_and_promotions() {
        let board = parse_board_notation(
            "......../..b...../...w..../......../......../......../......../........",
        )
        .expect("notation should parse");
        let counts = perft(&CheckersMoveGenerator, &board, Side::Light, 1);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 2,
                captures: 1,
                promotions: 1,
            }
        );
    }

    #[test]
    fn divide_sums_to_perft() {
        let board = initial_board();
        let divided = perft_divide(&CheckersMoveGenerator, &board, Side::Dark, 3);
        let sum: usize = divided.iter().map(|(_, c)| c.nodes).sum();
        assert_eq!(divided.len(), 7);
        assert_eq!(sum, perft(&CheckersMoveGenerator, &board, Side::Dark, 3).nodes);
        assert_eq!(divided[0].0.from, Square { row: 2, col: 1 });
    }

    struct NoMoves;

    impl MoveGenerator for NoMoves {
        fn generate_legal_moves(&self, _board: &Board, _side: Side) -> Vec<Move> {
            Vec::new()
        }
    }

    #[test]
    fn generator_without_moves_has_no_leaves() {
        let counts = perft(&NoMoves, &initial_board(), Side::Dark, 2);
        assert_eq!(counts, PerftCounts::default());
    }
}
