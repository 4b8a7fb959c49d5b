//! Terminal-position detection.
//!
//! A position is over only when neither side can move. A single immobilized
//! side does not end the game here; the driver and match harness decide what
//! that means for the side to move.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::Side;
use crate::move_generation::move_generator::{CheckersMoveGenerator, MoveGenerator};

pub fn is_game_over_with<G: MoveGenerator + ?Sized>(generator: &G, board: &Board) -> bool {
    Side::ALL
        .iter()
        .all(|&side| generator.generate_legal_moves(board, side).is_empty())
}

#[inline]
pub fn is_game_over(board: &Board) -> bool {
    is_game_over_with(&CheckersMoveGenerator, board)
}

#[cfg(test)]
mod tests {
    use super::is_game_over;
    use crate::game_state::board::{initial_board, Board};
    use crate::game_state::checkers_types::Side;
    use crate::move_generation::legal_move_generator::legal_moves;
    use crate::utils::board_notation::parse_board_notation;

    fn agrees_with_move_lists(board: &Board) {
        let both_empty = legal_moves(board, Side::Dark).is_empty()
            && legal_moves(board, Side::Light).is_empty();
        assert_eq!(is_game_over(board), both_empty);
    }

    #[test]
    fn opening_is_not_over() {
        assert!(!is_game_over(&initial_board()));
        agrees_with_move_lists(&initial_board());
    }

    #[test]
    fn empty_board_is_over() {
        assert!(is_game_over(&Board::new_empty()));
        agrees_with_move_lists(&Board::new_empty());
    }

    #[test]
    fn one_immobilized_side_is_not_over() {
        // Dark man on its back rank cannot move; Light still can.
        let board = parse_board_notation(
            "......../......../......../......../......../......../......../b.....w.",
        )
        .expect("notation should parse");
        assert!(legal_moves(&board, Side::Dark).is_empty());
        assert!(!legal_moves(&board, Side::Light).is_empty());
        assert!(!is_game_over(&board));
        agrees_with_move_lists(&board);
    }

    #[test]
    fn both_men_stuck_on_back_ranks_is_over() {
        let board = parse_board_notation(
            ".w....../......../......../......../......../......../......../b.......",
        )
        .expect("notation should parse");
        assert!(is_game_over(&board));
        agrees_with_move_lists(&board);
    }
}
