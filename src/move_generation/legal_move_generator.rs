//! Legal move generation.
//!
//! Scans the board row-major and, for every piece of the requested side,
//! emits single diagonal steps onto empty cells and single jumps over an
//! adjacent opposing piece. Captures are never mandatory and jumps are never
//! chained. Men only look at their two forward diagonals; kings use all four.

use crate::game_state::board::Board;
use crate::game_state::checkers_rules::DIAGONAL_DIRECTIONS;
use crate::game_state::checkers_types::*;

/// All moves for `side`, in deterministic generation order.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    for (from, cell) in board.pieces(side) {
        generate_piece_moves(board, side, from, cell, &mut out);
    }
    out
}

fn generate_piece_moves(board: &Board, side: Side, from: Square, cell: Cell, out: &mut Vec<Move>) {
    for (d_row, d_col) in DIAGONAL_DIRECTIONS {
        if !cell.is_king() && d_row != side.forward_row_step() {
            continue;
        }

        let Some(adjacent) = from.offset(d_row, d_col) else {
            continue;
        };
        let adjacent_cell = board.cell(adjacent);

        if adjacent_cell.is_empty() {
            out.push(Move::new(from, adjacent));
        }

        if let Some(landing) = from.offset(2 * d_row, 2 * d_col) {
            if adjacent_cell.belongs_to(side.opposite()) && board.cell(landing).is_empty() {
                out.push(Move::new(from, landing));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::legal_moves;
    use crate::game_state::board::{initial_board, Board};
    use crate::game_state::checkers_types::{Move, Side, Square};
    use crate::utils::board_notation::parse_board_notation;

    fn sq(row: u8, col: u8) -> Square {
        Square { row, col }
    }

    #[test]
    fn opening_dark_has_seven_simple_moves() {
        let moves = legal_moves(&initial_board(), Side::Dark);
        assert_eq!(moves.len(), 7);
        assert!(moves.iter().all(|mv| !mv.is_capture()));
        assert!(moves.iter().all(|mv| mv.from.row == 2 && mv.to.row == 3));
        assert_eq!(moves[0], Move::new(sq(2, 1), sq(3, 0)));
    }

    #[test]
    fn opening_light_has_seven_simple_moves() {
        let moves = legal_moves(&initial_board(), Side::Light);
        assert_eq!(moves.len(), 7);
        assert!(moves.iter().all(|mv| mv.from.row == 5 && mv.to.row == 4));
    }

    #[test]
    fn moves_start_on_own_piece_and_end_on_empty_cell() {
        let board = parse_board_notation(
            "........\n\
             ..b.....\n\
             ...w....\n\
             ....B...\n\
             .....w..\n\
             ..W.....\n\
             ...b....\n\
             ........",
        )
        .expect("notation should parse");

        for side in Side::ALL {
            for mv in legal_moves(&board, side) {
                assert!(board.cell(mv.from).belongs_to(side), "{mv} from foreign cell");
                assert!(board.cell(mv.to).is_empty(), "{mv} lands on occupied cell");
            }
        }
    }

    #[test]
    fn men_only_move_forward() {
        let board = parse_board_notation(
            "......../......../......../....b.../......../......../......../........",
        )
        .expect("notation should parse");
        let moves = legal_moves(&board, Side::Dark);
        assert_eq!(
            moves,
            vec![
                Move::new(sq(3, 4), sq(4, 3)),
                Move::new(sq(3, 4), sq(4, 5)),
            ]
        );
    }

    #[test]
    fn men_never_capture_backward() {
        let board = parse_board_notation(
            "......../......../...w..../....b.../......../......../......../........",
        )
        .expect("notation should parse");
        assert_eq!(
            legal_moves(&board, Side::Dark),
            vec![
                Move::new(sq(3, 4), sq(4, 3)),
                Move::new(sq(3, 4), sq(4, 5)),
            ]
        );
        assert_eq!(
            legal_moves(&board, Side::Light),
            vec![
                Move::new(sq(2, 3), sq(1, 2)),
                Move::new(sq(2, 3), sq(1, 4)),
            ]
        );
    }

    #[test]
    fn kings_move_in_all_four_directions() {
        let board = parse_board_notation(
            "......../......../......../....W.../......../......../......../........",
        )
        .expect("notation should parse");
        let moves = legal_moves(&board, Side::Light);
        assert_eq!(
            moves,
            vec![
                Move::new(sq(3, 4), sq(2, 3)),
                Move::new(sq(3, 4), sq(2, 5)),
                Move::new(sq(3, 4), sq(4, 3)),
                Move::new(sq(3, 4), sq(4, 5)),
            ]
        );
    }

    #[test]
    fn capture_is_offered_next_to_simple_moves() {
        let board = parse_board_notation(
            "......../......../...b..../....w.../......../......../......../........",
        )
        .expect("notation should parse");
        let moves = legal_moves(&board, Side::Dark);
        assert_eq!(
            moves,
            vec![
                Move::new(sq(2, 3), sq(3, 2)),
                Move::new(sq(2, 3), sq(4, 5)),
            ]
        );
        assert!(moves[1].is_capture());
    }

    #[test]
    fn blocked_landing_or_own_piece_prevents_capture() {
        let board = parse_board_notation(
            "......../......../...b..../..b.w.../.....b../......../......../........",
        )
        .expect("notation should parse");
        let moves = legal_moves(&board, Side::Dark);
        assert!(moves.iter().all(|mv| !mv.is_capture()), "{moves:?}");
    }

    #[test]
    fn capture_jumps_kings_too() {
        let board = parse_board_notation(
            "......../......../......../......../...B..../....w.../......../........",
        )
        .expect("notation should parse");
        let moves = legal_moves(&board, Side::Light);
        assert!(moves.contains(&Move::new(sq(5, 4), sq(3, 2))));
    }

    #[test]
    fn empty_board_has_no_moves() {
        let board = Board::new_empty();
        assert!(legal_moves(&board, Side::Dark).is_empty());
        assert!(legal_moves(&board, Side::Light).is_empty());
    }
}
