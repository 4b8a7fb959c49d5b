//! Terminal board renderer.
//!
//! Column numbers across the top and row numbers down the left, so a human
//! can read move coordinates straight off the grid.

use crate::game_state::board::Board;
use crate::utils::board_notation::cell_to_char;

pub fn render_board(board: &Board) -> String {
    let mut out = String::from("  ");
    for col in 0..board.cols() {
        out.push_str(&format!(" {col} "));
    }
    out.push('\n');

    for (row, cells) in board.cells().iter().enumerate() {
        out.push_str(&format!("{row} "));
        for cell in cells {
            out.push(' ');
            out.push(cell_to_char(*cell));
            out.push(' ');
        }
        out.push('\n');
    }

    out
}
