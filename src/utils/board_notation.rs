//! Compact text notation for boards.
//!
//! Eight rows of eight characters, row 0 first, separated by `/` or newlines:
//! `.` empty, `b` Dark man, `B` Dark king, `w` Light man, `W` Light king.

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::checkers_types::*;

pub fn parse_board_notation(text: &str) -> CheckersResult<Board> {
    if text.trim().is_empty() {
        return Err(CheckersError::InvalidBoardText(
            "board notation is empty".to_owned(),
        ));
    }

    let rows: Vec<&str> = text
        .split(['/', '\n'])
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .collect();
    if rows.len() != BOARD_SIZE {
        return Err(CheckersError::WrongRowCount(rows.len()));
    }

    let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    for (row, row_text) in rows.iter().enumerate() {
        let len = row_text.chars().count();
        if len != BOARD_SIZE {
            return Err(CheckersError::WrongRowLength { row, len });
        }

        for (col, token) in row_text.chars().enumerate() {
            cells[row][col] =
                cell_from_char(token).ok_or(CheckersError::InvalidCellToken { row, col, token })?;
        }
    }

    Ok(Board::from_cells(cells))
}

pub fn board_to_notation(board: &Board) -> String {
    board
        .cells()
        .iter()
        .map(|row| row.iter().copied().map(cell_to_char).collect::<String>())
        .collect::<Vec<_>>()
        .join("/")
}

pub fn cell_from_char(ch: char) -> Option<Cell> {
    match ch {
        '.' => Some(Cell::Empty),
        'b' => Some(Cell::Man(Side::Dark)),
        'B' => Some(Cell::King(Side::Dark)),
        'w' => Some(Cell::Man(Side::Light)),
        'W' => Some(Cell::King(Side::Light)),
        _ => None,
    }
}

pub fn cell_to_char(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Man(Side::Dark) => 'b',
        Cell::King(Side::Dark) => 'B',
        Cell::Man(Side::Light) => 'w',
        Cell::King(Side::Light) => 'W',
    }
}
