//! Move listing and selection helpers for the terminal prompt.

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_types::Move;

/// One numbered line per move, `index: (r, c) -> (r, c)`.
pub fn format_move_list(moves: &[Move]) -> String {
    moves
        .iter()
        .enumerate()
        .map(|(idx, mv)| format!("{idx}: {mv}\n"))
        .collect()
}

/// Parses a move number typed at the prompt and checks it against the list.
pub fn parse_move_selection(input: &str, available: usize) -> CheckersResult<usize> {
    let trimmed = input.trim();
    let index = trimmed
        .parse::<usize>()
        .map_err(|_| CheckersError::InvalidMoveSelection {
            input: trimmed.to_owned(),
        })?;
    if index >= available {
        return Err(CheckersError::MoveIndexOutOfRange { index, available });
    }
    Ok(index)
}
