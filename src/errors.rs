//! Errors used at the edges of the checkers engine.
//!
//! The rules core (move generation, move application, evaluation, search) is
//! total and never fails. Parsing, terminal I/O, engine orchestration, and
//! command-line configuration report failures through `CheckersError`.
//!
//! Usage guidelines:
//! - Input-related variants (`InvalidBoardText`, `InvalidMoveSelection`,
//!   `MoveIndexOutOfRange`, `InvalidArgument`) are recoverable and suitable
//!   for showing to a user; the terminal driver re-prompts on the move-prompt
//!   variants.
//! - `IllegalMove` means an engine produced a move outside the legal list and
//!   points at an engine bug.

use thiserror::Error;

use crate::game_state::checkers_types::Move;

/// Unified error type for the checkers engine.
#[derive(Debug, Error)]
pub enum CheckersError {
    /// Board notation did not have eight rows.
    #[error("board notation must contain 8 rows, found {0}")]
    WrongRowCount(usize),

    /// A row in board notation did not have eight cells.
    #[error("board row {row} must contain 8 cells, found {len}")]
    WrongRowLength { row: usize, len: usize },

    /// Unknown character in board notation.
    #[error("invalid cell token '{token}' at row {row}, column {col}")]
    InvalidCellToken { row: usize, col: usize, token: char },

    /// Board notation was structurally unusable (for example empty).
    #[error("invalid board notation: {0}")]
    InvalidBoardText(String),

    /// Prompt input that is not a move number.
    #[error("'{input}' is not a move number")]
    InvalidMoveSelection { input: String },

    /// Move number outside the listed moves.
    #[error("move number {index} is out of range (0..{available})")]
    MoveIndexOutOfRange { index: usize, available: usize },

    /// An engine chose a move the generator does not offer.
    #[error("engine returned illegal move {0}")]
    IllegalMove(Move),

    /// Bad command-line or configuration value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type CheckersResult<T> = Result<T, CheckersError>;
