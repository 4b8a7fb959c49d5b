//! Human-versus-engine turn loop over any line-based reader and writer.
//!
//! The human picks moves by number from the generated list; the engine side
//! asks its `Engine`. Dark moves first. The loop runs until neither side can
//! move, a side to move has no move, or the input closes.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::engines::engine_trait::{Engine, GoParams};
use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Side;
use crate::move_generation::game_over::is_game_over;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::utils::driver_config::DriverConfig;
use crate::utils::move_notation::{format_move_list, parse_move_selection};
use crate::utils::render_board::render_board;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    HumanWon,
    HumanLost,
    BothBlocked,
    InputClosed,
}

#[derive(Debug, Clone)]
pub struct GameSummary {
    pub end: GameEnd,
    pub final_board: Board,
    pub plies: u32,
}

/// Plays from the standard opening with Dark to move.
pub fn play_terminal_game<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    engine: &mut dyn Engine,
    config: &DriverConfig,
) -> CheckersResult<GameSummary> {
    play_terminal_game_from(Board::new_game(), Side::Dark, input, output, engine, config)
}

pub fn play_terminal_game_from<R: BufRead, W: Write>(
    mut board: Board,
    mut side: Side,
    input: &mut R,
    output: &mut W,
    engine: &mut dyn Engine,
    config: &DriverConfig,
) -> CheckersResult<GameSummary> {
    let params = GoParams {
        depth: Some(config.depth),
    };
    let mut end = GameEnd::BothBlocked;
    let mut plies = 0u32;

    engine.new_game();

    while !is_game_over(&board) {
        write!(output, "{}", render_board(&board))?;

        if side == config.human_side {
            writeln!(output, "Your turn! Here are your valid moves:")?;
            let moves = legal_moves(&board, side);
            write!(output, "{}", format_move_list(&moves))?;

            if moves.is_empty() {
                writeln!(output, "No valid moves left! You lose.")?;
                end = GameEnd::HumanLost;
                break;
            }

            let Some(index) = prompt_move_index(input, output, moves.len())? else {
                writeln!(output, "Input closed.")?;
                end = GameEnd::InputClosed;
                break;
            };
            board = apply_move(&board, moves[index]);
        } else {
            writeln!(output, "Engine's turn!")?;
            let out = engine.choose_move(&board, side, &params)?;
            match out.best_move {
                Some(mv) => {
                    writeln!(output, "Engine chose: {mv}")?;
                    board = apply_move(&board, mv);
                }
                None => {
                    writeln!(output, "Engine has no valid moves! You win.")?;
                    end = GameEnd::HumanWon;
                    break;
                }
            }
        }

        plies += 1;
        side = side.opposite();
    }

    writeln!(output, "Game over!")?;
    write!(output, "{}", render_board(&board))?;
    output.flush()?;

    debug!(end = ?end, plies, "terminal game finished");
    Ok(GameSummary {
        end,
        final_board: board,
        plies,
    })
}

/// Reads move numbers until one is valid; `None` on end of input.
fn prompt_move_index<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    available: usize,
) -> CheckersResult<Option<usize>> {
    write!(output, "Choose your move (enter the number): ")?;
    output.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match parse_move_selection(&line, available) {
            Ok(index) => return Ok(Some(index)),
            Err(
                err @ (CheckersError::InvalidMoveSelection { .. }
                | CheckersError::MoveIndexOutOfRange { .. }),
            ) => {
                write!(output, "Invalid choice ({err}). Choose a valid move: ")?;
                output.flush()?;
            }
            Err(other) => return Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::engines::engine_minimax::MinimaxEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::game_state::checkers_types::{Cell, Square};
    use crate::utils::board_notation::parse_board_notation;

    fn run(
        board: Board,
        side: Side,
        script: &str,
        engine: &mut dyn Engine,
    ) -> (GameSummary, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let summary = play_terminal_game_from(
            board,
            side,
            &mut input,
            &mut output,
            engine,
            &DriverConfig {
                depth: 2,
                ..DriverConfig::default()
            },
        )
        .expect("game should run");
        (summary, String::from_utf8(output).expect("output is utf-8"))
    }

    #[test]
    fn human_move_then_engine_reply_then_input_closes() {
        let mut engine = MinimaxEngine::default();
        let (summary, text) = run(Board::new_game(), Side::Dark, "0\n", &mut engine);

        assert_eq!(summary.end, GameEnd::InputClosed);
        assert_eq!(summary.plies, 2);
        assert!(text.contains("Your turn! Here are your valid moves:"));
        assert!(text.contains("0: (2, 1) -> (3, 0)"));
        assert!(text.contains("Engine chose: "));
        assert!(text.contains("Input closed."));
        assert!(text.contains("Game over!"));
        assert_eq!(
            summary.final_board.cell(Square { row: 3, col: 0 }),
            Cell::Man(Side::Dark)
        );
    }

    #[test]
    fn invalid_choices_are_reprompted() {
        let mut engine = RandomEngine::with_seed(2);
        let (summary, text) = run(Board::new_game(), Side::Dark, "x\n99\n6\n", &mut engine);

        assert_eq!(text.matches("Invalid choice").count(), 2);
        assert_eq!(summary.plies, 2);
        assert!(summary.final_board.cell(Square { row: 2, col: 7 }).is_empty());
    }

    #[test]
    fn immobilized_human_loses() {
        let board = parse_board_notation(
            "......../......../......../......../......../......../......../b.....w.",
        )
        .expect("notation should parse");
        let mut engine = MinimaxEngine::default();
        let (summary, text) = run(board, Side::Dark, "", &mut engine);

        assert_eq!(summary.end, GameEnd::HumanLost);
        assert!(text.contains("No valid moves left! You lose."));
    }

    #[test]
    fn immobilized_engine_loses() {
        let board = parse_board_notation(
            ".w....../......../......../....b.../......../......../......../........",
        )
        .expect("notation should parse");
        let mut engine = MinimaxEngine::default();
        let (summary, text) = run(board, Side::Light, "", &mut engine);

        assert_eq!(summary.end, GameEnd::HumanWon);
        assert!(text.contains("Engine has no valid moves! You win."));
    }

    #[test]
    fn blocked_position_ends_immediately() {
        let mut engine = MinimaxEngine::default();
        let (summary, text) = run(Board::new_empty(), Side::Dark, "", &mut engine);

        assert_eq!(summary.end, GameEnd::BothBlocked);
        assert_eq!(summary.plies, 0);
        assert!(text.starts_with("Game over!"));
    }
}
