//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other without terminal
//! I/O, with an optional seeded random opening prefix. A side to move with no
//! legal move loses; a position where neither side can move is a draw.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;
use tracing::{debug, info};

use crate::engines::engine_trait::{Engine, GoParams};
use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Move, Side};
use crate::move_generation::game_over::is_game_over;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    DarkWinNoMoves,
    LightWinNoMoves,
    DrawBothBlocked,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, side: Side },
    DrawBothBlocked,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_min_plies: 2,
            opening_max_plies: 6,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: Board,
    pub side_to_move: Side,
    pub opening_moves: Vec<Move>,
    pub played_moves: Vec<Move>,
    pub dark_move_count: u32,
    pub light_move_count: u32,
    pub dark_total_time_ns: u128,
    pub light_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms
        )
    }
}

/// Play a single seeded engine-vs-engine match from the opening position.
///
/// `engine_dark` moves first.
pub fn play_engine_match<'a>(
    engine_dark: &'a mut dyn Engine,
    engine_light: &'a mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> CheckersResult<MatchResult> {
    engine_dark.new_game();
    engine_light.new_game();

    let (mut board, mut side, opening_moves) = apply_seeded_random_opening(
        Board::new_game(),
        Side::Dark,
        seed,
        config.opening_min_plies,
        config.opening_max_plies,
    );

    let mut result = MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_board: board,
        side_to_move: side,
        opening_moves,
        played_moves: Vec::new(),
        dark_move_count: 0,
        light_move_count: 0,
        dark_total_time_ns: 0,
        light_total_time_ns: 0,
    };

    for _ in 0..config.max_plies {
        if let Some(outcome) = decided_outcome(&board, side) {
            result.outcome = outcome;
            break;
        }

        let engine = match side {
            Side::Dark => &mut *engine_dark,
            Side::Light => &mut *engine_light,
        };
        let started = Instant::now();
        let out = engine.choose_move(&board, side, &config.go_params)?;
        let elapsed_ns = started.elapsed().as_nanos();

        match side {
            Side::Dark => {
                result.dark_move_count = result.dark_move_count.saturating_add(1);
                result.dark_total_time_ns = result.dark_total_time_ns.saturating_add(elapsed_ns);
            }
            Side::Light => {
                result.light_move_count = result.light_move_count.saturating_add(1);
                result.light_total_time_ns = result.light_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let legal = legal_moves(&board, side);
        let chosen = match out.best_move {
            Some(mv) if legal.contains(&mv) => mv,
            Some(mv) => return Err(CheckersError::IllegalMove(mv)),
            // An engine that gives up while moves exist forfeits.
            None => {
                result.outcome = win_for(side.opposite());
                break;
            }
        };

        debug!(side = %side, mv = %chosen, "match move");
        result.played_moves.push(chosen);
        board = apply_move(&board, chosen);
        side = side.opposite();
    }

    if result.outcome == MatchOutcome::DrawMaxPlies {
        if let Some(outcome) = decided_outcome(&board, side) {
            result.outcome = outcome;
        }
    }
    result.final_board = board;
    result.side_to_move = side;
    Ok(result)
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player sides are randomized each game (deterministic from `base_seed`).
/// Each factory receives that game's seed so seeded engines differ per game.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> CheckersResult<MatchSeriesStats>
where
    F1: Fn(u64) -> Box<dyn Engine>,
    F2: Fn(u64) -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut side_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_dark = side_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let mut player1 = player1_factory(seed);
        let mut player2 = player2_factory(seed);

        info!(
            game = i + 1,
            games = config.games,
            seed,
            dark = if player1_is_dark { "Player1" } else { "Player2" },
            "starting series game"
        );

        let result = if player1_is_dark {
            play_engine_match(player1.as_mut(), player2.as_mut(), seed, &config.per_game)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), seed, &config.per_game)?
        };

        let (p1_moves, p1_ns, p2_moves, p2_ns) = if player1_is_dark {
            (
                result.dark_move_count,
                result.dark_total_time_ns,
                result.light_move_count,
                result.light_total_time_ns,
            )
        } else {
            (
                result.light_move_count,
                result.light_total_time_ns,
                result.dark_move_count,
                result.dark_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let winner = match result.outcome {
            MatchOutcome::DarkWinNoMoves => Some(Side::Dark),
            MatchOutcome::LightWinNoMoves => Some(Side::Light),
            MatchOutcome::DrawBothBlocked | MatchOutcome::DrawMaxPlies => None,
        };
        let mapped = match winner {
            Some(side) => {
                let player = if (side == Side::Dark) == player1_is_dark {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWin { player, side }
            }
            None => {
                stats.draws += 1;
                if result.outcome == MatchOutcome::DrawBothBlocked {
                    SeriesOutcome::DrawBothBlocked
                } else {
                    SeriesOutcome::DrawMaxPlies
                }
            }
        };
        stats.outcomes.push(mapped);

        info!(
            game = i + 1,
            result = ?mapped,
            p1_wins = stats.player1_wins,
            p2_wins = stats.player2_wins,
            draws = stats.draws,
            "finished series game"
        );
    }

    stats.player1_avg_move_time_ms = average_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms = average_ms(stats.player2_total_time_ns, stats.player2_moves);
    Ok(stats)
}

fn decided_outcome(board: &Board, side: Side) -> Option<MatchOutcome> {
    if is_game_over(board) {
        return Some(MatchOutcome::DrawBothBlocked);
    }
    if legal_moves(board, side).is_empty() {
        return Some(win_for(side.opposite()));
    }
    None
}

fn win_for(side: Side) -> MatchOutcome {
    match side {
        Side::Dark => MatchOutcome::DarkWinNoMoves,
        Side::Light => MatchOutcome::LightWinNoMoves,
    }
}

fn average_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        total_ns as f64 / f64::from(moves) / 1_000_000.0
    }
}

/// Plays a seeded number of uniformly random plies from `board`.
fn apply_seeded_random_opening(
    mut board: Board,
    mut side: Side,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> (Board, Side, Vec<Move>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let (lo, hi) = if min_plies <= max_plies {
        (min_plies, max_plies)
    } else {
        (max_plies, min_plies)
    };
    let plies = rng.random_range(lo..=hi);

    let mut played = Vec::with_capacity(usize::from(plies));
    for _ in 0..plies {
        let moves = legal_moves(&board, side);
        let Some(&mv) = moves.as_slice().choose(&mut rng) else {
            break;
        };
        played.push(mv);
        board = apply_move(&board, mv);
        side = side.opposite();
    }

    (board, side, played)
}
