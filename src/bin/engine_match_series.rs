//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --games 20 --depth 4 --seed 7`
//! Progress is logged at info level; `RUST_LOG=info` shows it.

use tracing_subscriber::EnvFilter;

use plum_checkers::engines::engine_minimax::MinimaxEngine;
use plum_checkers::engines::engine_random::RandomEngine;
use plum_checkers::engines::engine_trait::Engine;
use plum_checkers::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};
use plum_checkers::{CheckersError, CheckersResult};

fn main() -> CheckersResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = MatchSeriesConfig {
        games: 10,
        base_seed: 1234,
        per_game: MatchConfig::default(),
    };
    let mut depth = 3u8;

    let mut args = std::env::args().skip(1);
    while let Some(flag) = args.next() {
        let value = args
            .next()
            .ok_or_else(|| CheckersError::InvalidArgument(format!("{flag} needs a value")))?;
        let invalid = || CheckersError::InvalidArgument(format!("invalid {flag} '{value}'"));
        match flag.as_str() {
            "--games" => config.games = value.parse().map_err(|_| invalid())?,
            "--seed" => config.base_seed = value.parse().map_err(|_| invalid())?,
            "--depth" => depth = value.parse().map_err(|_| invalid())?,
            "--max-plies" => config.per_game.max_plies = value.parse().map_err(|_| invalid())?,
            _ => {
                return Err(CheckersError::InvalidArgument(format!(
                    "unknown option '{flag}'"
                )))
            }
        }
    }

    // Customize these two lines to experiment with different engines/depths.
    let player1 = |_seed: u64| Box::new(MinimaxEngine::new(depth)) as Box<dyn Engine>;
    let player2 = |seed: u64| Box::new(RandomEngine::with_seed(seed)) as Box<dyn Engine>;

    let stats = play_engine_match_series(player1, player2, &config)?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
