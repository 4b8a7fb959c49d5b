//! Terminal checkers: a human against the minimax engine.
//!
//! Run with:
//! `cargo run --release -- --depth 4 --human dark`
//! Set `RUST_LOG=plum_checkers=debug` to see search diagnostics on stderr.

use std::io;

use tracing_subscriber::EnvFilter;

use plum_checkers::engines::engine_minimax::MinimaxEngine;
use plum_checkers::engines::engine_random::RandomEngine;
use plum_checkers::engines::engine_trait::Engine;
use plum_checkers::utils::driver_config::{DriverConfig, EngineKind};
use plum_checkers::utils::terminal_game::play_terminal_game;
use plum_checkers::CheckersResult;

fn main() -> CheckersResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = DriverConfig::from_args(std::env::args().skip(1))?;

    let mut engine: Box<dyn Engine> = match (config.engine, config.seed) {
        (EngineKind::Minimax, _) => Box::new(MinimaxEngine::new(config.depth)),
        (EngineKind::Random, Some(seed)) => Box::new(RandomEngine::with_seed(seed)),
        (EngineKind::Random, None) => Box::new(RandomEngine::new()),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    play_terminal_game(&mut input, &mut output, engine.as_mut(), &config)?;
    Ok(())
}
