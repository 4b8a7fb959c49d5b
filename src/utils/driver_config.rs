//! Command-line configuration for the terminal game.

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_types::Side;
use crate::search::alpha_beta::DEFAULT_SEARCH_DEPTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    Minimax,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    pub depth: u8,
    pub human_side: Side,
    pub engine: EngineKind,
    pub seed: Option<u64>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            human_side: Side::Dark,
            engine: EngineKind::Minimax,
            seed: None,
        }
    }
}

impl DriverConfig {
    /// Parses `--depth N`, `--human dark|light`, `--engine minimax|random`
    /// and `--seed N`. Arguments exclude the program name.
    pub fn from_args<I, S>(args: I) -> CheckersResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(flag) = args.next() {
            let flag = flag.as_ref().to_owned();
            let value = args
                .next()
                .ok_or_else(|| CheckersError::InvalidArgument(format!("{flag} needs a value")))?;
            let value = value.as_ref().trim();

            match flag.as_str() {
                "--depth" | "-d" => {
                    config.depth = value.parse::<u8>().map_err(|_| {
                        CheckersError::InvalidArgument(format!("invalid depth '{value}'"))
                    })?;
                }
                "--human" => config.human_side = parse_side(value)?,
                "--engine" => config.engine = parse_engine_kind(value)?,
                "--seed" => {
                    config.seed = Some(value.parse::<u64>().map_err(|_| {
                        CheckersError::InvalidArgument(format!("invalid seed '{value}'"))
                    })?);
                }
                other => {
                    return Err(CheckersError::InvalidArgument(format!(
                        "unknown option '{other}'"
                    )))
                }
            }
        }

        Ok(config)
    }
}

fn parse_side(value: &str) -> CheckersResult<Side> {
    match value.to_ascii_lowercase().as_str() {
        "dark" | "b" | "black" => Ok(Side::Dark),
        "light" | "w" | "white" => Ok(Side::Light),
        _ => Err(CheckersError::InvalidArgument(format!(
            "invalid side '{value}'"
        ))),
    }
}

fn parse_engine_kind(value: &str) -> CheckersResult<EngineKind> {
    match value.to_ascii_lowercase().as_str() {
        "minimax" => Ok(EngineKind::Minimax),
        "random" => Ok(EngineKind::Random),
        _ => Err(CheckersError::InvalidArgument(format!(
            "invalid engine '{value}'"
        ))),
    }
}
