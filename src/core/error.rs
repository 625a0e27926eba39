//! Error types for configuration and rendering.
//!
//! Tree generation, backward induction, and path marking cannot fail once a
//! configuration has been validated, so they have no error type.

use std::path::PathBuf;

use thiserror::Error;

use super::config::Reward;

/// A configuration that cannot produce a well-formed game tree, or a
/// hand-built tree that does not fit its configuration.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("at least 2 players are required, got {0}")]
    TooFewPlayers(usize),

    #[error("at most 255 players are supported, got {0}")]
    TooManyPlayers(usize),

    #[error("expected one strategy count per player ({expected}), got {got}")]
    StrategyCountMismatch { expected: usize, got: usize },

    #[error("player {player} has no strategies")]
    NoStrategies { player: usize },

    #[error("empty reward range: min {min} is greater than max {max}")]
    EmptyRewardRange { min: Reward, max: Reward },

    #[error("node {node} has no payoffs")]
    EmptyPayoffs { node: usize },

    #[error("node {node} has an outcome for {got} players, expected {expected}")]
    OutcomeSizeMismatch {
        node: usize,
        expected: usize,
        got: usize,
    },

    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure while writing or rendering a graph description.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RenderError {
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}
