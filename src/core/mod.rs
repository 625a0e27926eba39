//! Core types: players, configuration, RNG, errors.
//!
//! Everything the tree and solver modules share lives here. Nothing in this
//! module knows about trees.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{Reward, RewardRange, TreeConfig};
pub use error::{ConfigError, RenderError};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, RewardSource};
