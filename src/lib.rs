//! # rust-gametree
//!
//! Randomized N-player extensive-form game trees solved by backward induction.
//!
//! ## Design Principles
//!
//! 1. **N-Player First**: Every API takes `player_count` as context.
//!    Player 0 acts at the root and turns cycle through all players.
//!
//! 2. **Configuration Over Constants**: Depth, players, reward range, and
//!    branching per player come from a validated `TreeConfig`.
//!
//! 3. **Ties Are Kept**: When several continuations maximize the acting
//!    player's reward, all of them are propagated upward as separate
//!    outcomes, never an arbitrary one.
//!
//! ## Pipeline
//!
//! Generate → backward induction → optimal-path marking, each exactly once
//! per tree. [`GameTree`] tracks which stage a tree has reached.
//!
//! ## Modules
//!
//! - `core`: Players, configuration, RNG, errors
//! - `tree`: Node data model, random generation, statistics
//! - `solver`: Backward induction, optimal-path marking, `GameTree`
//! - `render`: Graphviz DOT output and `dot` invocation

pub mod core;
pub mod render;
pub mod solver;
pub mod tree;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameRng, PlayerId, PlayerMap, RenderError, Reward, RewardRange, RewardSource,
    TreeConfig,
};

pub use crate::tree::{Node, Outcome, TreeGenerator, TreeStats};

pub use crate::solver::{GameTree, GameValues, Stage};

pub use crate::render::{DotStyle, DotWriter};
