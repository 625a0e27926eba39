//! Tree configuration.
//!
//! A `TreeConfig` fixes the shape of every generated tree:
//! - `depth`: number of plies below the root
//! - `player_count`: players taking turns, player 0 first
//! - `reward_range`: inclusive bounds for random leaf rewards
//! - `strategy_counts`: branching factor when each player acts
//!
//! The config is an immutable value handed to the generator. Call
//! [`TreeConfig::validate`] before generating; the core algorithms assume a
//! valid config and do not re-check it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::{PlayerId, PlayerMap};

/// Integer reward received by one player at one outcome.
pub type Reward = i32;

/// Inclusive reward bounds `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardRange {
    pub min: Reward,
    pub max: Reward,
}

impl RewardRange {
    #[must_use]
    pub const fn new(min: Reward, max: Reward) -> Self {
        Self { min, max }
    }

    /// Does the range contain `value`?
    #[must_use]
    pub fn contains(&self, value: Reward) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for RewardRange {
    fn default() -> Self {
        Self::new(0, 50)
    }
}

/// Complete tree configuration.
///
/// Defaults describe a 3-player game, 5 plies deep, rewards in `0..=50`,
/// two strategies per player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Plies below the root. Zero means the root is a leaf.
    pub depth: usize,

    /// Number of players (2-255).
    pub player_count: usize,

    /// Inclusive bounds for generated rewards.
    pub reward_range: RewardRange,

    /// Branching factor when each player acts, indexed by player.
    pub strategy_counts: PlayerMap<usize>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self::new(3).with_depth(5)
    }
}

impl TreeConfig {
    /// Create a configuration for `player_count` players.
    ///
    /// Starts with depth 1, rewards `0..=50`, and two strategies per player.
    pub fn new(player_count: usize) -> Self {
        Self {
            depth: 1,
            player_count,
            reward_range: RewardRange::default(),
            strategy_counts: PlayerMap::from_vec(vec![2; player_count]),
        }
    }

    /// Set the tree depth.
    #[must_use]
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Set the inclusive reward bounds.
    #[must_use]
    pub fn with_reward_range(mut self, min: Reward, max: Reward) -> Self {
        self.reward_range = RewardRange::new(min, max);
        self
    }

    /// Replace the whole strategy table, one entry per player.
    #[must_use]
    pub fn with_strategy_counts(mut self, counts: impl Into<Vec<usize>>) -> Self {
        self.strategy_counts = PlayerMap::from_vec(counts.into());
        self
    }

    /// Set one player's strategy count.
    ///
    /// Unknown players are ignored here and reported by `validate`
    /// only if the table itself is inconsistent.
    #[must_use]
    pub fn with_strategies(mut self, player: PlayerId, count: usize) -> Self {
        if let Some(slot) = self.strategy_counts.get_mut(player) {
            *slot = count;
        }
        self
    }

    /// Branching factor when `player` acts.
    ///
    /// # Panics
    ///
    /// Panics if `player` is outside the configured strategy table.
    #[must_use]
    pub fn strategies(&self, player: PlayerId) -> usize {
        self.strategy_counts[player]
    }

    /// Reject configurations that cannot produce a well-formed tree.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_count < 2 {
            return Err(ConfigError::TooFewPlayers(self.player_count));
        }
        if self.player_count > 255 {
            return Err(ConfigError::TooManyPlayers(self.player_count));
        }
        if self.strategy_counts.player_count() != self.player_count {
            return Err(ConfigError::StrategyCountMismatch {
                expected: self.player_count,
                got: self.strategy_counts.player_count(),
            });
        }
        if let Some((player, _)) = self.strategy_counts.iter().find(|(_, &count)| count == 0) {
            return Err(ConfigError::NoStrategies {
                player: player.index(),
            });
        }
        if self.reward_range.min > self.reward_range.max {
            return Err(ConfigError::EmptyRewardRange {
                min: self.reward_range.min,
                max: self.reward_range.max,
            });
        }
        Ok(())
    }

    /// Load and validate a JSON configuration file.
    ///
    /// Missing fields fall back to [`TreeConfig::default`], except that a file
    /// setting `player_count` without `strategy_counts` gets two strategies
    /// per player.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let config = file.into_config();
        config.validate()?;
        Ok(config)
    }

    /// Number of nodes a tree generated from this config will contain.
    ///
    /// Assumes a valid config.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut total = 1;
        let mut level = 1;
        for ply in 0..self.depth {
            level *= self.strategies(PlayerId::acting_at(ply, self.player_count));
            total += level;
        }
        total
    }
}

/// On-disk form of [`TreeConfig`] where every field is optional.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    depth: Option<usize>,
    player_count: Option<usize>,
    reward_range: Option<RewardRange>,
    strategy_counts: Option<Vec<usize>>,
}

impl ConfigFile {
    fn into_config(self) -> TreeConfig {
        let defaults = TreeConfig::default();
        let mut config = match self.player_count {
            // A new player count needs its own strategy table
            Some(players) => TreeConfig::new(players).with_depth(defaults.depth),
            None => defaults,
        };
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(range) = self.reward_range {
            config.reward_range = range;
        }
        if let Some(counts) = self.strategy_counts {
            config = config.with_strategy_counts(counts);
        }
        config
    }
}
