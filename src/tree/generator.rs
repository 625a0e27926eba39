//! Random game tree generation.
//!
//! Every node draws one reward per player. Leaves keep those rewards; internal
//! nodes keep them only as placeholders until backward induction overwrites
//! them. Turn order cycles through the players regardless of what is drawn.

use crate::core::{PlayerId, PlayerMap, RewardSource, TreeConfig};

use super::node::Node;

/// Builds trees shaped by a validated [`TreeConfig`].
#[derive(Clone, Copy, Debug)]
pub struct TreeGenerator<'a> {
    config: &'a TreeConfig,
}

impl<'a> TreeGenerator<'a> {
    /// Create a generator for `config`.
    ///
    /// The config must already have passed [`TreeConfig::validate`].
    #[must_use]
    pub fn new(config: &'a TreeConfig) -> Self {
        Self { config }
    }

    /// Generate the full tree: player 0 acts at the root, `config.depth` plies.
    pub fn generate_root(&self, rng: &mut impl RewardSource) -> Node {
        let root = self.generate(PlayerId::new(0), self.config.depth, rng);
        log::debug!(
            "generated tree: depth {}, {} nodes",
            self.config.depth,
            root.node_count()
        );
        root
    }

    /// Generate a subtree where `player` acts and `depth_remaining` plies follow.
    ///
    /// Rewards are drawn in pre-order, players in index order within a node.
    pub fn generate(
        &self,
        player: PlayerId,
        depth_remaining: usize,
        rng: &mut impl RewardSource,
    ) -> Node {
        let range = self.config.reward_range;
        let outcome = PlayerMap::new(self.config.player_count, |_| rng.draw(range));

        if depth_remaining == 0 {
            return Node::new(outcome);
        }

        let next = player.next(self.config.player_count);
        let children = (0..self.config.strategies(player))
            .map(|_| self.generate(next, depth_remaining - 1, rng))
            .collect();

        Node::with_children(outcome, children)
    }
}
