//! Game tree node.
//!
//! A node's payoffs are a list of *outcomes*, each outcome holding one reward
//! per player. Leaves hold exactly one outcome. After backward induction an
//! internal node holds every outcome that ties for the acting player's
//! maximum, in discovery order. Storing whole outcomes keeps position `j` of
//! every player's value sequence aligned without extra bookkeeping.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::core::{PlayerId, PlayerMap, Reward};

/// One reward per player for a single terminal history.
pub type Outcome = PlayerMap<Reward>;

/// Outcomes stored at a node. Ties are rare, so one inline slot.
pub type Outcomes = SmallVec<[Outcome; 1]>;

/// A decision point or leaf in the game tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Candidate outcomes, never empty.
    pub payoffs: Outcomes,

    /// Subgames reachable from this node, in strategy order. Empty iff leaf.
    pub children: Vec<Node>,

    /// Chosen by the player acting at the parent. Always false at the root.
    pub is_optimal: bool,

    /// Some chain of optimal children from here reaches a leaf.
    pub is_on_optimal_path: bool,
}

impl Node {
    /// Create a leaf holding a single outcome.
    ///
    /// A leaf trivially reaches a leaf, so it starts on an optimal path.
    pub fn new(outcome: Outcome) -> Self {
        Self {
            payoffs: smallvec![outcome],
            children: Vec::new(),
            is_optimal: false,
            is_on_optimal_path: true,
        }
    }

    /// Create a leaf from rewards listed in player order.
    ///
    /// ```
    /// use rust_gametree::core::PlayerId;
    /// use rust_gametree::tree::Node;
    ///
    /// let leaf = Node::leaf([10, 3]);
    /// assert!(leaf.is_leaf());
    /// assert_eq!(leaf.values(PlayerId::new(1)).collect::<Vec<_>>(), vec![3]);
    /// ```
    pub fn leaf(rewards: impl Into<Vec<Reward>>) -> Self {
        Self::new(PlayerMap::from_vec(rewards.into()))
    }

    /// Create an internal node with a placeholder outcome.
    ///
    /// An empty `children` list produces a leaf.
    pub fn with_children(placeholder: Outcome, children: Vec<Node>) -> Self {
        let is_on_optimal_path = children.is_empty();
        Self {
            payoffs: smallvec![placeholder],
            children,
            is_optimal: false,
            is_on_optimal_path,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of players recorded in this node's outcomes.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.payoffs.first().map_or(0, PlayerMap::player_count)
    }

    /// All stored outcomes, in discovery order.
    #[must_use]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.payoffs
    }

    /// One player's value sequence, index-aligned with every other player's.
    pub fn values(&self, player: PlayerId) -> impl Iterator<Item = Reward> + '_ {
        self.payoffs.iter().map(move |outcome| outcome[player])
    }

    /// Number of tied outcomes held at this node.
    #[must_use]
    pub fn tie_count(&self) -> usize {
        self.payoffs.len()
    }

    /// Children flagged optimal for the player acting here.
    pub fn optimal_children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(|c| c.is_optimal)
    }

    /// Plies between this node and its deepest leaf.
    #[must_use]
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.height() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Total number of nodes in this subtree, including itself.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }
}
