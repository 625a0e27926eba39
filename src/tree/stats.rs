//! Summary statistics over a (possibly solved) game tree.

use serde::{Deserialize, Serialize};

use super::node::Node;

/// Statistics about a game tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Number of leaves.
    pub leaf_count: usize,

    /// Plies from the root to the deepest leaf.
    pub height: usize,

    /// Edges whose child is flagged optimal.
    pub optimal_edges: usize,

    /// Leaves reachable from the root through optimal edges only.
    pub equilibrium_leaves: usize,

    /// Outcomes held at the root.
    pub root_outcomes: usize,
}

impl TreeStats {
    /// Collect statistics for the tree rooted at `root`.
    #[must_use]
    pub fn collect(root: &Node) -> Self {
        let mut stats = Self {
            root_outcomes: root.tie_count(),
            ..Self::default()
        };
        stats.visit(root, 0, true);
        stats
    }

    fn visit(&mut self, node: &Node, depth: usize, on_equilibrium: bool) {
        self.node_count += 1;
        self.height = self.height.max(depth);

        if node.is_leaf() {
            self.leaf_count += 1;
            if on_equilibrium {
                self.equilibrium_leaves += 1;
            }
            return;
        }

        for child in &node.children {
            if child.is_optimal {
                self.optimal_edges += 1;
            }
            self.visit(child, depth + 1, on_equilibrium && child.is_optimal);
        }
    }

    /// Average children per internal node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        let internal = self.node_count - self.leaf_count;
        if internal == 0 {
            0.0
        } else {
            (self.node_count - 1) as f64 / internal as f64
        }
    }
}

impl std::fmt::Display for TreeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} nodes, {} leaves, height {}, {} optimal edges, {} equilibrium leaves",
            self.node_count, self.leaf_count, self.height, self.optimal_edges, self.equilibrium_leaves
        )
    }
}
