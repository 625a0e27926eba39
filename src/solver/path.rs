//! Optimal-path marking.
//!
//! Runs after backward induction. A node is on an optimal path when some
//! chain of `is_optimal` children leads from it to a leaf. Every node is
//! visited, including subtrees below non-optimal edges, but only optimal
//! children contribute to their parent's flag.

use crate::core::PlayerId;
use crate::tree::Node;

/// Mark the subtree at `node`, where `player` acts. Returns the node's flag.
///
/// Every child is marked, even after an optimal one has already been found
/// on an optimal path.
pub fn mark(node: &mut Node, player: PlayerId, player_count: usize) -> bool {
    if node.is_leaf() {
        node.is_on_optimal_path = true;
        return true;
    }

    let next = player.next(player_count);
    let mut reachable = false;
    for child in &mut node.children {
        let child_reachable = mark(child, next, player_count);
        if child.is_optimal && child_reachable {
            reachable = true;
        }
    }

    log::trace!("{} node on optimal path: {}", player, reachable);
    node.is_on_optimal_path = reachable;
    reachable
}
