//! Backward induction with tie tracking.
//!
//! Post-order: every child is solved before its parent. At an internal node
//! the acting player picks the children whose outcomes maximize their own
//! reward. Every outcome attaining that maximum is lifted to the parent, in
//! child order and then outcome order, so ancestors see every rational
//! continuation instead of an arbitrary one.

use std::cmp::Ordering;

use smallvec::{smallvec, SmallVec};

use crate::core::{PlayerId, Reward};
use crate::tree::{Node, Outcomes};

/// Solve the subtree at `node`, which sits `depth` plies below the root.
///
/// Overwrites `node.payoffs` and every child's `is_optimal` flag. Leaves are
/// left untouched.
pub fn solve(node: &mut Node, depth: usize, player_count: usize) {
    if node.is_leaf() {
        return;
    }

    for child in &mut node.children {
        solve(child, depth + 1, player_count);
    }

    let player = PlayerId::acting_at(depth, player_count);
    let mut best: Option<Reward> = None;
    let mut payoffs = Outcomes::new();
    let mut optimal: SmallVec<[bool; 8]> = smallvec![false; node.children.len()];

    for (i, child) in node.children.iter().enumerate() {
        for outcome in child.outcomes() {
            let value = outcome[player];
            match best.map(|max| value.cmp(&max)) {
                None | Some(Ordering::Greater) => {
                    // New sole maximum: drop every earlier candidate
                    optimal.iter_mut().for_each(|flag| *flag = false);
                    payoffs.clear();
                    optimal[i] = true;
                    payoffs.push(outcome.clone());
                    best = Some(value);
                }
                Some(Ordering::Equal) => {
                    optimal[i] = true;
                    payoffs.push(outcome.clone());
                }
                Some(Ordering::Less) => {}
            }
        }
    }

    for (child, flag) in node.children.iter_mut().zip(optimal) {
        child.is_optimal = flag;
    }

    log::trace!(
        "depth {}: {} picks {:?} with {} tied outcome(s)",
        depth,
        player,
        best,
        payoffs.len()
    );
    node.payoffs = payoffs;
}
