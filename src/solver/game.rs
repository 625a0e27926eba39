//! A generated game tree together with the stage it has reached.

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, PlayerId, PlayerMap, Reward, RewardSource, TreeConfig};
use crate::tree::{Node, TreeGenerator, TreeStats};

use super::{induction, path};

/// Processing stage of a tree. Stages only move forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Random rewards drawn, internal payoffs are placeholders.
    Generated,
    /// Backward induction has set payoffs and `is_optimal` flags.
    PayoffsFinalized,
    /// `is_on_optimal_path` has been set on every node.
    PathMarked,
}

/// A game tree and the config it was generated from.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameTree {
    config: TreeConfig,
    root: Node,
    stage: Stage,
}

impl GameTree {
    /// Validate `config` and generate a fresh tree from `rng`.
    pub fn generate(config: TreeConfig, rng: &mut impl RewardSource) -> Result<Self, ConfigError> {
        config.validate()?;
        let root = TreeGenerator::new(&config).generate_root(rng);
        Ok(Self {
            config,
            root,
            stage: Stage::Generated,
        })
    }

    /// Wrap a tree built by hand. Player 0 is taken to act at `root`.
    ///
    /// Every node must hold at least one outcome, each with one reward per
    /// configured player. The branching does not have to match the config's
    /// depth or strategy counts.
    pub fn from_root(config: TreeConfig, root: Node) -> Result<Self, ConfigError> {
        config.validate()?;
        check_outcomes(&root, config.player_count, &mut 0)?;
        Ok(Self {
            config,
            root,
            stage: Stage::Generated,
        })
    }

    /// Run backward induction if it has not run yet.
    pub fn backward_induction(&mut self) {
        if self.stage >= Stage::PayoffsFinalized {
            return;
        }
        induction::solve(&mut self.root, 0, self.config.player_count);
        self.stage = Stage::PayoffsFinalized;
        log::debug!(
            "backward induction done: {} root outcome(s)",
            self.root.tie_count()
        );
    }

    /// Mark optimal paths, running backward induction first if needed.
    pub fn mark_optimal_paths(&mut self) {
        self.backward_induction();
        if self.stage >= Stage::PathMarked {
            return;
        }
        let reachable = path::mark(&mut self.root, PlayerId::new(0), self.config.player_count);
        self.stage = Stage::PathMarked;
        log::debug!("optimal paths marked: root reachable {}", reachable);
    }

    /// Bring the tree to [`Stage::PathMarked`].
    pub fn solve(&mut self) {
        self.mark_optimal_paths();
    }

    #[must_use]
    pub fn root(&self) -> &Node {
        &self.root
    }

    #[must_use]
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The root's payoff sequences, one per player.
    #[must_use]
    pub fn game_values(&self) -> GameValues {
        GameValues(PlayerMap::new(self.config.player_count, |player| {
            self.root.values(player).collect()
        }))
    }

    #[must_use]
    pub fn stats(&self) -> TreeStats {
        TreeStats::collect(&self.root)
    }
}

/// Check every node's outcomes against `player_count`. Nodes are numbered in
/// pre-order, matching the DOT output.
fn check_outcomes(node: &Node, player_count: usize, next_id: &mut usize) -> Result<(), ConfigError> {
    let id = *next_id;
    *next_id += 1;

    if node.payoffs.is_empty() {
        return Err(ConfigError::EmptyPayoffs { node: id });
    }
    if let Some(outcome) = node
        .outcomes()
        .iter()
        .find(|o| o.player_count() != player_count)
    {
        return Err(ConfigError::OutcomeSizeMismatch {
            node: id,
            expected: player_count,
            got: outcome.player_count(),
        });
    }

    node.children
        .iter()
        .try_for_each(|child| check_outcomes(child, player_count, next_id))
}

/// Per-player value sequences at the root.
///
/// Displays one line per player:
///
/// ```text
/// Player 1: 10 10
/// Player 2: 3 7
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameValues(pub PlayerMap<Vec<Reward>>);

impl GameValues {
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &[Reward] {
        &self.0[player]
    }
}

impl std::fmt::Display for GameValues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (player, values) in self.0.iter() {
            let joined = values
                .iter()
                .map(Reward::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}: {}", player, joined)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    fn tie_tree() -> GameTree {
        let root = Node::with_children(
            PlayerMap::from_vec(vec![0, 0]),
            vec![Node::leaf([10, 3]), Node::leaf([10, 7])],
        );
        GameTree::from_root(TreeConfig::new(2), root).unwrap()
    }

    #[test]
    fn test_generate_rejects_invalid_config() {
        let result = GameTree::generate(TreeConfig::new(1), &mut GameRng::new(42));
        assert!(matches!(result, Err(ConfigError::TooFewPlayers(1))));
    }

    #[test]
    fn test_from_root_rejects_short_outcomes() {
        let root = Node::with_children(
            PlayerMap::from_vec(vec![0, 0, 0]),
            vec![Node::leaf([10, 3]), Node::leaf([10, 7])],
        );
        let err = GameTree::from_root(TreeConfig::new(3), root).unwrap_err();

        assert!(matches!(
            err,
            ConfigError::OutcomeSizeMismatch { node: 1, expected: 3, got: 2 }
        ));
        assert_eq!(err.to_string(), "node 1 has an outcome for 2 players, expected 3");
    }

    #[test]
    fn test_from_root_rejects_empty_payoffs() {
        let mut root = Node::with_children(
            PlayerMap::from_vec(vec![0, 0]),
            vec![Node::leaf([1, 2]), Node::leaf([3, 4])],
        );
        root.children[1].payoffs.clear();

        let err = GameTree::from_root(TreeConfig::new(2), root).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPayoffs { node: 2 }));
    }

    #[test]
    fn test_stages_advance_in_order() {
        let mut tree = GameTree::generate(TreeConfig::default(), &mut GameRng::new(42)).unwrap();
        assert_eq!(tree.stage(), Stage::Generated);

        tree.backward_induction();
        assert_eq!(tree.stage(), Stage::PayoffsFinalized);
        assert!(!tree.root().is_on_optimal_path);

        tree.mark_optimal_paths();
        assert_eq!(tree.stage(), Stage::PathMarked);
        assert!(tree.root().is_on_optimal_path);
    }

    #[test]
    fn test_marking_runs_induction_first() {
        let mut tree = tie_tree();
        tree.mark_optimal_paths();

        assert_eq!(tree.stage(), Stage::PathMarked);
        assert!(tree.root().children.iter().all(|c| c.is_optimal));
    }

    #[test]
    fn test_solve_is_idempotent() {
        let mut tree = GameTree::generate(TreeConfig::default(), &mut GameRng::new(7)).unwrap();
        tree.solve();
        let once = tree.root().clone();

        tree.solve();
        assert_eq!(tree.root(), &once);
    }

    #[test]
    fn test_game_values_display() {
        let mut tree = tie_tree();
        tree.solve();

        let values = tree.game_values();
        assert_eq!(values.get(PlayerId::new(0)), &[10, 10]);
        assert_eq!(values.get(PlayerId::new(1)), &[3, 7]);
        assert_eq!(values.to_string(), "Player 1: 10 10\nPlayer 2: 3 7\n");
    }

    #[test]
    fn test_snapshot_serialization() {
        let mut tree = tie_tree();
        tree.solve();

        let json = serde_json::to_string(&tree).unwrap();
        let restored: GameTree = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.stage(), Stage::PathMarked);
        assert_eq!(restored.root(), tree.root());
        assert_eq!(restored.config(), tree.config());
    }
}
