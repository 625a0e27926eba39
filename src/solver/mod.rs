//! Backward induction and optimal-path marking.
//!
//! ## Overview
//!
//! Solving a tree is two sequential passes over the owned tree:
//!
//! 1. [`induction::solve`]: post-order. Each acting player keeps every
//!    outcome that maximizes their own reward and flags the children that
//!    produced them.
//! 2. [`path::mark`]: pre-order over optimal children only. Records which
//!    nodes reach a leaf through optimal choices alone.
//!
//! [`GameTree`] wraps a root with its config and runs the passes in order.
//!
//! ## Usage
//!
//! ```rust
//! use rust_gametree::core::{GameRng, TreeConfig};
//! use rust_gametree::solver::GameTree;
//!
//! let config = TreeConfig::new(2).with_depth(4);
//! let mut tree = GameTree::generate(config, &mut GameRng::new(42)).unwrap();
//! tree.solve();
//!
//! assert!(tree.root().is_on_optimal_path);
//! print!("{}", tree.game_values());
//! ```

pub mod game;
pub mod induction;
pub mod path;

pub use game::{GameTree, GameValues, Stage};
pub use induction::solve;
pub use path::mark;
