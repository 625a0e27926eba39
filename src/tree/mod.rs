//! Game tree data model and random generation.
//!
//! Trees are plain owned recursion: each [`Node`] owns its children, and the
//! root owns the whole tree. Generation never fails once the config has been
//! validated.

pub mod generator;
pub mod node;
pub mod stats;

pub use generator::TreeGenerator;
pub use node::{Node, Outcome, Outcomes};
pub use stats::TreeStats;
