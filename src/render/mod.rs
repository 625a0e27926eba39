//! Graph output for solved trees.
//!
//! - `dot`: Graphviz DOT description of the tree
//! - `graphviz`: runs the external `dot` tool to produce an image
//!
//! Nothing here feeds back into the solver; failures only affect output.

pub mod dot;
pub mod graphviz;

pub use dot::{to_dot, write_dot_file, DotStyle, DotWriter};
pub use graphviz::render;
