//! Graphviz DOT output for solved trees.
//!
//! Layout:
//! - one plaintext `levelN` node per ply, labelled with the player acting there
//! - tree nodes numbered `node0, node1, ...` in pre-order
//! - each tree node grouped with its level via `rank = same`
//! - labels list every player's values as `({a, b}, {c, d})`; the values of
//!   the player who chose this node are colored
//! - edges to optimal children are colored, with a separate color when the
//!   child is also on an optimal path

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, RenderError};
use crate::solver::GameTree;
use crate::tree::Node;

/// Colors used in the graph description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotStyle {
    /// Values of the player who acted at the parent.
    pub mover_color: String,
    /// Edge to an optimal child that is on an optimal path.
    pub equilibrium_color: String,
    /// Edge to an optimal child that is not on an optimal path.
    pub optimal_color: String,
}

impl Default for DotStyle {
    fn default() -> Self {
        Self {
            mover_color: "blue".into(),
            equilibrium_color: "red".into(),
            optimal_color: "green".into(),
        }
    }
}

/// Streams a tree as DOT into any writer.
pub struct DotWriter<'a, W: Write> {
    out: W,
    style: &'a DotStyle,
    player_count: usize,
    next_id: usize,
}

impl<'a, W: Write> DotWriter<'a, W> {
    pub fn new(out: W, style: &'a DotStyle, player_count: usize) -> Self {
        Self {
            out,
            style,
            player_count,
            next_id: 0,
        }
    }

    /// Write a complete `digraph` for the tree rooted at `root`.
    pub fn write(mut self, root: &Node) -> io::Result<W> {
        writeln!(self.out, "digraph tree {{")?;
        for level in 0..root.height() {
            writeln!(
                self.out,
                "level{} [label=\"{}\", shape=plaintext];",
                level,
                PlayerId::acting_at(level, self.player_count)
            )?;
        }
        self.write_node(root, None, 0)?;
        writeln!(self.out, "}}")?;
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_node(&mut self, node: &Node, parent: Option<&str>, depth: usize) -> io::Result<()> {
        let name = format!("node{}", self.next_id);
        self.next_id += 1;

        if let Some(parent) = parent {
            write!(self.out, "{} -> {}", parent, name)?;
            if node.is_optimal {
                let color = if node.is_on_optimal_path {
                    &self.style.equilibrium_color
                } else {
                    &self.style.optimal_color
                };
                write!(self.out, " [color=\"{}\"]", color)?;
            }
            writeln!(self.out, ";")?;
        }

        writeln!(self.out, "{} [label=<{}>];", name, self.label(node, depth))?;
        writeln!(self.out, "{{ rank = same; level{}; {}; }}", depth, name)?;

        for child in &node.children {
            self.write_node(child, Some(&name), depth + 1)?;
        }
        Ok(())
    }

    fn label(&self, node: &Node, depth: usize) -> String {
        // The root was chosen by nobody
        let mover = depth
            .checked_sub(1)
            .map(|ply| PlayerId::acting_at(ply, self.player_count));

        let groups = PlayerId::all(self.player_count)
            .map(|player| {
                let values = node
                    .values(player)
                    .map(|value| {
                        if Some(player) == mover {
                            format!("<font color=\"{}\">{}</font>", self.style.mover_color, value)
                        } else {
                            value.to_string()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{{{}}}", values)
            })
            .collect::<Vec<_>>()
            .join(", ");

        format!("({})", groups)
    }
}

/// Render a tree to a DOT string.
#[must_use]
pub fn to_dot(tree: &GameTree, style: &DotStyle) -> String {
    let bytes = DotWriter::new(Vec::new(), style, tree.config().player_count)
        .write(tree.root())
        .unwrap_or_default();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Write a tree's DOT description to `path`.
pub fn write_dot_file(
    tree: &GameTree,
    style: &DotStyle,
    path: impl AsRef<Path>,
) -> Result<(), RenderError> {
    let path = path.as_ref();
    let to_error = |source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    DotWriter::new(BufWriter::new(file), style, tree.config().player_count)
        .write(tree.root())
        .map_err(to_error)?;

    log::info!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerMap, TreeConfig};

    fn solved(root: Node) -> GameTree {
        let mut tree = GameTree::from_root(TreeConfig::new(2), root).unwrap();
        tree.solve();
        tree
    }

    #[test]
    fn test_single_leaf() {
        let tree = solved(Node::leaf([4, 2]));
        let dot = to_dot(&tree, &DotStyle::default());

        assert_eq!(
            dot,
            "digraph tree {\n\
             node0 [label=<({4}, {2})>];\n\
             { rank = same; level0; node0; }\n\
             }\n"
        );
    }

    #[test]
    fn test_tie_scenario() {
        let tree = solved(Node::with_children(
            PlayerMap::from_vec(vec![0, 0]),
            vec![Node::leaf([10, 3]), Node::leaf([10, 7])],
        ));
        let dot = to_dot(&tree, &DotStyle::default());

        assert!(dot.starts_with("digraph tree {\nlevel0 [label=\"Player 1\", shape=plaintext];\n"));
        assert!(dot.contains("node0 [label=<({10, 10}, {3, 7})>];"));
        assert!(dot.contains("node0 -> node1 [color=\"red\"];"));
        assert!(dot.contains("node0 -> node2 [color=\"red\"];"));
        assert!(dot.contains(
            "node1 [label=<({<font color=\"blue\">10</font>}, {3})>];"
        ));
        assert!(dot.contains("{ rank = same; level1; node2; }"));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn test_edge_colors() {
        let mut root = Node::with_children(
            PlayerMap::from_vec(vec![0, 0]),
            vec![
                Node::leaf([1, 1]),
                Node::with_children(PlayerMap::from_vec(vec![0, 0]), vec![Node::leaf([2, 2])]),
                Node::leaf([3, 3]),
            ],
        );
        root.children[1].is_optimal = true;
        root.children[2].is_optimal = true;
        root.children[2].is_on_optimal_path = true;

        let mut buf = Vec::new();
        let style = DotStyle::default();
        DotWriter::new(&mut buf, &style, 2).write(&root).unwrap();
        let dot = String::from_utf8(buf).unwrap();

        assert!(dot.contains("node0 -> node1;"));
        assert!(dot.contains("node0 -> node2 [color=\"green\"];"));
        assert!(dot.contains("node2 -> node3;"));
        assert!(dot.contains("node0 -> node4 [color=\"red\"];"));
    }

    #[test]
    fn test_mover_follows_depth() {
        // Three players: level 2 nodes were chosen by player 2
        let config = TreeConfig::new(3).with_strategy_counts(vec![1, 1, 1]).with_depth(2);
        let root = Node::with_children(
            PlayerMap::from_vec(vec![0, 0, 0]),
            vec![Node::with_children(
                PlayerMap::from_vec(vec![0, 0, 0]),
                vec![Node::leaf([1, 2, 3])],
            )],
        );
        let mut tree = GameTree::from_root(config, root).unwrap();
        tree.solve();

        let style = DotStyle {
            mover_color: "orange".into(),
            ..DotStyle::default()
        };
        let dot = to_dot(&tree, &style);

        assert!(dot.contains("level1 [label=\"Player 2\", shape=plaintext];"));
        assert!(dot.contains("node2 [label=<({1}, {<font color=\"orange\">2</font>}, {3})>];"));
    }

    #[test]
    fn test_write_dot_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.dot");
        let tree = solved(Node::leaf([1, 2]));

        write_dot_file(&tree, &DotStyle::default(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_dot(&tree, &DotStyle::default()));
    }

    #[test]
    fn test_write_dot_file_reports_path() {
        let tree = solved(Node::leaf([1, 2]));
        let err = write_dot_file(&tree, &DotStyle::default(), "/nonexistent/dir/tree.dot")
            .unwrap_err();

        assert!(matches!(err, RenderError::Write { .. }));
        assert!(err.to_string().contains("/nonexistent/dir/tree.dot"));
    }
}
