//! Expression DAG to DOT (Graphviz) conversion.
//!
//! # DOT Format
//!
//! The generated DOT output follows these conventions:
//! - **Variable leaves** are rendered as boxes labeled with the variable name,
//!   all on the bottom rank (sink)
//! - **Connective nodes** are rendered as circles labeled with their symbol
//! - **Edges** go from a connective to its children; the left (or only)
//!   child edge is solid, the right child edge is dashed, which keeps the
//!   antecedent/consequent of an implication apart
//! - **Root nodes** are rendered as rectangles at the top (source rank)
//!
//! Shared subexpressions appear once, with one incoming edge per parent.
//!
//! # Examples
//!
//! ```
//! use entail_rs::logic::Logic;
//!
//! let logic = Logic::default();
//! let p = logic.mk_var("P");
//! let q = logic.mk_var("Q");
//! let f = logic.mk_imply(p, q);
//!
//! let dot = logic.to_dot(&[f]).unwrap();
//! assert!(dot.starts_with("graph {"));
//! // Write to file and render with: dot -Tpng output.dot -o output.png
//! ```

use crate::logic::Logic;
use crate::node::Node;
use crate::reference::Ref;

/// Configuration options for DOT output generation.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for connective nodes (default: "circle")
    pub node_shape: &'static str,
    /// Shape for variable leaves (default: "box")
    pub variable_shape: &'static str,
    /// Shape for root nodes (default: "rect")
    pub root_shape: &'static str,
    /// Style for the left (or only) child edge (default: "solid")
    pub left_edge_style: &'static str,
    /// Style for the right child edge (default: "dashed")
    pub right_edge_style: &'static str,
    /// Whether root labels show the full infix formula (default: false)
    pub infix_root_labels: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            node_shape: "circle",
            variable_shape: "box",
            root_shape: "rect",
            left_edge_style: "solid",
            right_edge_style: "dashed",
            infix_root_labels: false,
        }
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

impl Logic {
    /// Converts the expressions rooted at `roots` to DOT format.
    pub fn to_dot(&self, roots: &[Ref]) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(roots, &DotConfig::default())
    }

    /// Converts the expressions rooted at `roots` to DOT format with custom configuration.
    pub fn to_dot_with_config(&self, roots: &[Ref], config: &DotConfig) -> Result<String, std::fmt::Error> {
        use std::fmt::Write as _;

        let mut dot = String::new();
        writeln!(dot, "graph {{")?;
        writeln!(dot, "node [shape={}];", config.node_shape)?;

        let all_nodes = self.descendants(roots.iter().copied());

        // Variable leaves share the bottom rank.
        writeln!(dot, "{{ rank=sink")?;
        for &f in all_nodes.iter() {
            if let Node::Var(v) = self.node(f) {
                writeln!(
                    dot,
                    "{} [shape={}, label=\"{}\"];",
                    f.get(),
                    config.variable_shape,
                    escape(&self.var_name(v))
                )?;
            }
        }
        writeln!(dot, "}}")?;

        for &f in all_nodes.iter() {
            let node = self.node(f);
            if node.is_var() {
                continue;
            }
            writeln!(dot, "{} [label=\"{}\"];", f.get(), node.symbol())?;
            for (i, child) in node.children().enumerate() {
                let style = if i == 0 {
                    config.left_edge_style
                } else {
                    config.right_edge_style
                };
                writeln!(dot, "{} -- {} [style={}];", f.get(), child.get(), style)?;
            }
        }

        writeln!(dot, "{{ rank=source")?;
        for (i, &root) in roots.iter().enumerate() {
            let label = if config.infix_root_labels {
                escape(&self.to_infix_string(root))
            } else {
                root.to_string()
            };
            writeln!(dot, "r{} [shape={}, label=\"{}\"];", i, config.root_shape, label)?;
        }
        writeln!(dot, "}}")?;

        for (i, &root) in roots.iter().enumerate() {
            writeln!(dot, "r{} -- {};", i, root.get())?;
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}
