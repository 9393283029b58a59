//! Human-readable tree dump for `dtc dump`.

use std::fmt::Write;

use dtc_ir::DecisionNode;

use crate::emit::{char_literal, guard};

/// Render `tree` as an indented outline, `<=` branch before `>` branch:
///
/// ```text
/// length <= 1
///   [a]
/// length > 1
///   [bb]
/// ```
pub fn dump(tree: &DecisionNode) -> String {
    let mut out = String::new();
    dump_node(tree, 0, &mut out);
    out
}

fn dump_node(node: &DecisionNode, depth: usize, out: &mut String) {
    let pad = "  ".repeat(depth);
    match node {
        DecisionNode::Leaf { names } => {
            let _ = writeln!(out, "{pad}[{}]", names.join(", "));
        }
        DecisionNode::Split {
            feature,
            threshold,
            left,
            right,
        } => {
            let bound = if feature.is_char() {
                char_literal(*threshold)
            } else {
                threshold.to_string()
            };
            let _ = writeln!(out, "{pad}{} <= {bound}", feature.probe());
            dump_node(left, depth + 1, out);
            let _ = writeln!(out, "{pad}{}", guard(*feature, *threshold));
            dump_node(right, depth + 1, out);
        }
    }
}
