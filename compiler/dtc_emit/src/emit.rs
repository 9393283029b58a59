//! Tree walk producing nested conditionals.

use dtc_ir::{DecisionNode, Feature, FeatureValue};

use crate::render::LeafRenderer;
use crate::writer::{CodeWriter, Layout};

/// Statement closing every dispatch fragment: the name is not a builtin.
pub const FALLBACK: &str = "return nullptr;";

/// Emit `tree` into `out`.
///
/// For a split, the right subtree (`probe > threshold`) is nested inside the
/// guard and the left subtree follows it directly. There is no `else`: every
/// leaf branch returns, so falling out of the guard means the probe was
/// `<= threshold`. The fragment is not exhaustive; see [`emit_dispatch`].
pub fn emit<R: LeafRenderer + ?Sized>(tree: &DecisionNode, renderer: &R, out: &mut CodeWriter) {
    match tree {
        DecisionNode::Leaf { names } => renderer.render_leaf(names, out),
        DecisionNode::Split {
            feature,
            threshold,
            left,
            right,
        } => {
            out.open_guard(&guard(*feature, *threshold));
            emit(right, renderer, out);
            out.close_guard();
            emit(left, renderer, out);
        }
    }
}

/// Emit `tree` followed by [`FALLBACK`], returning the complete fragment.
pub fn emit_dispatch<R: LeafRenderer + ?Sized>(
    tree: &DecisionNode,
    renderer: &R,
    layout: Layout,
) -> String {
    let mut out = CodeWriter::new(layout);
    emit(tree, renderer, &mut out);
    out.statement(FALLBACK);
    let code = out.take_output();
    tracing::debug!(bytes = code.len(), ?layout, "emitted dispatch fragment");
    code
}

/// `probe > threshold`, with character thresholds as C char literals.
pub(crate) fn guard(feature: Feature, threshold: FeatureValue) -> String {
    let probe = feature.probe();
    if feature.is_char() {
        format!("{probe} > {}", char_literal(threshold))
    } else {
        format!("{probe} > {threshold}")
    }
}

/// C character literal for a code point.
///
/// Printable ASCII is written as-is (quote and backslash escaped); anything
/// else uses a hex escape. Thresholds come from ASCII names
/// ([`Catalog`](dtc_ir::Catalog) and `build_tree` reject anything else), so
/// the escape always fits in one byte.
pub(crate) fn char_literal(code: FeatureValue) -> String {
    match char::from_u32(code) {
        Some('\'') => "'\\''".to_string(),
        Some('\\') => "'\\\\'".to_string(),
        Some(c) if c.is_ascii_graphic() || c == ' ' => format!("'{c}'"),
        _ => format!("'\\x{code:02x}'"),
    }
}
