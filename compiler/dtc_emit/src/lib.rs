//! Code emission for dispatch trees.
//!
//! Renders a [`DecisionNode`] as nested `if` statements over four locals the
//! enclosing runtime function declares:
//!
//! ```text
//! const std::string_view& view = name.view();
//! const char first_char = view.front();
//! const char last_char = view.back();
//! const std::size_t length = view.size();
//! ```
//!
//! # Shape
//!
//! A `Split` becomes a guard `probe > threshold` containing the right
//! subtree, followed by the left subtree with no `else`. Every leaf branch
//! returns, so control reaches the left subtree only when the guard fails.
//! A `Leaf` becomes one `if (view == "...")` per name, rendered by a
//! [`LeafRenderer`]. The caller terminates the fragment with [`FALLBACK`]
//! (done by [`emit_dispatch`]).
//!
//! # Layouts
//!
//! - [`Layout::Compact`]: everything on one line, the artifact format
//!   downstream tooling diffs against.
//! - [`Layout::Pretty`]: one statement per line, Allman braces, for splicing
//!   into hand-maintained source.

mod dump;
mod emit;
mod render;
mod writer;

pub use dump::dump;
pub use emit::{emit, emit_dispatch, FALLBACK};
pub use render::{CallForm, DirectCall, FactoryCall, LeafRenderer, UnknownCallForm};
pub use writer::{CodeWriter, Layout};

pub use dtc_ir::DecisionNode;
