//! Shared types for the dispatch-tree compiler.
//!
//! The dispatch-tree compiler turns a fixed catalog of builtin names into a
//! binary decision tree that routes a candidate string to its handler using
//! three cheap probes (length, first character, last character), then emits
//! that tree as nested conditionals for the runtime's builtin lookup.
//!
//! # Architecture
//!
//! ```text
//! Catalog (validated names)
//!        ↓
//!   dtc_build::build_tree   (Split Selector + Tree Builder)
//!        ↓
//!   DecisionNode            (immutable tree, defined here)
//!        ↓
//!   dtc_emit::emit          (nested conditionals)
//! ```
//!
//! The TYPE DEFINITIONS live here so that the builder, the emitter, and the
//! driver can share them without depending on each other.

mod catalog;
mod feature;
pub mod names;
mod node;

pub use catalog::{Catalog, CatalogError};
pub use feature::{Feature, FeatureValue};
pub use node::{DecisionNode, Leaves};
