//! Tree Builder: recursive partitioning of a name subset.

use dtc_ir::{Catalog, DecisionNode, Feature, FeatureValue};
use thiserror::Error;

use crate::split::{find_split, SplitCandidate};
use crate::stack::ensure_sufficient_stack;
use crate::stats::TreeStats;

/// Input that cannot be turned into a dispatch tree.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("cannot build a dispatch tree from an empty catalog")]
    EmptyCatalog,

    #[error("name at position {index} is empty")]
    EmptyName { index: usize },

    #[error("name `{name}` at position {index} is not ASCII")]
    NonAscii { index: usize, name: String },
}

/// Build a dispatch tree over `names`.
///
/// Names must be non-empty ASCII: the generated code probes bytes, so
/// character features are only meaningful when one character is one byte.
/// Duplicates are accepted and end up in the same leaf; rejecting them is
/// the job of [`Catalog::new`]. Identical input always yields an identical
/// tree.
pub fn build_tree<S: AsRef<str>>(names: &[S]) -> Result<DecisionNode, BuildError> {
    if names.is_empty() {
        return Err(BuildError::EmptyCatalog);
    }
    if let Some(index) = names.iter().position(|n| n.as_ref().is_empty()) {
        return Err(BuildError::EmptyName { index });
    }
    if let Some(index) = names.iter().position(|n| !n.as_ref().is_ascii()) {
        return Err(BuildError::NonAscii {
            index,
            name: names[index].as_ref().to_string(),
        });
    }

    let subset: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
    Ok(finish(partition(&subset)))
}

/// Build the dispatch tree for a validated catalog.
pub fn build_catalog(catalog: &Catalog) -> DecisionNode {
    let _span = tracing::debug_span!("build", catalog = catalog.label()).entered();

    let subset: Vec<&str> = catalog.names().iter().map(String::as_str).collect();
    finish(partition(&subset))
}

fn finish(tree: DecisionNode) -> DecisionNode {
    let stats = TreeStats::of(&tree);
    tracing::debug!(
        names = stats.names,
        leaves = stats.leaves,
        splits = stats.splits,
        depth = stats.depth,
        max_leaf = stats.max_leaf,
        "built dispatch tree"
    );
    tree
}

/// Recursive step. `names` is non-empty and has no empty names.
fn partition(names: &[&str]) -> DecisionNode {
    ensure_sufficient_stack(|| {
        if let [name] = names {
            return DecisionNode::leaf([*name]);
        }

        let (feature, split, values) = pick_feature(names);

        let mut left = Vec::with_capacity(names.len());
        let mut right = Vec::with_capacity(names.len());
        for (&value, &name) in values.iter().zip(names) {
            if value <= split.threshold {
                left.push(name);
            } else {
                right.push(name);
            }
        }

        if left.is_empty() || right.is_empty() {
            tracing::trace!(
                names = names.len(),
                "no feature separates subset, keeping it as one leaf"
            );
            return DecisionNode::leaf(names.iter().copied());
        }

        tracing::trace!(
            %feature,
            threshold = split.threshold,
            score = split.score,
            left = left.len(),
            right = right.len(),
            "split"
        );

        DecisionNode::split(feature, split.threshold, partition(&left), partition(&right))
    })
}

/// Score all three features and pick the winner.
///
/// Priority on ties is fixed: `Length`, then `FirstChar`, then `LastChar`.
/// Returns the winning feature's column so the caller can partition on it.
fn pick_feature(names: &[&str]) -> (Feature, SplitCandidate, Vec<FeatureValue>) {
    let [length, first, last] = Feature::ALL.map(|feature| {
        let values = feature.column(names);
        let split = find_split(&values);
        (feature, split, values)
    });

    let (l, f, t) = (length.1.score, first.1.score, last.1.score);
    if l >= f && l >= t {
        length
    } else if f >= l && f >= t {
        first
    } else {
        last
    }
}
