//! Decision tree for builtin-name dispatch.
//!
//! A tree is a strict hierarchy: each `Split` owns its two children and
//! nothing is shared. Trees are built once by `dtc_build` and never mutated.

use crate::feature::{Feature, FeatureValue};

/// One node of a dispatch tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DecisionNode {
    /// Terminal node. Members are told apart by direct string comparison,
    /// in the order they appeared in the catalog.
    Leaf { names: Vec<String> },
    /// Internal node routing on a single feature threshold.
    ///
    /// Both children are non-empty.
    Split {
        feature: Feature,
        threshold: FeatureValue,
        /// Names whose feature value is `<= threshold`.
        left: Box<DecisionNode>,
        /// Names whose feature value is `> threshold`.
        right: Box<DecisionNode>,
    },
}

impl DecisionNode {
    /// Create a leaf from an ordered set of names.
    pub fn leaf<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        DecisionNode::Leaf {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a split node.
    pub fn split(
        feature: Feature,
        threshold: FeatureValue,
        left: DecisionNode,
        right: DecisionNode,
    ) -> Self {
        DecisionNode::Split {
            feature,
            threshold,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, DecisionNode::Leaf { .. })
    }

    /// Iterate over the leaves, left subtree before right subtree.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves { stack: vec![self] }
    }

    /// Number of names across all leaves.
    pub fn name_count(&self) -> usize {
        self.leaves().map(<[String]>::len).sum()
    }

    /// Number of `Split` nodes.
    pub fn split_count(&self) -> usize {
        match self {
            DecisionNode::Leaf { .. } => 0,
            DecisionNode::Split { left, right, .. } => 1 + left.split_count() + right.split_count(),
        }
    }

    /// Number of `Split` nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            DecisionNode::Leaf { .. } => 0,
            DecisionNode::Split { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Iterator over the name lists of a tree's leaves.
///
/// Created by [`DecisionNode::leaves`].
pub struct Leaves<'a> {
    stack: Vec<&'a DecisionNode>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a [String];

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                DecisionNode::Leaf { names } => return Some(names),
                DecisionNode::Split { left, right, .. } => {
                    // Right pushed first so the left subtree is visited first.
                    self.stack.push(right);
                    self.stack.push(left);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests;
