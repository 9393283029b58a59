//! Shape summary of a built tree.

use std::fmt;

use dtc_ir::DecisionNode;

/// Shape of a dispatch tree, for logs and operator reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Names across all leaves.
    pub names: usize,
    pub leaves: usize,
    pub splits: usize,
    /// Probes on the longest path before the first string comparison.
    pub depth: usize,
    /// Largest number of string comparisons in one leaf.
    pub max_leaf: usize,
}

impl TreeStats {
    pub fn of(tree: &DecisionNode) -> Self {
        let mut stats = TreeStats {
            splits: tree.split_count(),
            depth: tree.depth(),
            ..TreeStats::default()
        };
        for leaf in tree.leaves() {
            stats.leaves += 1;
            stats.names += leaf.len();
            stats.max_leaf = stats.max_leaf.max(leaf.len());
        }
        stats
    }
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} names, {} leaves, {} splits, depth {}, largest leaf {}",
            self.names, self.leaves, self.splits, self.depth, self.max_leaf
        )
    }
}
