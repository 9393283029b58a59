//! Property-based tests for dispatch tree construction.
//!
//! Random catalogs (duplicates allowed) must always produce a tree that:
//! 1. Partitions the input: every name lands in exactly one leaf, as many
//!    times as it was listed
//! 2. Has no empty side on any split
//! 3. Routes every name to the leaf that holds it
//! 4. Is the same on every run

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::collections::BTreeMap;

use dtc_build::{build_tree, find_split, DecisionNode, Feature};
use proptest::prelude::*;

// -- Strategies --

/// Short identifier-like names over a small alphabet, so collisions on
/// length, first and last character are common.
fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e][a-e_]{0,5}").expect("valid regex")
}

fn catalog_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(name_strategy(), 1..40)
}

// -- Helpers --

fn multiset<'a>(names: impl IntoIterator<Item = &'a String>) -> BTreeMap<&'a str, usize> {
    let mut counts = BTreeMap::new();
    for name in names {
        *counts.entry(name.as_str()).or_insert(0) += 1;
    }
    counts
}

fn splits_are_non_empty(node: &DecisionNode) -> bool {
    match node {
        DecisionNode::Leaf { names } => !names.is_empty(),
        DecisionNode::Split { left, right, .. } => {
            splits_are_non_empty(left) && splits_are_non_empty(right)
        }
    }
}

/// Walk the tree the way the generated code does and return the leaf.
fn route<'t>(node: &'t DecisionNode, name: &str) -> &'t [String] {
    match node {
        DecisionNode::Leaf { names } => names,
        DecisionNode::Split {
            feature,
            threshold,
            left,
            right,
        } => {
            if feature.value_of(name) > *threshold {
                route(right, name)
            } else {
                route(left, name)
            }
        }
    }
}

proptest! {
    #[test]
    fn leaves_partition_the_catalog(names in catalog_strategy()) {
        let tree = build_tree(&names).unwrap();
        let in_tree = multiset(tree.leaves().flatten());
        prop_assert_eq!(in_tree, multiset(&names));

        // A distinct name never appears in two leaves.
        for name in &names {
            let holders = tree.leaves().filter(|leaf| leaf.contains(name)).count();
            prop_assert_eq!(holders, 1);
        }
    }

    #[test]
    fn splits_have_two_non_empty_sides(names in catalog_strategy()) {
        let tree = build_tree(&names).unwrap();
        prop_assert!(splits_are_non_empty(&tree));
        prop_assert!(tree.depth() < names.len());
    }

    #[test]
    fn every_name_routes_to_its_leaf(names in catalog_strategy()) {
        let tree = build_tree(&names).unwrap();
        for name in &names {
            prop_assert!(route(&tree, name).contains(name));
        }
    }

    #[test]
    fn build_is_deterministic(names in catalog_strategy()) {
        prop_assert_eq!(build_tree(&names).unwrap(), build_tree(&names).unwrap());
    }

    #[test]
    fn leaf_members_are_indistinguishable(names in catalog_strategy()) {
        // A leaf with several members exists only when no probe separates them.
        let tree = build_tree(&names).unwrap();
        for leaf in tree.leaves().filter(|leaf| leaf.len() > 1) {
            for feature in Feature::ALL {
                let values = feature.column(leaf);
                prop_assert!(values.iter().all(|v| *v == values[0]));
            }
        }
    }

    #[test]
    fn split_threshold_is_one_of_the_values(values in prop::collection::vec(0u32..20, 1..30)) {
        let split = find_split(&values);
        prop_assert!(values.contains(&split.threshold));
        prop_assert!(split.score >= 0.0);
        prop_assert!(split.score <= std::f64::consts::LN_2 + 1e-12);
        if values.iter().all(|v| *v == values[0]) {
            prop_assert!(!split.is_usable());
        } else {
            prop_assert!(split.is_usable());
            prop_assert!(values.iter().any(|v| *v > split.threshold));
        }
    }
}
