use pretty_assertions::assert_eq;

use super::*;

fn sample() -> DecisionNode {
    // length > 2 ? (first_char > 'm' ? [trim] : [abs]) : [gt, lt]
    DecisionNode::split(
        Feature::Length,
        2,
        DecisionNode::leaf(["gt", "lt"]),
        DecisionNode::split(
            Feature::FirstChar,
            u32::from('m'),
            DecisionNode::leaf(["abs"]),
            DecisionNode::leaf(["trim"]),
        ),
    )
}

#[test]
fn leaves_visit_left_before_right() {
    let tree = sample();
    let leaves: Vec<&[String]> = tree.leaves().collect();
    assert_eq!(leaves.len(), 3);
    assert_eq!(leaves[0], ["gt".to_string(), "lt".to_string()]);
    assert_eq!(leaves[1], ["abs".to_string()]);
    assert_eq!(leaves[2], ["trim".to_string()]);
}

#[test]
fn counts_and_depth() {
    let tree = sample();
    assert_eq!(tree.name_count(), 4);
    assert_eq!(tree.split_count(), 2);
    assert_eq!(tree.depth(), 2);
    assert!(!tree.is_leaf());
}

#[test]
fn single_leaf_has_depth_zero() {
    let tree = DecisionNode::leaf(["x"]);
    assert!(tree.is_leaf());
    assert_eq!(tree.depth(), 0);
    assert_eq!(tree.split_count(), 0);
    assert_eq!(tree.leaves().count(), 1);
}
