use std::f64::consts::LN_2;

use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

// No usable boundary

#[test]
fn single_value_scores_zero() {
    let c = find_split(&[7]);
    assert_eq!(c.threshold, 7);
    assert!(!c.is_usable());
}

#[test]
fn identical_values_score_zero() {
    // The only boundary is after the last group, which is never scored.
    let c = find_split(&[3, 3, 3, 3]);
    assert_eq!(c.threshold, 3);
    assert!(close(c.score, 0.0));
}

#[test]
fn empty_input_scores_zero() {
    let c = find_split(&[]);
    assert_eq!(c.threshold, 0);
    assert!(!c.is_usable());
}

// Even splits

#[test]
fn two_values_split_in_half() {
    let c = find_split(&[1, 2]);
    assert_eq!(c.threshold, 1);
    assert!(close(c.score, LN_2));
}

#[test]
fn input_order_does_not_matter() {
    assert_eq!(find_split(&[2, 1]), find_split(&[1, 2]));
    assert_eq!(find_split(&[5, 1, 9, 3]), find_split(&[1, 3, 5, 9]));
}

#[test]
fn every_interior_boundary_is_scored() {
    // Boundaries: 1|2 (1/4), 2|3 (2/4), 3|4 (3/4). The even one must win.
    let c = find_split(&[1, 2, 3, 4]);
    assert_eq!(c.threshold, 2);
    assert!(close(c.score, LN_2));
}

#[test]
fn groups_are_consumed_whole() {
    // 1,1 | 2 | 3,3,3: candidates 2/6 at t=1 and 3/6 at t=2.
    let c = find_split(&[3, 1, 3, 2, 1, 3]);
    assert_eq!(c.threshold, 2);
    assert!(close(c.score, LN_2));
}

// Tie-breaking

#[test]
fn mirrored_boundaries_keep_the_first() {
    // 1 | 2 | 3: 1/3 at t=1 and 2/3 at t=2 score the same; t=1 is kept.
    let c = find_split(&[1, 2, 3]);
    assert_eq!(c.threshold, 1);
    let p: f64 = 1.0 / 3.0;
    let q: f64 = 2.0 / 3.0;
    assert!(close(c.score, -p * p.ln() - q * q.ln()));
}

#[test]
fn mirrored_scores_are_bit_identical() {
    for n in 2..40 {
        for k in 1..n {
            assert_eq!(
                entropy(k, n).to_bits(),
                entropy(n - k, n).to_bits(),
                "entropy({k}, {n}) vs entropy({}, {n})",
                n - k
            );
        }
    }
}

#[test]
fn skewed_group_picks_most_balanced_boundary() {
    // 1 | 5,5,5,5,5 | 9: 1/7 at t=1, 6/7 at t=5. Both mirror, keep t=1.
    let c = find_split(&[5, 1, 5, 5, 9, 5, 5]);
    assert_eq!(c.threshold, 1);
    assert!(c.is_usable());
}
