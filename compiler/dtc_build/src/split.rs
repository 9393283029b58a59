//! Split Selector: best threshold for one feature column.

use dtc_ir::FeatureValue;

/// Best threshold found for one feature over a subset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitCandidate {
    /// Values `<= threshold` go left, values `> threshold` go right.
    pub threshold: FeatureValue,
    /// Binary entropy (natural log) of the resulting partition.
    ///
    /// `0.0` means no interior boundary exists: every name would land on
    /// the same side.
    pub score: f64,
}

impl SplitCandidate {
    /// Whether this candidate actually separates the subset.
    pub fn is_usable(&self) -> bool {
        self.score > 0.0
    }
}

/// Find the threshold on `values` whose `≤ / >` partition has maximal
/// binary entropy.
///
/// Values are sorted and walked group by group (runs of equal values). After
/// each group the threshold is that group's value and the left fraction is
/// the share consumed so far. The boundary after the last group is never
/// scored since it puts everything on the left.
///
/// Only a strictly better score replaces the current best, so among equal
/// scores the smallest threshold wins.
pub fn find_split(values: &[FeatureValue]) -> SplitCandidate {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let n = sorted.len();
    let mut best = SplitCandidate {
        threshold: sorted.first().copied().unwrap_or(0),
        score: 0.0,
    };

    let mut consumed = 0;
    while consumed < n {
        let value = sorted[consumed];
        while consumed < n && sorted[consumed] == value {
            consumed += 1;
        }
        if consumed == n {
            break;
        }

        let score = entropy(consumed, n);
        if score > best.score {
            best = SplitCandidate {
                threshold: value,
                score,
            };
        }
    }

    best
}

/// `-p·ln(p) - q·ln(q)` with `p = left / n`, `q = (n - left) / n`, for
/// `0 < left < n`.
///
/// `q` is computed from the right-hand count rather than as `1 - p` so that
/// mirrored partitions (`k` vs `n - k`) score bit-for-bit the same.
#[expect(
    clippy::cast_precision_loss,
    reason = "catalog sizes are far below 2^52"
)]
fn entropy(left: usize, n: usize) -> f64 {
    let p = left as f64 / n as f64;
    let q = (n - left) as f64 / n as f64;
    -p * p.ln() - q * q.ln()
}

#[cfg(test)]
mod tests;
