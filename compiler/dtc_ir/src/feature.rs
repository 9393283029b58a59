//! Structural probes used to route a name through the tree.

use std::fmt;

/// Integer value of a feature for one name.
pub type FeatureValue = u32;

/// A cheap structural probe on a name.
///
/// Variant order is the fixed tie-break priority used when two features
/// score equally: `Length` beats `FirstChar`, which beats `LastChar`. The
/// priority only affects the shape of the tree, never dispatch correctness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    /// Byte length of the name.
    Length,
    /// Code point of the first character.
    FirstChar,
    /// Code point of the last character.
    LastChar,
}

impl Feature {
    /// All features, in tie-break priority order.
    pub const ALL: [Feature; 3] = [Feature::Length, Feature::FirstChar, Feature::LastChar];

    /// Derive this feature's value for `name`.
    ///
    /// Character features of an empty name are 0; catalogs never contain
    /// empty names, and the builder rejects them before deriving features.
    pub fn value_of(self, name: &str) -> FeatureValue {
        match self {
            Feature::Length => FeatureValue::try_from(name.len()).unwrap_or(FeatureValue::MAX),
            Feature::FirstChar => name.chars().next().map_or(0, FeatureValue::from),
            Feature::LastChar => name.chars().next_back().map_or(0, FeatureValue::from),
        }
    }

    /// Derive this feature over a subset, aligned 1:1 with `names`.
    pub fn column<S: AsRef<str>>(self, names: &[S]) -> Vec<FeatureValue> {
        names.iter().map(|n| self.value_of(n.as_ref())).collect()
    }

    /// Whether thresholds on this feature are character code points.
    pub fn is_char(self) -> bool {
        !matches!(self, Feature::Length)
    }

    /// Name of the local variable holding this probe in generated code.
    pub fn probe(self) -> &'static str {
        match self {
            Feature::Length => "length",
            Feature::FirstChar => "first_char",
            Feature::LastChar => "last_char",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.probe())
    }
}
