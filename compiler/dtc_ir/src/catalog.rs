//! Validated builtin-name catalogs.

use rustc_hash::FxHashMap;
use thiserror::Error;

/// A catalog that cannot be compiled into a dispatch tree.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog `{label}` is empty")]
    Empty { label: String },

    #[error("catalog `{label}` has an empty name at position {index}")]
    EmptyName { label: String, index: usize },

    #[error("catalog `{label}` has invalid name `{name}` at position {index}: expected an ASCII identifier")]
    InvalidName {
        label: String,
        index: usize,
        name: String,
    },

    #[error("catalog `{label}` lists `{name}` twice (positions {first} and {second})")]
    Duplicate {
        label: String,
        name: String,
        first: usize,
        second: usize,
    },
}

/// A non-empty, duplicate-free, ordered list of builtin names.
///
/// Order is significant: it decides the order of direct comparisons inside
/// each leaf and therefore the exact generated text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    label: String,
    names: Vec<String>,
}

impl Catalog {
    /// Validate `names` and build a catalog labelled `label`.
    pub fn new<S: Into<String>>(
        label: impl Into<String>,
        names: impl IntoIterator<Item = S>,
    ) -> Result<Self, CatalogError> {
        let label = label.into();
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.is_empty() {
            return Err(CatalogError::Empty { label });
        }

        let mut seen: FxHashMap<&str, usize> = FxHashMap::default();
        for (index, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(CatalogError::EmptyName { label, index });
            }
            if !is_identifier(name) {
                return Err(CatalogError::InvalidName {
                    label,
                    index,
                    name: name.clone(),
                });
            }
            if let Some(&first) = seen.get(name.as_str()) {
                return Err(CatalogError::Duplicate {
                    label,
                    name: name.clone(),
                    first,
                    second: index,
                });
            }
            seen.insert(name, index);
        }

        Ok(Catalog { label, names })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false`: construction rejects empty catalogs.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn is_identifier(name: &str) -> bool {
    let mut bytes = name.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}
