//! Where a catalog comes from: a shipped catalog or a name-list file.

use std::fmt;
use std::path::PathBuf;

use dtc_emit::CallForm;
use dtc_ir::{names, Catalog, CatalogError};

use crate::DriverError;

/// A catalog argument on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogSource {
    /// The shipped `core` catalog.
    Core,
    /// The shipped namespace-`prefix` catalog.
    Prefix,
    /// A text file, one name per line.
    File(PathBuf),
}

impl CatalogSource {
    /// `core` and `prefix` name the shipped catalogs; anything else is a path.
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "core" => CatalogSource::Core,
            "prefix" => CatalogSource::Prefix,
            path => CatalogSource::File(PathBuf::from(path)),
        }
    }

    /// Label used in logs and error messages.
    pub fn label(&self) -> String {
        match self {
            CatalogSource::Core => "core".to_string(),
            CatalogSource::Prefix => "prefix".to_string(),
            CatalogSource::File(path) => path.display().to_string(),
        }
    }

    /// Call form used when `--call` is not given.
    ///
    /// Core builtins are built through their factories; prefix entries call
    /// the namespace dispatcher directly.
    pub fn default_call_form(&self) -> CallForm {
        match self {
            CatalogSource::Prefix => CallForm::Direct,
            CatalogSource::Core | CatalogSource::File(_) => CallForm::Factory,
        }
    }

    /// Load and validate the catalog.
    pub fn load(&self) -> Result<Catalog, DriverError> {
        let catalog = match self {
            CatalogSource::Core => Catalog::new("core", names::CORE.iter().copied())?,
            CatalogSource::Prefix => Catalog::new("prefix", names::PREFIX.iter().copied())?,
            CatalogSource::File(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| DriverError::Read {
                    path: path.clone(),
                    source,
                })?;
                parse_catalog(self.label(), &text)?
            }
        };
        tracing::debug!(catalog = catalog.label(), names = catalog.len(), "loaded catalog");
        Ok(catalog)
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Parse a name-list file: one name per line, surrounding whitespace
/// trimmed, blank lines and `#` comment lines skipped.
pub fn parse_catalog(label: impl Into<String>, text: &str) -> Result<Catalog, CatalogError> {
    let names = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));
    Catalog::new(label, names)
}
