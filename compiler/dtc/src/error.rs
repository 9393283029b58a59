use std::io;
use std::path::PathBuf;

use dtc_emit::UnknownCallForm;
use dtc_ir::CatalogError;
use thiserror::Error;

use crate::splice::SpliceError;

/// Anything that aborts a `dtc` invocation. No artifact is written once one
/// of these is raised.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    CallForm(#[from] UnknownCallForm),

    #[error("cannot read `{}`: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write `{}`: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("cannot splice into `{}`: {source}", path.display())]
    Splice { path: PathBuf, source: SpliceError },

    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}

impl DriverError {
    pub(crate) fn usage(message: impl Into<String>) -> Self {
        DriverError::Usage(message.into())
    }
}
