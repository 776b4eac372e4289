use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::CatalogError;

/// Startup and lifecycle failures of the service binary.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No hospital catalog found (looked for {0:?})")]
    NoDataFile(Vec<PathBuf>),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Server error: {0}")]
    Server(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
