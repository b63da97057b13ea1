//! Error types for catalog loading

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file does not exist
    #[error("Product catalog not found: {}", .0.display())]
    NotFound(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog is not valid JSON of the expected shape
    #[error("Invalid catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
