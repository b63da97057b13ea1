//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog could not be loaded
    #[error(transparent)]
    Catalog(#[from] herbsafe_catalog::CatalogError),

    /// Literature client could not be set up
    #[error("Literature service error: {0}")]
    Literature(#[from] herbsafe_literature::LiteratureError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Product name not in the catalog
    #[error("Unknown product '{0}'. Run 'herbsafe products' to list catalogued products.")]
    UnknownProduct(String),
}
