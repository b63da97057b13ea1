//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::ArticleSummary;

/// Trait for a biomedical literature index
///
/// Implemented by the infrastructure layer (herbsafe-literature)
pub trait LiteratureIndex {
    /// Error type for index operations
    type Error;

    /// Run a boolean query and return up to `max_results` record identifiers,
    /// best-ranked first
    fn search(&self, term: &str, max_results: usize) -> Result<Vec<String>, Self::Error>;

    /// Fetch a record by identifier
    ///
    /// Returns `Ok(None)` when the response holds no article.
    fn fetch_article(&self, id: &str) -> Result<Option<ArticleSummary>, Self::Error>;
}
