//! HerbSafe Literature Layer
//!
//! Live evidence retrieval against a biomedical literature index.
//!
//! # Architecture
//!
//! This crate provides implementations of the `LiteratureIndex` trait from
//! `herbsafe-domain` and the [`EvidenceService`] that drives them: a search
//! round-trip, a fetch round-trip, and a synonym fallback when the search
//! comes back empty. Every failure degrades to "no evidence".
//!
//! # Indexes
//!
//! - `MockIndex`: Deterministic in-memory index for testing
//! - `EntrezClient`: NCBI PubMed via the Entrez E-utilities
//!
//! # Examples
//!
//! ```
//! use herbsafe_domain::ArticleSummary;
//! use herbsafe_literature::{hepatotoxicity_query, EvidenceService, MockIndex};
//!
//! let mut index = MockIndex::new();
//! index.add_hits(&hepatotoxicity_query("Giloy"), &["34567"]);
//! index.add_article("34567", ArticleSummary::new(Some("Giloy-induced liver injury".into()), None));
//!
//! let service = EvidenceService::new(index);
//! let record = service.find_evidence("Giloy").unwrap();
//! assert_eq!(record.url, "https://pubmed.ncbi.nlm.nih.gov/34567/");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod entrez;
pub mod evidence;
pub mod parser;
pub mod synonyms;

use herbsafe_domain::traits::LiteratureIndex;
use herbsafe_domain::ArticleSummary;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use config::EntrezConfig;
pub use entrez::EntrezClient;
pub use evidence::{hepatotoxicity_query, EvidenceService};
pub use synonyms::SynonymTable;

/// Errors that can occur while talking to a literature index
#[derive(Error, Debug)]
pub enum LiteratureError {
    /// Network or transport failure
    #[error("Communication error: {0}")]
    Communication(String),

    /// A round-trip exceeded its deadline
    #[error("Request timed out")]
    Timeout,

    /// Non-success HTTP status
    #[error("HTTP {status}: {message}")]
    Http {
        /// Status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// Upstream asked us to slow down
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Response body could not be understood
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The index reported an error inside an otherwise valid response
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("Literature error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for LiteratureError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LiteratureError::Timeout
        } else if e.is_builder() {
            LiteratureError::Config(e.to_string())
        } else if e.is_decode() {
            LiteratureError::MalformedResponse(e.to_string())
        } else {
            LiteratureError::Communication(e.to_string())
        }
    }
}

impl From<serde_json::Error> for LiteratureError {
    fn from(e: serde_json::Error) -> Self {
        LiteratureError::MalformedResponse(format!("JSON parse error: {}", e))
    }
}

/// Mock literature index for deterministic testing
///
/// Returns pre-configured identifiers and articles without any network
/// calls, and records every search term and fetched identifier so tests can
/// assert on the exact round-trips a lookup performed.
///
/// # Examples
///
/// ```
/// use herbsafe_domain::traits::LiteratureIndex;
/// use herbsafe_literature::MockIndex;
///
/// let mut index = MockIndex::new();
/// index.add_hits("kava", &["1", "2"]);
///
/// assert_eq!(index.search("kava", 1).unwrap(), vec!["1".to_string()]);
/// assert!(index.search("unknown", 1).unwrap().is_empty());
/// assert_eq!(index.searches(), vec!["kava".to_string(), "unknown".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockIndex {
    state: Arc<Mutex<MockState>>,
}

#[derive(Debug, Default)]
struct MockState {
    hits: HashMap<String, Vec<String>>,
    articles: HashMap<String, ArticleSummary>,
    failing_terms: HashSet<String>,
    failing_ids: HashSet<String>,
    searches: Vec<String>,
    fetches: Vec<String>,
}

impl MockIndex {
    /// Create an empty index: every search returns zero hits
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the identifiers returned for an exact search term
    pub fn add_hits(&mut self, term: &str, ids: &[&str]) {
        self.state
            .lock()
            .unwrap()
            .hits
            .insert(term.to_string(), ids.iter().map(|s| s.to_string()).collect());
    }

    /// Register the article returned for an identifier
    pub fn add_article(&mut self, id: &str, article: ArticleSummary) {
        self.state
            .lock()
            .unwrap()
            .articles
            .insert(id.to_string(), article);
    }

    /// Configure a search term to fail
    pub fn fail_search(&mut self, term: &str) {
        self.state
            .lock()
            .unwrap()
            .failing_terms
            .insert(term.to_string());
    }

    /// Configure a fetch to fail
    pub fn fail_fetch(&mut self, id: &str) {
        self.state
            .lock()
            .unwrap()
            .failing_ids
            .insert(id.to_string());
    }

    /// Search terms received, in order
    pub fn searches(&self) -> Vec<String> {
        self.state.lock().unwrap().searches.clone()
    }

    /// Identifiers fetched, in order
    pub fn fetches(&self) -> Vec<String> {
        self.state.lock().unwrap().fetches.clone()
    }

    /// Total number of round-trips (searches plus fetches)
    pub fn call_count(&self) -> usize {
        let state = self.state.lock().unwrap();
        state.searches.len() + state.fetches.len()
    }

    /// Forget recorded calls, keeping the configured responses
    pub fn reset_calls(&self) {
        let mut state = self.state.lock().unwrap();
        state.searches.clear();
        state.fetches.clear();
    }
}

impl LiteratureIndex for MockIndex {
    type Error = LiteratureError;

    fn search(&self, term: &str, max_results: usize) -> Result<Vec<String>, Self::Error> {
        let mut state = self.state.lock().unwrap();
        state.searches.push(term.to_string());

        if state.failing_terms.contains(term) {
            return Err(LiteratureError::Other("Mock search error".to_string()));
        }

        Ok(state
            .hits
            .get(term)
            .map(|ids| ids.iter().take(max_results).cloned().collect())
            .unwrap_or_default())
    }

    fn fetch_article(&self, id: &str) -> Result<Option<ArticleSummary>, Self::Error> {
        let mut state = self.state.lock().unwrap();
        state.fetches.push(id.to_string());

        if state.failing_ids.contains(id) {
            return Err(LiteratureError::Other("Mock fetch error".to_string()));
        }

        Ok(state.articles.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_index_empty() {
        let index = MockIndex::new();
        let result = index.search("anything", 1);
        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn test_mock_index_respects_max_results() {
        let mut index = MockIndex::new();
        index.add_hits("term", &["1", "2", "3"]);

        assert_eq!(index.search("term", 2).unwrap(), vec!["1", "2"]);
        assert_eq!(index.search("term", 10).unwrap().len(), 3);
    }

    #[test]
    fn test_mock_index_articles() {
        let mut index = MockIndex::new();
        let article = ArticleSummary::new(Some("Title".to_string()), Some("Body".to_string()));
        index.add_article("42", article.clone());

        assert_eq!(index.fetch_article("42").unwrap(), Some(article));
        assert_eq!(index.fetch_article("43").unwrap(), None);
        assert_eq!(index.fetches(), vec!["42", "43"]);
    }

    #[test]
    fn test_mock_index_errors() {
        let mut index = MockIndex::new();
        index.fail_search("bad");
        index.fail_fetch("7");

        assert!(matches!(
            index.search("bad", 1).unwrap_err(),
            LiteratureError::Other(_)
        ));
        assert!(index.fetch_article("7").is_err());
    }

    #[test]
    fn test_mock_index_call_count() {
        let index = MockIndex::new();
        assert_eq!(index.call_count(), 0);

        index.search("a", 1).unwrap();
        index.fetch_article("1").unwrap();
        assert_eq!(index.call_count(), 2);

        index.reset_calls();
        assert_eq!(index.call_count(), 0);
    }

    #[test]
    fn test_mock_index_clone_shares_state() {
        let index1 = MockIndex::new();
        let index2 = index1.clone();

        index1.search("x", 1).unwrap();

        assert_eq!(index1.call_count(), 1);
        assert_eq!(index2.call_count(), 1);
    }

    #[test]
    fn test_error_display() {
        let err = LiteratureError::Http {
            status: 503,
            message: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
        assert_eq!(LiteratureError::Timeout.to_string(), "Request timed out");
    }
}
