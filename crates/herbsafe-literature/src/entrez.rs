//! Entrez Client Implementation
//!
//! Provides integration with NCBI PubMed through the Entrez E-utilities.
//!
//! # Features
//!
//! - Blocking HTTP round-trips (esearch, then efetch)
//! - Configurable endpoint, tool name, contact address and API key
//! - Per-round-trip timeout; no retries
//!
//! # Examples
//!
//! ```no_run
//! use herbsafe_domain::traits::LiteratureIndex;
//! use herbsafe_literature::{EntrezClient, EntrezConfig};
//!
//! let client = EntrezClient::new(EntrezConfig::default()).unwrap();
//! let ids = client.search("\"Piper methysticum\" AND hepatotoxicity", 1).unwrap();
//! ```

use crate::parser::{parse_article_xml, parse_search_response};
use crate::{EntrezConfig, LiteratureError};
use herbsafe_domain::traits::LiteratureIndex;
use herbsafe_domain::ArticleSummary;
use reqwest::blocking::{Client, Request};
use reqwest::StatusCode;
use tracing::debug;

/// Database queried for every request
pub const DATABASE: &str = "pubmed";

/// NCBI PubMed client
pub struct EntrezClient {
    config: EntrezConfig,
    client: Client,
}

impl EntrezClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: EntrezConfig) -> Result<Self, LiteratureError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("herbsafe/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { config, client })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &EntrezConfig {
        &self.config
    }

    /// Build the esearch request for a query
    pub fn search_request(&self, term: &str, max_results: usize) -> Result<Request, LiteratureError> {
        let mut params = vec![
            ("db", DATABASE.to_string()),
            ("term", term.to_string()),
            ("retmax", max_results.to_string()),
            ("retmode", "json".to_string()),
        ];
        params.extend(self.identity_params());

        let request = self
            .client
            .get(self.endpoint("esearch.fcgi"))
            .query(&params)
            .build()?;
        Ok(request)
    }

    /// Build the efetch request for a record identifier
    pub fn fetch_request(&self, id: &str) -> Result<Request, LiteratureError> {
        let mut params = vec![
            ("db", DATABASE.to_string()),
            ("id", id.to_string()),
            ("rettype", "abstract".to_string()),
            ("retmode", "xml".to_string()),
        ];
        params.extend(self.identity_params());

        let request = self
            .client
            .get(self.endpoint("efetch.fcgi"))
            .query(&params)
            .build()?;
        Ok(request)
    }

    fn endpoint(&self, utility: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), utility)
    }

    fn identity_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("tool", self.config.tool.clone())];
        if let Some(email) = &self.config.email {
            params.push(("email", email.clone()));
        }
        if let Some(api_key) = &self.config.api_key {
            params.push(("api_key", api_key.clone()));
        }
        params
    }

    /// Execute a request and return the body of a successful response
    fn execute(&self, request: Request) -> Result<String, LiteratureError> {
        debug!(url = %request.url(), "Sending Entrez request");

        let response = self.client.execute(request)?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(LiteratureError::RateLimited);
        }
        if !status.is_success() {
            let message = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LiteratureError::Http {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.text()?)
    }
}

impl LiteratureIndex for EntrezClient {
    type Error = LiteratureError;

    fn search(&self, term: &str, max_results: usize) -> Result<Vec<String>, Self::Error> {
        let request = self.search_request(term, max_results)?;
        let body = self.execute(request)?;
        parse_search_response(&body)
    }

    fn fetch_article(&self, id: &str) -> Result<Option<ArticleSummary>, Self::Error> {
        let request = self.fetch_request(id)?;
        let body = self.execute(request)?;
        parse_article_xml(&body)
    }
}
