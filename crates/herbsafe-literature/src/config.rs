//! Configuration for the Entrez client

use crate::LiteratureError;
use herbsafe_domain::evidence::DEFAULT_ARTICLE_BASE_URL;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Entrez E-utilities endpoint
pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Default per-round-trip timeout (10 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Tool name reported to NCBI
pub const DEFAULT_TOOL: &str = "herbsafe";

/// Configuration for [`crate::EntrezClient`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntrezConfig {
    /// E-utilities base URL
    pub base_url: String,

    /// Base for public article links
    pub article_base_url: String,

    /// Tool name sent with every request
    pub tool: String,

    /// Contact address NCBI asks clients to provide
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Optional API key (raises the NCBI rate limit)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Maximum time for a single round-trip (seconds)
    pub timeout_secs: u64,
}

impl EntrezConfig {
    /// Get the per-round-trip timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), LiteratureError> {
        for (field, url) in [
            ("base_url", &self.base_url),
            ("article_base_url", &self.article_base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(LiteratureError::Config(format!(
                    "{} must be an http(s) URL, got '{}'",
                    field, url
                )));
            }
        }
        if self.tool.trim().is_empty() {
            return Err(LiteratureError::Config("tool must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(LiteratureError::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, LiteratureError> {
        toml::from_str(toml_str)
            .map_err(|e| LiteratureError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, LiteratureError> {
        toml::to_string_pretty(self)
            .map_err(|e| LiteratureError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for EntrezConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            article_base_url: DEFAULT_ARTICLE_BASE_URL.to_string(),
            tool: DEFAULT_TOOL.to_string(),
            email: None,
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EntrezConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_invalid_timeout() {
        let config = EntrezConfig {
            timeout_secs: 0,
            ..EntrezConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_base_url() {
        let config = EntrezConfig {
            base_url: "eutils.ncbi.nlm.nih.gov".to_string(),
            ..EntrezConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LiteratureError::Config(msg)) if msg.contains("base_url")
        ));
    }

    #[test]
    fn test_empty_tool() {
        let config = EntrezConfig {
            tool: " ".to_string(),
            ..EntrezConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = EntrezConfig::from_toml("email = \"ops@example.org\"\ntimeout_secs = 5\n").unwrap();
        assert_eq!(config.email.as_deref(), Some("ops@example.org"));
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EntrezConfig {
            api_key: Some("abc123".to_string()),
            ..EntrezConfig::default()
        };
        let toml_str = config.to_toml().unwrap();
        let parsed = EntrezConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }
}
