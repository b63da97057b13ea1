//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use herbsafe_literature::{EntrezClient, EntrezConfig, EvidenceService, SynonymTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default catalog location, relative to the working directory
pub const DEFAULT_CATALOG_PATH: &str = "data/brands.json";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Product catalog settings
    #[serde(default)]
    pub catalog: CatalogSettings,

    /// Literature index settings
    #[serde(default)]
    pub pubmed: EntrezConfig,

    /// Extra ingredient aliases, merged over the built-in table
    #[serde(default)]
    pub synonyms: BTreeMap<String, Vec<String>>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Product catalog settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Path to the catalog JSON file
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Text and tables
    Table,
    /// JSON format
    Json,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".herbsafe").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default path is used
    /// when present and built-in defaults otherwise. `[pubmed]` settings are
    /// checked only when the evidence service is built.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "Config file '{}' does not exist",
                        path.display()
                    )));
                }
                Self::from_toml(&fs::read_to_string(path)?)?
            }
            None => {
                let default = Self::default_path().ok().filter(|p| p.exists());
                match default {
                    Some(path) => {
                        debug!(path = %path.display(), "Loading configuration");
                        Self::from_toml(&fs::read_to_string(&path)?)?
                    }
                    None => Self::default(),
                }
            }
        };

        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// The catalog path, honouring a command-line override.
    pub fn catalog_path(&self, override_path: Option<&Path>) -> PathBuf {
        override_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.catalog.path.clone())
    }

    /// Synonym table: built-in entries plus configured ones.
    pub fn synonym_table(&self) -> SynonymTable {
        SynonymTable::from_map(&self.synonyms)
    }

    /// Build the evidence service for the configured index.
    pub fn evidence_service(&self) -> Result<EvidenceService<EntrezClient>> {
        let client = EntrezClient::new(self.pubmed.clone())?;
        Ok(EvidenceService::new(client)
            .with_synonyms(self.synonym_table())
            .with_article_base_url(self.pubmed.article_base_url.clone()))
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from(DEFAULT_CATALOG_PATH)
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
