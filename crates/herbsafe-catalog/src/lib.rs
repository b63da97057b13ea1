//! HerbSafe product catalog
//!
//! Loads the static product catalog once into an immutable [`ProductCatalog`]
//! value. The catalog is passed explicitly to whatever needs it; there is no
//! process-wide instance.
//!
//! # Format
//!
//! A JSON object keyed by product display name:
//!
//! ```json
//! {
//!   "Zandu Giloy Tablets": {
//!     "risk_label": "High",
//!     "ingredients": ["Tinospora cordifolia"],
//!     "evidence": "Case reports of autoimmune-like hepatitis.",
//!     "supplementary_links": [{"title": "LiverTox", "url": "https://example.org"}]
//!   }
//! }
//! ```
//!
//! # Examples
//!
//! ```
//! use herbsafe_catalog::ProductCatalog;
//! use herbsafe_domain::RiskLabel;
//!
//! let catalog = ProductCatalog::from_json_str(
//!     r#"{"Kava Root": {"risk_label": "High", "ingredients": ["Piper methysticum"]}}"#,
//! ).unwrap();
//!
//! let kava = catalog.get("Kava Root").unwrap();
//! assert_eq!(kava.risk_label, RiskLabel::High);
//! ```

#![warn(missing_docs)]

mod error;
pub mod record;

use herbsafe_domain::ProductInfo;
use record::{product_from_record, ProductRecord};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

pub use error::{CatalogError, Result};

/// Read-only mapping from product display name to product
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCatalog {
    products: BTreeMap<String, ProductInfo>,
}

impl ProductCatalog {
    /// Load a catalog from a JSON file
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NotFound`] if the file does not exist
    /// - [`CatalogError::Io`] if it cannot be read
    /// - [`CatalogError::Parse`] if it is not a valid catalog
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CatalogError::NotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&contents)?;

        info!(
            path = %path.display(),
            products = catalog.len(),
            "Loaded product catalog"
        );
        Ok(catalog)
    }

    /// Parse a catalog from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: BTreeMap<String, ProductRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    /// Build a catalog from already-parsed records
    pub fn from_records(records: impl IntoIterator<Item = (String, ProductRecord)>) -> Self {
        let products = records
            .into_iter()
            .map(|(name, record)| {
                let product = product_from_record(&name, record);
                (name, product)
            })
            .collect();
        Self { products }
    }

    /// Build a catalog from domain products
    pub fn from_products(products: impl IntoIterator<Item = (String, ProductInfo)>) -> Self {
        Self {
            products: products.into_iter().collect(),
        }
    }

    /// Look up a product by its exact display name
    pub fn get(&self, name: &str) -> Option<&ProductInfo> {
        self.products.get(name)
    }

    /// Product names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.products.keys().map(String::as_str)
    }

    /// Iterate over `(name, product)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProductInfo)> {
        self.products.iter().map(|(name, p)| (name.as_str(), p))
    }

    /// Number of products
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
