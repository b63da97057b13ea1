//! Conversions between catalog JSON records and domain types

use herbsafe_domain::product::NO_EVIDENCE_TEXT;
use herbsafe_domain::{ProductInfo, RiskLabel, SupplementaryLink};
use serde::Deserialize;
use tracing::warn;

/// One product entry as stored in the catalog file
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    /// Raw label ("Low", "Moderate", "High")
    #[serde(default)]
    pub risk_label: Option<String>,

    /// Ingredient names, primary first
    #[serde(default)]
    pub ingredients: Vec<String>,

    /// Free-text rationale
    #[serde(default)]
    pub evidence: Option<String>,

    /// Link to curated supporting material
    #[serde(default)]
    pub evidence_link: Option<String>,

    /// Additional reading
    #[serde(default)]
    pub supplementary_links: Vec<LinkRecord>,
}

/// A titled link as stored in the catalog file
#[derive(Debug, Clone, Deserialize)]
pub struct LinkRecord {
    /// Link title
    pub title: String,
    /// Target URL
    pub url: String,
}

/// Convert a catalog record into a domain product
///
/// Unknown or missing labels resolve to Low; the unknown case is logged so
/// curators can fix the catalog.
pub fn product_from_record(name: &str, record: ProductRecord) -> ProductInfo {
    let risk_label = match record.risk_label.as_deref() {
        None => RiskLabel::Low,
        Some(raw) => RiskLabel::parse(raw).unwrap_or_else(|| {
            warn!(product = name, label = raw, "Unrecognised risk label, using Low");
            RiskLabel::Low
        }),
    };

    let evidence = record
        .evidence
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| NO_EVIDENCE_TEXT.to_string());

    let evidence_link = record.evidence_link.filter(|l| !l.trim().is_empty());

    let supplementary_links = record
        .supplementary_links
        .into_iter()
        .map(|l| SupplementaryLink {
            title: l.title,
            url: l.url,
        })
        .collect();

    ProductInfo::new(risk_label, record.ingredients)
        .with_evidence(evidence, evidence_link)
        .with_supplementary_links(supplementary_links)
}
