//! Catalogued herbal products

/// Default rationale used when a catalog entry carries none
pub const NO_EVIDENCE_TEXT: &str = "No evidence provided.";

/// Static risk label attached to a product by the catalog curators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RiskLabel {
    /// Low inherent liver-injury risk
    #[default]
    Low,

    /// Moderate inherent liver-injury risk
    Moderate,

    /// High inherent liver-injury risk
    High,
}

impl RiskLabel {
    /// Get the label name as it appears in the catalog
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::Low => "Low",
            RiskLabel::Moderate => "Moderate",
            RiskLabel::High => "High",
        }
    }

    /// Parse a label, returning `None` for anything unrecognised
    ///
    /// Matching is exact: the catalog spells labels with a leading capital.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Low" => Some(RiskLabel::Low),
            "Moderate" => Some(RiskLabel::Moderate),
            "High" => Some(RiskLabel::High),
            _ => None,
        }
    }

    /// Base score contributed by this label
    pub fn base_score(&self) -> u32 {
        match self {
            RiskLabel::High => 3,
            RiskLabel::Moderate => 2,
            RiskLabel::Low => 1,
        }
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A titled link to curated supporting material
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplementaryLink {
    /// Human-readable title
    pub title: String,
    /// Target URL
    pub url: String,
}

/// One catalogued herbal product
///
/// Loaded once from the static catalog and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInfo {
    /// Curated risk label
    pub risk_label: RiskLabel,

    /// Ingredient names; the first is the primary ingredient
    pub ingredients: Vec<String>,

    /// Free-text rationale for the label
    pub evidence: String,

    /// Optional link to curated supporting material
    pub evidence_link: Option<String>,

    /// Optional additional reading
    pub supplementary_links: Vec<SupplementaryLink>,
}

impl ProductInfo {
    /// Create a product with the given label and ingredients
    pub fn new(risk_label: RiskLabel, ingredients: Vec<String>) -> Self {
        Self {
            risk_label,
            ingredients,
            evidence: NO_EVIDENCE_TEXT.to_string(),
            evidence_link: None,
            supplementary_links: Vec::new(),
        }
    }

    /// Attach a rationale and optional link
    pub fn with_evidence(mut self, evidence: impl Into<String>, link: Option<String>) -> Self {
        self.evidence = evidence.into();
        self.evidence_link = link;
        self
    }

    /// Attach supplementary links
    pub fn with_supplementary_links(mut self, links: Vec<SupplementaryLink>) -> Self {
        self.supplementary_links = links;
        self
    }

    /// The ingredient used for literature lookup, if any
    pub fn primary_ingredient(&self) -> Option<&str> {
        self.ingredients
            .first()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parse() {
        assert_eq!(RiskLabel::parse("High"), Some(RiskLabel::High));
        assert_eq!(RiskLabel::parse("Moderate"), Some(RiskLabel::Moderate));
        assert_eq!(RiskLabel::parse("Low"), Some(RiskLabel::Low));
        assert_eq!(RiskLabel::parse("Severe"), None);
        assert_eq!(RiskLabel::parse("high"), None);
    }

    #[test]
    fn test_base_scores() {
        assert_eq!(RiskLabel::High.base_score(), 3);
        assert_eq!(RiskLabel::Moderate.base_score(), 2);
        assert_eq!(RiskLabel::Low.base_score(), 1);
    }

    #[test]
    fn test_primary_ingredient() {
        let product = ProductInfo::new(
            RiskLabel::High,
            vec!["Tinospora cordifolia".to_string(), "Amla".to_string()],
        );
        assert_eq!(product.primary_ingredient(), Some("Tinospora cordifolia"));

        let empty = ProductInfo::new(RiskLabel::Low, vec![]);
        assert_eq!(empty.primary_ingredient(), None);

        let blank = ProductInfo::new(RiskLabel::Low, vec!["  ".to_string()]);
        assert_eq!(blank.primary_ingredient(), None);
    }

    #[test]
    fn test_default_evidence_text() {
        let product = ProductInfo::new(RiskLabel::Low, vec!["Curcuma longa".to_string()]);
        assert_eq!(product.evidence, NO_EVIDENCE_TEXT);
        assert!(product.evidence_link.is_none());
        assert!(product.supplementary_links.is_empty());
    }
}
