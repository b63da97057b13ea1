//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use herbsafe_catalog::ProductCatalog;
use herbsafe_domain::{EvidenceRecord, ProductInfo, RiskAssessment, RiskLevel};
use serde_json::{json, Value};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Shown under every assessment.
pub const DISCLAIMER: &str =
    "Prototype for awareness only. Not medical advice. Always consult a physician.";

/// What happened to the live literature lookup of an assessment.
#[derive(Debug, Clone, PartialEq)]
pub enum EvidenceSection {
    /// Level is Low; no lookup is made
    NotWarranted,
    /// User asked to skip the lookup
    Skipped,
    /// Product has no primary ingredient to look up
    NoIngredient,
    /// Lookup ran
    Searched {
        /// Ingredient searched for
        ingredient: String,
        /// Best record, if any
        record: Option<EvidenceRecord>,
    },
}

/// Everything an assessment prints.
#[derive(Debug, Clone)]
pub struct AssessmentReport {
    /// Product display name
    pub product_name: String,
    /// Catalogued product
    pub product: ProductInfo,
    /// Scoring result
    pub assessment: RiskAssessment,
    /// Live evidence
    pub evidence: EvidenceSection,
}

/// General precaution for a risk level.
pub fn precaution(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => {
            "Avoid use unless supervised by a physician. Stop immediately and seek care if \
             jaundice, dark urine, fatigue or abdominal pain appear."
        }
        RiskLevel::Moderate => {
            "Use with caution: keep to the labelled dose, avoid alcohol and other \
             liver-active products, and ask a physician about liver function tests."
        }
        RiskLevel::Low => {
            "Generally low risk at labelled doses. Stop use and consult a physician if \
             unusual symptoms appear."
        }
    }
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the product listing.
    pub fn format_products(&self, catalog: &ProductCatalog) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let products: Vec<Value> = catalog
                    .iter()
                    .map(|(name, p)| {
                        json!({
                            "name": name,
                            "risk_label": p.risk_label.as_str(),
                            "ingredients": p.ingredients,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&products)?)
            }
            OutputFormat::Table => {
                if catalog.is_empty() {
                    return Ok(self.warning("No products in catalog."));
                }

                let mut builder = Builder::default();
                builder.push_record(["Product", "Risk Label", "Ingredients"]);
                for (name, product) in catalog.iter() {
                    builder.push_record([
                        name.to_string(),
                        product.risk_label.to_string(),
                        product.ingredients.join(", "),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format a full assessment report.
    pub fn format_assessment(&self, report: &AssessmentReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&assessment_json(report))?),
            OutputFormat::Table => Ok(self.assessment_text(report)),
        }
    }

    /// Format a direct evidence lookup.
    pub fn format_evidence(&self, ingredient: &str, record: Option<&EvidenceRecord>) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "ingredient": ingredient,
                "evidence": record.map(evidence_json),
            }))?),
            OutputFormat::Table => Ok(match record {
                Some(record) => self.evidence_text(record),
                None => self.info(&no_evidence_message(ingredient)),
            }),
        }
    }

    fn assessment_text(&self, report: &AssessmentReport) -> String {
        let assessment = &report.assessment;
        let product = &report.product;
        let mut lines = Vec::new();

        lines.push(self.heading(&format!("Risk Assessment: {}", report.product_name)));
        lines.push(self.colorize(
            &format!(
                "Risk Level: {} (score {})",
                assessment.level, assessment.score
            ),
            assessment.color,
        ));
        lines.push(format!(
            "Primary Ingredient(s): {}",
            if product.ingredients.is_empty() {
                "N/A".to_string()
            } else {
                product.ingredients.join(", ")
            }
        ));

        match &product.evidence_link {
            Some(link) => lines.push(format!("Evidence: {} (Read more: {})", product.evidence, link)),
            None => lines.push(format!("Evidence: {}", product.evidence)),
        }
        for link in &product.supplementary_links {
            lines.push(format!("  - {}: {}", link.title, link.url));
        }

        if !assessment.factors.is_empty() {
            lines.push(String::new());
            lines.push(self.heading("Personalized Cautions"));
            for factor in &assessment.factors {
                lines.push(format!("  - {}", factor));
            }
        }

        lines.push(String::new());
        lines.push(self.heading("General Precautions"));
        lines.push(format!("  {}", precaution(assessment.level)));

        match &report.evidence {
            EvidenceSection::NotWarranted => {}
            EvidenceSection::Skipped => {
                lines.push(String::new());
                lines.push(self.info("Live literature lookup skipped."));
            }
            EvidenceSection::NoIngredient => {
                lines.push(String::new());
                lines.push(self.info("No primary ingredient listed; live lookup not possible."));
            }
            EvidenceSection::Searched { ingredient, record } => {
                lines.push(String::new());
                lines.push(self.heading("Live Evidence from PubMed"));
                match record {
                    Some(record) => lines.push(self.evidence_text(record)),
                    None => lines.push(self.info(&no_evidence_message(ingredient))),
                }
            }
        }

        lines.push(String::new());
        lines.push(self.warning(DISCLAIMER));
        lines.join("\n")
    }

    fn evidence_text(&self, record: &EvidenceRecord) -> String {
        format!(
            "{}\n{}\n{}",
            self.colorize(&record.title, "cyan"),
            record.url,
            record.snippet
        )
    }

    fn heading(&self, text: &str) -> String {
        if self.color_enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "orange" => text.truecolor(255, 165, 0).to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn no_evidence_message(ingredient: &str) -> String {
    format!("No specific liver risk studies found on PubMed for '{}'.", ingredient)
}

fn evidence_json(record: &EvidenceRecord) -> Value {
    json!({
        "title": record.title,
        "snippet": record.snippet,
        "url": record.url,
    })
}

fn assessment_json(report: &AssessmentReport) -> Value {
    let product = &report.product;
    let assessment = &report.assessment;

    let evidence = match &report.evidence {
        EvidenceSection::NotWarranted => json!({ "status": "not_warranted" }),
        EvidenceSection::Skipped => json!({ "status": "skipped" }),
        EvidenceSection::NoIngredient => json!({ "status": "no_ingredient" }),
        EvidenceSection::Searched {
            ingredient,
            record: Some(record),
        } => json!({
            "status": "found",
            "ingredient": ingredient,
            "record": evidence_json(record),
        }),
        EvidenceSection::Searched {
            ingredient,
            record: None,
        } => json!({ "status": "not_found", "ingredient": ingredient }),
    };

    json!({
        "product": {
            "name": report.product_name,
            "risk_label": product.risk_label.as_str(),
            "ingredients": product.ingredients,
            "evidence": product.evidence,
            "evidence_link": product.evidence_link,
            "supplementary_links": product
                .supplementary_links
                .iter()
                .map(|l| json!({ "title": l.title, "url": l.url }))
                .collect::<Vec<_>>(),
        },
        "assessment": {
            "score": assessment.score,
            "level": assessment.level.as_str(),
            "color": assessment.color,
            "factors": assessment.explanations(),
            "precaution": precaution(assessment.level),
        },
        "live_evidence": evidence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use herbsafe_domain::scoring::compute;
    use herbsafe_domain::{RiskLabel, SupplementaryLink, UserProfile};

    fn report(evidence: EvidenceSection) -> AssessmentReport {
        let product = ProductInfo::new(RiskLabel::High, vec!["Tinospora cordifolia".to_string()])
            .with_evidence("Case reports.", Some("https://example.org/giloy".to_string()))
            .with_supplementary_links(vec![SupplementaryLink {
                title: "Review".to_string(),
                url: "https://example.org/review".to_string(),
            }]);
        let profile = UserProfile::new(70).with_liver_disease(true);
        let assessment = compute(&product, &profile);
        AssessmentReport {
            product_name: "Zandu Giloy Tablets".to_string(),
            product,
            assessment,
            evidence,
        }
    }

    fn record() -> EvidenceRecord {
        EvidenceRecord {
            title: "Giloy-induced liver injury".to_string(),
            snippet: "Abstract text".to_string(),
            url: "https://pubmed.ncbi.nlm.nih.gov/1/".to_string(),
        }
    }

    #[test]
    fn test_assessment_text() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_assessment(&report(EvidenceSection::Searched {
                ingredient: "Tinospora cordifolia".to_string(),
                record: Some(record()),
            }))
            .unwrap();

        assert!(output.contains("Risk Level: High (score 6)"));
        assert!(output.contains("Primary Ingredient(s): Tinospora cordifolia"));
        assert!(output.contains("Read more: https://example.org/giloy"));
        assert!(output.contains("  - Review: https://example.org/review"));
        assert!(output.contains("  - Base Risk (High)"));
        assert!(output.contains("Existing liver conditions significantly increase risk."));
        assert!(output.contains("Live Evidence from PubMed"));
        assert!(output.contains("https://pubmed.ncbi.nlm.nih.gov/1/"));
        assert!(output.contains(DISCLAIMER));
    }

    #[test]
    fn test_assessment_text_without_evidence_record() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_assessment(&report(EvidenceSection::Searched {
                ingredient: "Tinospora cordifolia".to_string(),
                record: None,
            }))
            .unwrap();
        assert!(output.contains("No specific liver risk studies found on PubMed"));
    }

    #[test]
    fn test_assessment_text_not_warranted() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_assessment(&report(EvidenceSection::NotWarranted))
            .unwrap();
        assert!(!output.contains("Live Evidence"));
    }

    #[test]
    fn test_assessment_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter
            .format_assessment(&report(EvidenceSection::Searched {
                ingredient: "Tinospora cordifolia".to_string(),
                record: Some(record()),
            }))
            .unwrap();

        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["assessment"]["score"], 6);
        assert_eq!(value["assessment"]["level"], "High");
        assert_eq!(value["assessment"]["color"], "red");
        assert_eq!(value["assessment"]["factors"][0], "Base Risk (High)");
        assert_eq!(value["live_evidence"]["status"], "found");
        assert_eq!(value["live_evidence"]["record"]["url"], "https://pubmed.ncbi.nlm.nih.gov/1/");
        assert_eq!(value["product"]["supplementary_links"][0]["title"], "Review");
    }

    #[test]
    fn test_products_table_and_json() {
        let catalog = ProductCatalog::from_products(vec![(
            "Kava Root Extract".to_string(),
            ProductInfo::new(RiskLabel::High, vec!["Piper methysticum".to_string()]),
        )]);

        let table = Formatter::new(OutputFormat::Table, false)
            .format_products(&catalog)
            .unwrap();
        assert!(table.contains("Risk Label"));
        assert!(table.contains("Kava Root Extract"));

        let json_out = Formatter::new(OutputFormat::Json, false)
            .format_products(&catalog)
            .unwrap();
        let value: Value = serde_json::from_str(&json_out).unwrap();
        assert_eq!(value[0]["risk_label"], "High");
    }

    #[test]
    fn test_empty_catalog() {
        let output = Formatter::new(OutputFormat::Table, false)
            .format_products(&ProductCatalog::default())
            .unwrap();
        assert!(output.contains("No products in catalog"));
    }

    #[test]
    fn test_evidence_output() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert!(formatter
            .format_evidence("Unobtainium", None)
            .unwrap()
            .contains("'Unobtainium'"));

        let json_formatter = Formatter::new(OutputFormat::Json, false);
        let value: Value =
            serde_json::from_str(&json_formatter.format_evidence("Giloy", Some(&record())).unwrap())
                .unwrap();
        assert_eq!(value["evidence"]["title"], "Giloy-induced liver injury");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.info("done"), "ℹ done");
        assert_eq!(formatter.colorize("High", "orange"), "High");
    }

    #[test]
    fn test_precautions_differ_by_level() {
        assert_ne!(precaution(RiskLevel::High), precaution(RiskLevel::Low));
        assert_ne!(precaution(RiskLevel::Moderate), precaution(RiskLevel::Low));
    }
}
