//! End-to-end assessment against the shipped catalog with an in-memory index

use clap::Parser;
use herbsafe_catalog::ProductCatalog;
use herbsafe_cli::commands::run_assess;
use herbsafe_cli::config::OutputFormat;
use herbsafe_cli::output::EvidenceSection;
use herbsafe_cli::{Cli, Command, Config, Formatter};
use herbsafe_domain::{ArticleSummary, RiskLevel};
use herbsafe_literature::{hepatotoxicity_query, EvidenceService, MockIndex};
use std::fs;
use tempfile::TempDir;

const SHIPPED_CATALOG: &str = include_str!("../../../data/brands.json");

fn assess_args(argv: &[&str]) -> herbsafe_cli::cli::AssessArgs {
    let mut full = vec!["herbsafe", "assess"];
    full.extend_from_slice(argv);
    match Cli::parse_from(full).command {
        Command::Assess(args) => args,
        _ => panic!("Expected Assess command"),
    }
}

fn shipped() -> ProductCatalog {
    ProductCatalog::from_json_str(SHIPPED_CATALOG).unwrap()
}

#[test]
fn test_senior_with_liver_disease_on_giloy() {
    let mut index = MockIndex::new();
    index.add_hits(&hepatotoxicity_query("Giloy"), &["38291"]);
    index.add_article(
        "38291",
        ArticleSummary::new(
            Some("Giloy-associated autoimmune-like hepatitis".to_string()),
            Some("x".repeat(350)),
        ),
    );
    let service = || Ok(EvidenceService::new(index.clone()));

    let args = assess_args(&[
        "Zandu Giloy Tablets",
        "--age",
        "70",
        "--weight",
        "50",
        "--height",
        "180",
        "--liver-disease",
    ]);
    let report = run_assess(&args, &shipped(), service).unwrap();

    assert_eq!(report.assessment.score, 7);
    assert_eq!(report.assessment.level, RiskLevel::High);
    assert_eq!(report.assessment.color, "red");
    assert_eq!(report.assessment.factors.len(), 4);

    // Scientific name has no hits; the alias does
    assert_eq!(index.searches().len(), 2);
    match &report.evidence {
        EvidenceSection::Searched { ingredient, record } => {
            assert_eq!(ingredient, "Tinospora cordifolia");
            let record = record.as_ref().unwrap();
            assert_eq!(record.url, "https://pubmed.ncbi.nlm.nih.gov/38291/");
            assert_eq!(record.snippet.chars().count(), 303);
        }
        other => panic!("Expected Searched, got {:?}", other),
    }

    let text = Formatter::new(OutputFormat::Table, false)
        .format_assessment(&report)
        .unwrap();
    assert!(text.contains("Low BMI (<18.5) may increase sensitivity."));
    assert!(text.contains("Age (>=65 years) increases sensitivity."));
}

#[test]
fn test_young_healthy_turmeric_user() {
    let index = MockIndex::new();
    let service = || Ok(EvidenceService::new(index.clone()));

    let args = assess_args(&["Himalaya Turmeric 95", "--age", "30"]);
    let report = run_assess(&args, &shipped(), service).unwrap();

    assert_eq!(report.assessment.score, 1);
    assert_eq!(report.assessment.level, RiskLevel::Low);
    assert_eq!(report.assessment.color, "green");
    assert!(report.assessment.factors.is_empty());
    assert_eq!(report.evidence, EvidenceSection::NotWarranted);
    assert_eq!(index.call_count(), 0);
}

#[test]
fn test_alcohol_pushes_moderate_label_up() {
    let service = || Ok(EvidenceService::new(MockIndex::new()));
    let args = assess_args(&["Green Tea Extract Capsules", "--alcohol", "--no-evidence"]);
    let report = run_assess(&args, &shipped(), service).unwrap();

    assert_eq!(report.assessment.score, 3);
    assert_eq!(report.assessment.level, RiskLevel::Moderate);
    assert_eq!(report.evidence, EvidenceSection::Skipped);
}

#[test]
fn test_config_file_drives_service_and_catalog() {
    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("brands.json");
    fs::write(&catalog_path, SHIPPED_CATALOG).unwrap();

    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!(
            "[catalog]\npath = {:?}\n\n[synonyms]\n\"Piper methysticum\" = [\"Kava\"]\n",
            catalog_path.display().to_string()
        ),
    )
    .unwrap();

    let config = Config::load(Some(&config_path)).unwrap();
    let catalog = ProductCatalog::load(config.catalog_path(None)).unwrap();
    assert!(catalog.get("Kava Root Extract").is_some());

    let table = config.synonym_table();
    assert_eq!(table.aliases_for("piper methysticum"), ["Kava"]);
}

#[test]
fn test_invalid_pubmed_settings_do_not_block_verdict() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[pubmed]\ntimeout_secs = 0\n").unwrap();

    let config = Config::load(Some(&config_path)).unwrap();

    let low = run_assess(&assess_args(&["Amla Juice"]), &shipped(), || {
        config.evidence_service()
    })
    .unwrap();
    assert_eq!(low.evidence, EvidenceSection::NotWarranted);

    let moderate = run_assess(&assess_args(&["Kava Root Extract"]), &shipped(), || {
        config.evidence_service()
    })
    .unwrap();
    assert_eq!(moderate.assessment.level, RiskLevel::Moderate);
    assert_eq!(
        moderate.evidence,
        EvidenceSection::Searched {
            ingredient: "Piper methysticum".to_string(),
            record: None,
        }
    );
}
