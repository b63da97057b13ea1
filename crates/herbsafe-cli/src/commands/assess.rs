//! Assess command implementation.

use crate::cli::AssessArgs;
use crate::error::{CliError, Result};
use crate::output::{AssessmentReport, EvidenceSection, Formatter};
use herbsafe_catalog::ProductCatalog;
use herbsafe_domain::scoring;
use herbsafe_domain::traits::LiteratureIndex;
use herbsafe_domain::UserProfile;
use herbsafe_literature::EvidenceService;
use std::fmt::Display;
use tracing::{debug, info, warn};

/// Build a user profile from command-line arguments.
pub fn build_profile(args: &AssessArgs) -> Result<UserProfile> {
    let mut profile = UserProfile::new(args.age)
        .with_liver_disease(args.liver_disease)
        .with_alcohol(args.alcohol);

    if let Some(weight) = args.weight {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(CliError::InvalidInput(
                "Weight must be a positive number of kilograms".to_string(),
            ));
        }
        profile.weight_kg = Some(weight);
    }

    if let Some(height) = args.height {
        if !height.is_finite() || height <= 0.0 {
            return Err(CliError::InvalidInput(
                "Height must be a positive number of centimetres".to_string(),
            ));
        }
        profile.height_cm = Some(height);
    }

    Ok(profile)
}

/// Score a catalogued product and, when warranted, fetch live evidence.
///
/// `service` is only invoked when a lookup is needed. If it fails, the
/// verdict is still returned with no evidence.
pub fn run_assess<I, F>(
    args: &AssessArgs,
    catalog: &ProductCatalog,
    service: F,
) -> Result<AssessmentReport>
where
    I: LiteratureIndex,
    I::Error: Display,
    F: FnOnce() -> Result<EvidenceService<I>>,
{
    let product = catalog
        .get(&args.product)
        .ok_or_else(|| CliError::UnknownProduct(args.product.clone()))?
        .clone();
    let profile = build_profile(args)?;

    let assessment = scoring::compute(&product, &profile);
    info!(
        product = %args.product,
        score = assessment.score,
        level = %assessment.level,
        "Assessment computed"
    );

    let evidence = if !assessment.level.warrants_evidence() {
        EvidenceSection::NotWarranted
    } else if args.no_evidence {
        EvidenceSection::Skipped
    } else {
        match product.primary_ingredient() {
            Some(ingredient) => {
                debug!(ingredient, "Looking up live evidence");
                let record = match service() {
                    Ok(service) => service.find_evidence(ingredient),
                    Err(e) => {
                        warn!(
                            ingredient,
                            error = %e,
                            "Evidence service unavailable, reporting no evidence"
                        );
                        None
                    }
                };
                EvidenceSection::Searched {
                    ingredient: ingredient.to_string(),
                    record,
                }
            }
            None => EvidenceSection::NoIngredient,
        }
    };

    Ok(AssessmentReport {
        product_name: args.product.clone(),
        product,
        assessment,
        evidence,
    })
}

/// Execute the assess command.
pub fn execute_assess<I, F>(
    args: AssessArgs,
    catalog: &ProductCatalog,
    service: F,
    formatter: &Formatter,
) -> Result<()>
where
    I: LiteratureIndex,
    I::Error: Display,
    F: FnOnce() -> Result<EvidenceService<I>>,
{
    let report = run_assess(&args, catalog, service)?;
    println!("{}", formatter.format_assessment(&report)?);
    Ok(())
}
