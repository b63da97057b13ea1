//! Evidence command implementation.

use crate::cli::EvidenceArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use herbsafe_domain::traits::LiteratureIndex;
use herbsafe_literature::EvidenceService;
use std::fmt::Display;

/// Execute the evidence command.
pub fn execute_evidence<I>(
    args: EvidenceArgs,
    service: &EvidenceService<I>,
    formatter: &Formatter,
) -> Result<()>
where
    I: LiteratureIndex,
    I::Error: Display,
{
    let ingredient = args.ingredient.trim();
    if ingredient.is_empty() {
        return Err(CliError::InvalidInput(
            "Ingredient name cannot be empty".to_string(),
        ));
    }

    let record = service.find_evidence(ingredient);
    println!("{}", formatter.format_evidence(ingredient, record.as_ref())?);
    Ok(())
}
