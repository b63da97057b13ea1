//! Products command implementation.

use crate::error::Result;
use crate::output::Formatter;
use herbsafe_catalog::ProductCatalog;

/// Execute the products command.
pub fn execute_products(catalog: &ProductCatalog, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_products(catalog)?);
    Ok(())
}
