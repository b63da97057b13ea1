//! Command implementations.

pub mod assess;
pub mod config;
pub mod evidence;
pub mod products;

pub use self::assess::{execute_assess, run_assess};
pub use self::config::execute_config;
pub use self::evidence::execute_evidence;
pub use self::products::execute_products;
