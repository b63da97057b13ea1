//! HerbSafe Domain Layer
//!
//! This crate contains the core decision logic and data model for HerbSafe.
//! It has no third-party runtime dependencies and defines the value objects,
//! the deterministic risk scoring engine, and the trait interface that the
//! literature provider crate implements.
//!
//! ## Key Concepts
//!
//! - **ProductInfo**: A catalogued herbal product with a static risk label
//! - **UserProfile**: Self-reported health attributes for one assessment
//! - **RiskAssessment**: Score, level and the ordered factors that fired
//! - **EvidenceRecord**: A literature citation backing a hepatotoxicity concern
//!
//! ## Example
//!
//! ```
//! use herbsafe_domain::{scoring, ProductInfo, RiskLabel, RiskLevel, UserProfile};
//!
//! let product = ProductInfo::new(RiskLabel::High, vec!["Tinospora cordifolia".to_string()]);
//! let profile = UserProfile::new(70).with_body(50.0, 180.0).with_liver_disease(true);
//!
//! let assessment = scoring::compute(&product, &profile);
//! assert_eq!(assessment.score, 7);
//! assert_eq!(assessment.level, RiskLevel::High);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assessment;
pub mod evidence;
pub mod product;
pub mod profile;
pub mod scoring;
pub mod traits;

// Re-exports for convenience
pub use assessment::{RiskAssessment, RiskFactor, RiskLevel};
pub use evidence::{ArticleSummary, EvidenceOutcome, EvidenceRecord};
pub use product::{ProductInfo, RiskLabel, SupplementaryLink};
pub use profile::UserProfile;
