//! Risk assessment output

use crate::product::RiskLabel;

/// Risk level derived from a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RiskLevel {
    /// Score below the moderate threshold
    Low,

    /// Score in the moderate band
    Moderate,

    /// Score at or above the high threshold
    High,
}

impl RiskLevel {
    /// Get the level name
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }

    /// Presentation colour hint tied to the level
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Low => "green",
            RiskLevel::Moderate => "orange",
            RiskLevel::High => "red",
        }
    }

    /// Whether live literature evidence should be looked up for this level
    pub fn warrants_evidence(&self) -> bool {
        matches!(self, RiskLevel::Moderate | RiskLevel::High)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scoring rule that fired during an assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskFactor {
    /// Product label above Low
    BaseRisk(RiskLabel),

    /// BMI below the underweight cut-off
    LowBmi,

    /// Age at or above the senior cut-off
    Age,

    /// Known liver condition
    LiverDisease,

    /// Regular alcohol use
    Alcohol,
}

impl RiskFactor {
    /// Human-readable explanation shown to the user
    pub fn describe(&self) -> String {
        match self {
            RiskFactor::BaseRisk(label) => format!("Base Risk ({})", label),
            RiskFactor::LowBmi => "Low BMI (<18.5) may increase sensitivity.".to_string(),
            RiskFactor::Age => "Age (>=65 years) increases sensitivity.".to_string(),
            RiskFactor::LiverDisease => {
                "Existing liver conditions significantly increase risk.".to_string()
            }
            RiskFactor::Alcohol => "Regular alcohol use can increase liver strain.".to_string(),
        }
    }
}

impl std::fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Result of scoring one product against one profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskAssessment {
    /// Sum of all applied increments (at least 1)
    pub score: u32,

    /// Triggered rules in evaluation order
    pub factors: Vec<RiskFactor>,

    /// Level derived from `score`
    pub level: RiskLevel,

    /// Colour hint derived from `level`
    pub color: &'static str,
}

impl RiskAssessment {
    /// Factor explanations in evaluation order
    pub fn explanations(&self) -> Vec<String> {
        self.factors.iter().map(RiskFactor::describe).collect()
    }
}
