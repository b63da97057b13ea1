//! Risk scoring engine
//!
//! Turns a product record and a user profile into a score, a level and the
//! ordered list of factors that contributed. Rules are additive and applied
//! in a fixed order: base risk, BMI, age, liver disease, alcohol.

use crate::{ProductInfo, RiskAssessment, RiskFactor, RiskLevel, UserProfile};

/// BMI below this value counts as underweight
pub const UNDERWEIGHT_BMI: f64 = 18.5;

/// Age from which sensitivity increases
pub const SENIOR_AGE: u32 = 65;

/// Increment for an underweight BMI
pub const LOW_BMI_WEIGHT: u32 = 1;

/// Increment for age at or above [`SENIOR_AGE`]
pub const AGE_WEIGHT: u32 = 1;

/// Increment for a known liver condition
pub const LIVER_DISEASE_WEIGHT: u32 = 2;

/// Increment for regular alcohol use
pub const ALCOHOL_WEIGHT: u32 = 1;

/// Scores at or above this are High
pub const HIGH_THRESHOLD: u32 = 5;

/// Scores at or above this (and below [`HIGH_THRESHOLD`]) are Moderate
pub const MODERATE_THRESHOLD: u32 = 3;

/// Score a product for a user
///
/// Total over any input: missing body measurements skip the BMI rule and
/// unrecognised labels have already resolved to Low.
pub fn compute(product: &ProductInfo, profile: &UserProfile) -> RiskAssessment {
    let mut score = 0;
    let mut factors = Vec::new();

    // 1. Base risk
    let base = product.risk_label.base_score();
    score += base;
    if base > 1 {
        factors.push(RiskFactor::BaseRisk(product.risk_label));
    }

    // 2. Body-mass modifier
    if let Some(bmi) = profile.bmi() {
        if bmi < UNDERWEIGHT_BMI {
            score += LOW_BMI_WEIGHT;
            factors.push(RiskFactor::LowBmi);
        }
    }

    // 3. Age modifier
    if profile.age >= SENIOR_AGE {
        score += AGE_WEIGHT;
        factors.push(RiskFactor::Age);
    }

    // 4. Liver-disease modifier
    if profile.liver_disease {
        score += LIVER_DISEASE_WEIGHT;
        factors.push(RiskFactor::LiverDisease);
    }

    // 5. Alcohol modifier
    if profile.consumes_alcohol {
        score += ALCOHOL_WEIGHT;
        factors.push(RiskFactor::Alcohol);
    }

    let (level, color) = level_of(score);

    RiskAssessment {
        score,
        factors,
        level,
        color,
    }
}

/// Classify a score into a level and its colour hint
///
/// First match wins, in descending order of threshold.
pub fn level_of(score: u32) -> (RiskLevel, &'static str) {
    let level = if score >= HIGH_THRESHOLD {
        RiskLevel::High
    } else if score >= MODERATE_THRESHOLD {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    };

    (level, level.color())
}
