//! User health profile

/// Snapshot of a user's self-reported health attributes
///
/// Constructed fresh for each assessment. Range checks (age in 1..=120,
/// positive weight and height) belong to the presentation boundary; the
/// scoring engine does not revalidate them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserProfile {
    /// Age in years
    pub age: u32,

    /// Body weight in kilograms
    pub weight_kg: Option<f64>,

    /// Height in centimetres
    pub height_cm: Option<f64>,

    /// Known liver condition
    pub liver_disease: bool,

    /// Regular alcohol consumption
    pub consumes_alcohol: bool,
}

impl UserProfile {
    /// Create a profile with only an age set
    pub fn new(age: u32) -> Self {
        Self {
            age,
            ..Self::default()
        }
    }

    /// Set weight and height together
    pub fn with_body(mut self, weight_kg: f64, height_cm: f64) -> Self {
        self.weight_kg = Some(weight_kg);
        self.height_cm = Some(height_cm);
        self
    }

    /// Set the liver-disease flag
    pub fn with_liver_disease(mut self, liver_disease: bool) -> Self {
        self.liver_disease = liver_disease;
        self
    }

    /// Set the alcohol-use flag
    pub fn with_alcohol(mut self, consumes_alcohol: bool) -> Self {
        self.consumes_alcohol = consumes_alcohol;
        self
    }

    /// Body-mass index, when a non-zero weight and a positive height are
    /// both known
    pub fn bmi(&self) -> Option<f64> {
        let weight = self.weight_kg.filter(|w| *w != 0.0)?;
        let height = self.height_cm.filter(|h| *h > 0.0)?;
        let height_m = height / 100.0;
        Some(weight / (height_m * height_m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi() {
        let profile = UserProfile::new(30).with_body(70.0, 170.0);
        let bmi = profile.bmi().unwrap();
        assert!((bmi - 24.22).abs() < 0.01);
    }

    #[test]
    fn test_bmi_missing_inputs() {
        assert!(UserProfile::new(30).bmi().is_none());

        let mut weight_only = UserProfile::new(30);
        weight_only.weight_kg = Some(60.0);
        assert!(weight_only.bmi().is_none());

        let mut height_only = UserProfile::new(30);
        height_only.height_cm = Some(160.0);
        assert!(height_only.bmi().is_none());
    }

    #[test]
    fn test_bmi_non_positive_height() {
        assert!(UserProfile::new(30).with_body(60.0, 0.0).bmi().is_none());
        assert!(UserProfile::new(30).with_body(60.0, -150.0).bmi().is_none());
    }

    #[test]
    fn test_bmi_zero_weight() {
        assert!(UserProfile::new(30).with_body(0.0, 170.0).bmi().is_none());
    }
}
