//! BMI and calorie calculators
//!
//! Plain arithmetic over the reference tables in `catalog`. Inputs are not
//! range-checked: a zero height yields an infinite BMI rather than an error.

use crate::catalog::{self, BmiCategory, REFERENCE_BODY_MASS_KG};

/// BMI that `ideal_weight` aims for
pub const REFERENCE_BMI: f64 = 22.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalorieError {
  #[error("Unknown activity: {0}")]
  UnknownActivity(String),

  #[error("Unknown intensity '{intensity}' for {activity}")]
  UnknownIntensity { activity: String, intensity: String },
}

/// weight / height², rounded to two decimals
pub fn bmi(weight_kg: f64, height_m: f64) -> f64 {
  round2(weight_kg / (height_m * height_m))
}

/// Half-open bands: each band includes its lower bound
pub fn bmi_category(bmi: f64) -> BmiCategory {
  match bmi {
    b if b < 18.5 => BmiCategory::Underweight,
    b if b < 25.0 => BmiCategory::Normal,
    b if b < 30.0 => BmiCategory::Overweight,
    _ => BmiCategory::Obese,
  }
}

pub fn ideal_weight(height_m: f64) -> f64 {
  REFERENCE_BMI * height_m * height_m
}

/// Table rate scaled linearly from the 70 kg reference mass.
///
/// Unknown activities or intensities are errors, never a silent zero.
pub fn calorie_estimate(
  activity: &str,
  intensity: &str,
  duration_min: f64,
  weight_kg: f64,
) -> Result<f64, CalorieError> {
  let rates = catalog::activity_rates(activity)
    .ok_or_else(|| CalorieError::UnknownActivity(activity.to_string()))?;
  let idx = catalog::intensity_index(intensity).ok_or_else(|| CalorieError::UnknownIntensity {
    activity: activity.to_string(),
    intensity: intensity.to_string(),
  })?;

  Ok(rates[idx] * duration_min * (weight_kg / REFERENCE_BODY_MASS_KG))
}

fn round2(value: f64) -> f64 {
  (value * 100.0).round() / 100.0
}
