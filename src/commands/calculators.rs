use serde::Serialize;

use crate::calculators::{bmi, bmi_category, ideal_weight};
use crate::catalog::BmiCategory;

#[derive(Debug, Clone, Serialize)]
pub struct BmiReport {
  pub bmi: f64,
  pub category: BmiCategory,
  pub label: &'static str,
  pub color: &'static str,
  pub ideal_weight: f64,
}

pub fn compute_bmi(weight_kg: f64, height_m: f64) -> Result<BmiReport, String> {
  let value = bmi(weight_kg, height_m);
  let category = bmi_category(value);
  Ok(BmiReport {
    bmi: value,
    category,
    label: category.label(),
    color: category.color(),
    ideal_weight: ideal_weight(height_m),
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_compute_bmi_report() {
    let report = compute_bmi(70.0, 1.75).unwrap();
    assert_eq!(report.bmi, 22.86);
    assert_eq!(report.category, BmiCategory::Normal);
    assert_eq!(report.label, "Peso normal");
    assert!((report.ideal_weight - 67.375).abs() < 1e-9);
  }
}
