//! Commands for the cardio log

use super::AppState;
use crate::calculators::calorie_estimate;
use crate::models::ProgressRecord;

/// Estimate calories for a session and append it to the progress log.
///
/// An unknown activity or intensity fails before anything is stored.
pub fn log_cardio_session(
  state: &mut AppState,
  activity: String,
  intensity: String,
  duration: u32,
  weight_kg: f64,
) -> Result<ProgressRecord, String> {
  let minutes = f64::from(duration);
  let calories = calorie_estimate(&activity, &intensity, minutes, weight_kg)
    .map_err(|e| format!("Failed to estimate calories: {}", e))?;
  let record = ProgressRecord::new(activity, intensity, minutes, calories);

  state
    .store
    .append_progress(record.clone())
    .map_err(|e| format!("Session kept but not saved: {}", e))?;

  tracing::info!(activity = %record.activity, calories, "Logged cardio session");
  Ok(record)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::assert_approx_eq;
  use crate::stats::total_calories;
  use crate::test_utils::temp_app_state;

  #[test]
  fn test_log_session_stores_estimate() {
    let (_dir, mut state) = temp_app_state();

    let record = log_cardio_session(&mut state, "Correr".into(), "Alta".into(), 30, 70.0).unwrap();
    assert_approx_eq!(record.calories.unwrap(), 420.0, 1e-9);
    assert_approx_eq!(total_calories(state.store.get_progress()), 420.0, 1e-9);
  }

  #[test]
  fn test_unknown_activity_stores_nothing() {
    let (_dir, mut state) = temp_app_state();

    let err = log_cardio_session(&mut state, "Remo".into(), "Alta".into(), 30, 70.0).unwrap_err();
    assert!(err.contains("Unknown activity"));
    assert!(state.store.get_progress().is_empty());
  }
}
