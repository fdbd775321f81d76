//! Commands for generating and managing workouts

use super::AppState;
use crate::models::WorkoutRecord;
use crate::routine::generate_routine;

/// Generate a routine, save it as a workout and return the saved record
pub fn generate_workout(
  state: &mut AppState,
  category: String,
  level: String,
  duration: u32,
) -> Result<WorkoutRecord, String> {
  let exercises = generate_routine(&category, &level, duration);
  let record = WorkoutRecord::new(category, Some(level), duration, exercises);

  state
    .store
    .append_workout(record.clone())
    .map_err(|e| format!("Workout kept but not saved: {}", e))?;

  tracing::info!(
    workout_type = %record.workout_type,
    exercises = record.exercises.len(),
    "Saved workout"
  );
  Ok(record)
}

/// Delete a workout by position; returns whether anything was removed
pub fn delete_workout(state: &mut AppState, index: usize) -> Result<bool, String> {
  state
    .store
    .delete_workout(index)
    .map_err(|e| format!("Workout removed but not saved: {}", e))
}
