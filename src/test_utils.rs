//! Test utilities shared across module tests
//!
//! - Temp-dir backed stores
//! - Mock record factories
//! - `assert_approx_eq!`

use tempfile::TempDir;

use crate::commands::AppState;
use crate::models::{ProgressRecord, RoutineExercise, WorkoutRecord};
use crate::store::{BackupPolicy, Store};

/// ---------------------------------------------------------------------------
/// Store Test Utilities
/// ---------------------------------------------------------------------------

/// Store backed by a fresh temp directory, backups off.
/// Keep the `TempDir` alive for as long as the store is used.
pub fn temp_store() -> (TempDir, Store) {
  let dir = TempDir::new().expect("Failed to create temp dir");
  let store = Store::open(dir.path().join("fitness_data.json"), BackupPolicy::disabled());
  (dir, store)
}

pub fn temp_app_state() -> (TempDir, AppState) {
  let (dir, store) = temp_store();
  (dir, AppState::new(store))
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// Workout dated `days_ago` days before 2024-06-15
pub fn mock_workout(workout_type: &str, days_ago: u32) -> WorkoutRecord {
  WorkoutRecord {
    date: format!("2024-06-{:02}T08:00:00", 15 - days_ago.min(14)),
    workout_type: workout_type.to_string(),
    level: Some("beginner".to_string()),
    duration: 30,
    exercises: vec![RoutineExercise {
      exercise: "Sentadillas".to_string(),
      sets: "3 x 10-15".to_string(),
      description: "Fortalece piernas y glúteos".to_string(),
    }],
  }
}

pub fn workout_on(date: &str) -> WorkoutRecord {
  WorkoutRecord {
    date: date.to_string(),
    ..mock_workout("cardio", 0)
  }
}

pub fn mock_progress(activity: &str, duration: u32, calories: Option<f64>) -> ProgressRecord {
  ProgressRecord {
    date: "2024-06-15T08:00:00".to_string(),
    activity: activity.to_string(),
    duration: f64::from(duration),
    intensity: "Moderada".to_string(),
    calories,
  }
}

pub fn progress_on(date: &str, calories: Option<f64>) -> ProgressRecord {
  ProgressRecord {
    date: date.to_string(),
    ..mock_progress("Correr", 30, calories)
  }
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_mock_factories_create_valid_data() {
    let workout = mock_workout("strength", 3);
    assert_eq!(workout.date, "2024-06-12T08:00:00");
    assert_eq!(workout.exercises.len(), 1);

    let progress = progress_on("2024-01-01T00:00:00", None);
    assert_eq!(progress.activity, "Correr");
    assert!(progress.calories.is_none());
  }

  #[test]
  fn test_temp_store_starts_without_file() {
    let (_dir, store) = temp_store();
    assert!(!store.path().exists());
  }
}
