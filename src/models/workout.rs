use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::models::{format_timestamp, lenient};

/// One exercise as it was selected for a routine.
///
/// A snapshot, not a reference into the catalog: editing the catalog later
/// never changes what a saved workout says was done.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutineExercise {
  #[serde(default, deserialize_with = "lenient::string")]
  pub exercise: String,
  /// Sets for strength work, duration for cardio and flexibility
  #[serde(default, deserialize_with = "lenient::string")]
  pub sets: String,
  #[serde(default, deserialize_with = "lenient::string")]
  pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
  #[serde(default, deserialize_with = "lenient::string")]
  pub date: String,
  #[serde(rename = "type", default, deserialize_with = "lenient::string")]
  pub workout_type: String,
  /// Absent for custom single-exercise entries
  #[serde(
    default,
    deserialize_with = "lenient::opt_string",
    skip_serializing_if = "Option::is_none"
  )]
  pub level: Option<String>,
  #[serde(default, deserialize_with = "lenient::minutes")]
  pub duration: u32,
  #[serde(default, deserialize_with = "lenient::vec")]
  pub exercises: Vec<RoutineExercise>,
}

impl WorkoutRecord {
  /// Build a record stamped with the current local time
  pub fn new(
    workout_type: impl Into<String>,
    level: Option<String>,
    duration: u32,
    exercises: Vec<RoutineExercise>,
  ) -> Self {
    Self::new_at(Local::now(), workout_type, level, duration, exercises)
  }

  pub fn new_at(
    at: DateTime<Local>,
    workout_type: impl Into<String>,
    level: Option<String>,
    duration: u32,
    exercises: Vec<RoutineExercise>,
  ) -> Self {
    Self {
      date: format_timestamp(&at.naive_local()),
      workout_type: workout_type.into(),
      level,
      duration,
      exercises,
    }
  }
}
