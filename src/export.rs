//! CSV export for the dashboard download buttons

use crate::models::{ProgressRecord, WorkoutRecord};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
  #[error("CSV error: {0}")]
  Csv(#[from] csv::Error),

  #[error("CSV buffer error: {0}")]
  Buffer(String),
}

pub fn workouts_csv(workouts: &[WorkoutRecord]) -> Result<String, ExportError> {
  let mut writer = csv::Writer::from_writer(Vec::new());
  writer.write_record(["date", "type", "level", "duration", "exercises"])?;

  for workout in workouts {
    let exercises = workout
      .exercises
      .iter()
      .map(|e| e.exercise.as_str())
      .collect::<Vec<_>>()
      .join("; ");
    let duration = workout.duration.to_string();
    writer.write_record([
      workout.date.as_str(),
      workout.workout_type.as_str(),
      workout.level.as_deref().unwrap_or(""),
      duration.as_str(),
      exercises.as_str(),
    ])?;
  }

  finish(writer)
}

pub fn progress_csv(progress: &[ProgressRecord]) -> Result<String, ExportError> {
  let mut writer = csv::Writer::from_writer(Vec::new());
  writer.write_record(["date", "activity", "duration", "intensity", "calories"])?;

  for record in progress {
    let duration = record.duration.to_string();
    let calories = record.calories.map(|c| c.to_string()).unwrap_or_default();
    writer.write_record([
      record.date.as_str(),
      record.activity.as_str(),
      duration.as_str(),
      record.intensity.as_str(),
      calories.as_str(),
    ])?;
  }

  finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, ExportError> {
  let bytes = writer
    .into_inner()
    .map_err(|e| ExportError::Buffer(e.to_string()))?;
  String::from_utf8(bytes).map_err(|e| ExportError::Buffer(e.to_string()))
}
