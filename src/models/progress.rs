use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::models::{format_timestamp, lenient};

/// A logged cardio session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
  #[serde(default, deserialize_with = "lenient::string")]
  pub date: String,
  #[serde(default, deserialize_with = "lenient::string")]
  pub activity: String,
  /// Minutes; stored as a float so fractional sessions survive a reload
  #[serde(default, deserialize_with = "lenient::number")]
  pub duration: f64,
  #[serde(default, deserialize_with = "lenient::string")]
  pub intensity: String,
  #[serde(
    default,
    deserialize_with = "lenient::opt_number",
    skip_serializing_if = "Option::is_none"
  )]
  pub calories: Option<f64>,
}

impl ProgressRecord {
  pub fn new(
    activity: impl Into<String>,
    intensity: impl Into<String>,
    duration: f64,
    calories: f64,
  ) -> Self {
    Self::new_at(Local::now(), activity, intensity, duration, calories)
  }

  pub fn new_at(
    at: DateTime<Local>,
    activity: impl Into<String>,
    intensity: impl Into<String>,
    duration: f64,
    calories: f64,
  ) -> Self {
    Self {
      date: format_timestamp(&at.naive_local()),
      activity: activity.into(),
      duration,
      intensity: intensity.into(),
      calories: Some(calories),
    }
  }
}
