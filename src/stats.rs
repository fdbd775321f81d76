//! Derived statistics over the stored collections
//!
//! Pure functions: totals, averages, the "this week" count and per-week
//! calorie buckets. Nothing here touches disk.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{format_timestamp, ProgressRecord, WorkoutRecord};

/// ---------------------------------------------------------------------------
/// Totals and Averages
/// ---------------------------------------------------------------------------

/// Sum of calories, records without a value count as 0
pub fn total_calories(progress: &[ProgressRecord]) -> f64 {
  progress.iter().map(|p| p.calories.unwrap_or(0.0)).sum()
}

/// Mean session length in minutes, 0 for an empty log
pub fn average_duration(progress: &[ProgressRecord]) -> f64 {
  if progress.is_empty() {
    return 0.0;
  }
  let total: f64 = progress.iter().map(|p| p.duration).sum();
  total / progress.len() as f64
}

/// Workouts dated strictly after `now - 7 days`.
///
/// Compares the stored strings directly; this only works because every
/// timestamp is written in the same fixed-width layout.
pub fn count_this_week(workouts: &[WorkoutRecord], now: NaiveDateTime) -> usize {
  let cutoff = format_timestamp(&(now - Duration::days(7)));
  workouts
    .iter()
    .filter(|w| w.date.as_str() > cutoff.as_str())
    .count()
}

/// ---------------------------------------------------------------------------
/// Weekly Buckets
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTotal {
  /// ISO week key, e.g. `2024-W01`
  pub week: String,
  pub calories: f64,
}

/// Calories per ISO week, ascending by week key
pub fn weekly_totals(progress: &[ProgressRecord]) -> Vec<WeeklyTotal> {
  let mut buckets: BTreeMap<String, f64> = BTreeMap::new();

  for record in progress {
    let Some(date) = parse_record_date(&record.date) else {
      tracing::debug!(date = %record.date, "Skipping progress record with unparseable date");
      continue;
    };
    let iso = date.iso_week();
    let key = format!("{:04}-W{:02}", iso.year(), iso.week());
    *buckets.entry(key).or_insert(0.0) += record.calories.unwrap_or(0.0);
  }

  buckets
    .into_iter()
    .map(|(week, calories)| WeeklyTotal { week, calories })
    .collect()
}

/// Accepts the store's own layout plus the looser ISO forms older files
/// may contain (fractional seconds, offsets, bare dates).
fn parse_record_date(raw: &str) -> Option<NaiveDate> {
  if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
    return Some(dt.date());
  }
  if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
    return Some(dt.date_naive());
  }
  NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// ---------------------------------------------------------------------------
/// Dashboard Summary
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
  pub workouts: usize,
  pub total_calories: f64,
  pub average_duration: f64,
  pub this_week: usize,
}

impl DashboardSummary {
  pub fn compute(
    workouts: &[WorkoutRecord],
    progress: &[ProgressRecord],
    now: NaiveDateTime,
  ) -> Self {
    Self {
      workouts: workouts.len(),
      total_calories: total_calories(progress),
      average_duration: average_duration(progress),
      this_week: count_this_week(workouts, now),
    }
  }

  pub fn now(workouts: &[WorkoutRecord], progress: &[ProgressRecord]) -> Self {
    Self::compute(workouts, progress, Local::now().naive_local())
  }
}
