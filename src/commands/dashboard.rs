//! Dashboard metrics, weekly chart data and CSV downloads

use super::AppState;
use crate::export::{progress_csv, workouts_csv};
use crate::stats::{weekly_totals, DashboardSummary, WeeklyTotal};

pub fn get_dashboard(state: &AppState) -> Result<DashboardSummary, String> {
  Ok(DashboardSummary::now(
    state.store.get_workouts(),
    state.store.get_progress(),
  ))
}

pub fn get_weekly_totals(state: &AppState) -> Result<Vec<WeeklyTotal>, String> {
  Ok(weekly_totals(state.store.get_progress()))
}

pub fn export_workouts(state: &AppState) -> Result<String, String> {
  workouts_csv(state.store.get_workouts()).map_err(|e| format!("Failed to export workouts: {}", e))
}

pub fn export_progress(state: &AppState) -> Result<String, String> {
  progress_csv(state.store.get_progress()).map_err(|e| format!("Failed to export progress: {}", e))
}
