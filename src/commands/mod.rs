pub mod calculators;
pub mod cardio;
pub mod dashboard;
pub mod routines;

use crate::models::{ProgressRecord, WorkoutRecord};
use crate::navigation::{NavState, Navigation, Page};
use crate::store::Store;

/// Everything the front end holds between renders
pub struct AppState {
  pub store: Store,
  pub nav: NavState,
}

impl AppState {
  pub fn new(store: Store) -> Self {
    Self {
      store,
      nav: NavState::default(),
    }
  }
}

pub fn get_workouts(state: &AppState) -> Result<Vec<WorkoutRecord>, String> {
  Ok(state.store.get_workouts().to_vec())
}

pub fn get_progress(state: &AppState) -> Result<Vec<ProgressRecord>, String> {
  Ok(state.store.get_progress().to_vec())
}

pub fn navigate(state: &mut AppState, nav: Navigation) -> Page {
  state.nav.apply(nav)
}
