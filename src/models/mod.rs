pub mod document;
pub(crate) mod lenient;
pub mod progress;
pub mod workout;

pub use document::{Document, UserProfile};
pub use progress::ProgressRecord;
pub use workout::{RoutineExercise, WorkoutRecord};

use chrono::NaiveDateTime;

/// The single timestamp layout written into the store.
///
/// Fixed width and zero padded, so string order equals time order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn format_timestamp(at: &NaiveDateTime) -> String {
  at.format(TIMESTAMP_FORMAT).to_string()
}
