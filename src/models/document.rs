use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{lenient, ProgressRecord, WorkoutRecord};

/// Free-form profile attributes (weight, height, ...)
pub type UserProfile = Map<String, Value>;

/// The whole persisted aggregate. Every key defaults, so older or partial
/// files still load with all three collections present; a record that
/// cannot be read at all is dropped on its own without losing its siblings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
  #[serde(default, deserialize_with = "lenient::vec")]
  pub workouts: Vec<WorkoutRecord>,
  #[serde(default, deserialize_with = "lenient::vec")]
  pub progress: Vec<ProgressRecord>,
  #[serde(default, deserialize_with = "lenient::map")]
  pub user_profile: UserProfile,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_empty_document_serializes_all_keys() {
    let json = serde_json::to_value(Document::default()).unwrap();
    assert_eq!(
      json,
      serde_json::json!({ "workouts": [], "progress": [], "user_profile": {} })
    );
  }

  #[test]
  fn test_missing_keys_default_on_read() {
    let doc: Document = serde_json::from_str(r#"{"workouts": []}"#).unwrap();
    assert!(doc.progress.is_empty());
    assert!(doc.user_profile.is_empty());
  }

  #[test]
  fn test_bad_entries_do_not_sink_the_document() {
    let doc: Document = serde_json::from_str(
      r#"{"workouts": [42, {"date": "2024-01-01T00:00:00", "type": "cardio"}], "progress": "oops", "user_profile": []}"#,
    )
    .unwrap();
    assert_eq!(doc.workouts.len(), 1);
    assert_eq!(doc.workouts[0].workout_type, "cardio");
    assert!(doc.progress.is_empty());
    assert!(doc.user_profile.is_empty());
  }
}
