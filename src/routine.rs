//! Routine generator
//!
//! Picks a random subset of catalog exercises for a `(category, level)` pair,
//! sized by the requested session length. Unknown pairs never fail; they get
//! a single generic placeholder instead.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{self, ExerciseDescriptor};
use crate::models::RoutineExercise;

const PLACEHOLDER_NAME: &str = "Ejercicio básico";
const PLACEHOLDER_SETS: &str = "3 x 10";
const PLACEHOLDER_DESCRIPTION: &str = "Ejercicio general";

const FALLBACK: &[ExerciseDescriptor] = &[ExerciseDescriptor {
  name: PLACEHOLDER_NAME,
  sets: Some(PLACEHOLDER_SETS),
  duration: None,
  description: Some(PLACEHOLDER_DESCRIPTION),
  intensity: None,
  style: None,
}];

/// Breakpoint table: session minutes -> number of exercises
pub fn exercise_count(duration_minutes: u32) -> usize {
  match duration_minutes {
    d if d <= 15 => 3,
    d if d <= 30 => 5,
    d if d <= 45 => 7,
    _ => 8,
  }
}

/// Generate a routine using the thread-local RNG
pub fn generate_routine(category: &str, level: &str, duration_minutes: u32) -> Vec<RoutineExercise> {
  generate_routine_with(&mut rand::thread_rng(), category, level, duration_minutes)
}

/// Generate a routine from an explicit random source.
///
/// Always returns at least one exercise. Sampling is without replacement,
/// so no catalog entry appears twice.
pub fn generate_routine_with<R: Rng + ?Sized>(
  rng: &mut R,
  category: &str,
  level: &str,
  duration_minutes: u32,
) -> Vec<RoutineExercise> {
  let available = match catalog::exercises_for(category, level) {
    Some(entries) if !entries.is_empty() => entries,
    _ => {
      tracing::debug!(category, level, "No catalog entry, using placeholder");
      FALLBACK
    }
  };

  let count = exercise_count(duration_minutes).min(available.len());

  available
    .choose_multiple(rng, count)
    .map(normalize)
    .collect()
}

/// Flatten a catalog entry into the uniform routine shape
fn normalize(entry: &ExerciseDescriptor) -> RoutineExercise {
  RoutineExercise {
    exercise: entry.name.to_string(),
    sets: entry
      .sets
      .or(entry.duration)
      .unwrap_or(PLACEHOLDER_SETS)
      .to_string(),
    description: entry
      .description
      .or(entry.intensity)
      .or(entry.style)
      .unwrap_or(PLACEHOLDER_DESCRIPTION)
      .to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::StdRng;
  use rand::SeedableRng;
  use std::collections::HashSet;

  #[test]
  fn test_breakpoints() {
    assert_eq!(exercise_count(0), 3);
    assert_eq!(exercise_count(15), 3);
    assert_eq!(exercise_count(16), 5);
    assert_eq!(exercise_count(30), 5);
    assert_eq!(exercise_count(31), 7);
    assert_eq!(exercise_count(45), 7);
    assert_eq!(exercise_count(46), 8);
    assert_eq!(exercise_count(120), 8);
    assert_eq!(exercise_count(u32::MAX), 8);
  }

  #[test]
  fn test_short_session_samples_without_replacement() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
      let routine = generate_routine_with(&mut rng, "strength", "beginner", 15);
      assert_eq!(routine.len(), 3);

      let names: HashSet<_> = routine.iter().map(|e| e.exercise.as_str()).collect();
      assert_eq!(names.len(), 3, "duplicate exercise in {:?}", routine);
    }
  }

  #[test]
  fn test_long_session_capped_by_catalog_size() {
    let mut rng = StdRng::seed_from_u64(1);
    // 4 strength entries available, 60 min asks for 8
    let routine = generate_routine_with(&mut rng, "strength", "advanced", 60);
    assert_eq!(routine.len(), 4);

    let routine = generate_routine_with(&mut rng, "flexibility", "beginner", 60);
    assert_eq!(routine.len(), 3);
  }

  #[test]
  fn test_unknown_pair_falls_back_to_placeholder() {
    let mut rng = StdRng::seed_from_u64(3);
    let routine = generate_routine_with(&mut rng, "custom", "expert", 60);
    assert_eq!(
      routine,
      vec![RoutineExercise {
        exercise: PLACEHOLDER_NAME.into(),
        sets: PLACEHOLDER_SETS.into(),
        description: PLACEHOLDER_DESCRIPTION.into(),
      }]
    );
  }

  #[test]
  fn test_zero_duration_still_returns_exercises() {
    let routine = generate_routine("cardio", "beginner", 0);
    assert_eq!(routine.len(), 3);
    let routine = generate_routine("nope", "nope", 0);
    assert_eq!(routine.len(), 1);
  }

  #[test]
  fn test_output_shape_is_uniform_across_categories() {
    let mut rng = StdRng::seed_from_u64(11);

    let cardio = generate_routine_with(&mut rng, "cardio", "advanced", 30);
    assert!(cardio.iter().all(|e| e.sets.contains("min")));
    assert!(cardio
      .iter()
      .all(|e| ["Alta", "Muy Alta", "Máxima"].contains(&e.description.as_str())));

    let flex = generate_routine_with(&mut rng, "flexibility", "intermediate", 15);
    let pilates = catalog::exercises_for("flexibility", "intermediate").unwrap()[2];
    assert_eq!(normalize(&pilates).description, "Control");
    assert!(flex.iter().all(|e| !e.sets.is_empty() && !e.description.is_empty()));
  }
}
