//! File-backed persistent store
//!
//! Owns the single JSON document on disk. Every mutation rewrites the whole
//! file before returning. A missing, unreadable or non-JSON file loads as
//! the empty document (off-schema records are coerced or dropped one by
//! one, see `models::lenient`); a failed write leaves the in-memory change in place and hands
//! the error back as a warning.

use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use crate::models::{Document, ProgressRecord, UserProfile, WorkoutRecord};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
  #[error("Failed to write {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("Failed to serialize document: {0}")]
  Serialize(#[from] serde_json::Error),
}

/// Copy-before-write backup of the data file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackupPolicy {
  pub enabled: bool,
  pub interval: Duration,
}

impl Default for BackupPolicy {
  fn default() -> Self {
    Self {
      enabled: true,
      interval: Duration::from_secs(24 * 60 * 60),
    }
  }
}

impl BackupPolicy {
  pub fn disabled() -> Self {
    Self {
      enabled: false,
      ..Self::default()
    }
  }
}

pub struct Store {
  path: PathBuf,
  backup: BackupPolicy,
  data: Document,
}

impl Store {
  /// Create a store for `path` and load whatever is there
  pub fn open(path: impl Into<PathBuf>, backup: BackupPolicy) -> Self {
    let mut store = Self {
      path: path.into(),
      backup,
      data: Document::default(),
    };
    store.load();
    store
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Path of the backup copy kept next to the data file
  pub fn backup_path(&self) -> PathBuf {
    let mut name = self.path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
  }

  fn tmp_path(&self) -> PathBuf {
    let mut name = self.path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
  }

  /// (Re)read the document from disk, falling back to an empty one
  pub fn load(&mut self) {
    self.data = match fs::read(&self.path) {
      Ok(bytes) => match serde_json::from_slice::<Document>(&bytes) {
        Ok(doc) => {
          tracing::debug!(
            path = %self.path.display(),
            workouts = doc.workouts.len(),
            progress = doc.progress.len(),
            "Loaded fitness data"
          );
          doc
        }
        Err(e) => {
          tracing::warn!(path = %self.path.display(), "Corrupt data file, starting empty: {}", e);
          Document::default()
        }
      },
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        tracing::debug!(path = %self.path.display(), "No data file yet");
        Document::default()
      }
      Err(e) => {
        tracing::warn!(path = %self.path.display(), "Unreadable data file, starting empty: {}", e);
        Document::default()
      }
    };
  }

  /// Write the whole document to disk (tmp file + rename)
  pub fn save(&self) -> Result<(), StoreError> {
    let result = self.write_document();
    match &result {
      Ok(()) => tracing::debug!(path = %self.path.display(), "Saved fitness data"),
      Err(e) => tracing::warn!("Error saving data: {}", e),
    }
    result
  }

  fn write_document(&self) -> Result<(), StoreError> {
    let io_err = |source: io::Error| StoreError::Io {
      path: self.path.clone(),
      source,
    };

    if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
      fs::create_dir_all(parent).map_err(io_err)?;
    }

    self.backup_if_due();

    let bytes = serde_json::to_vec_pretty(&self.data)?;
    let tmp_path = self.tmp_path();

    fs::write(&tmp_path, bytes).map_err(io_err)?;
    let result = self.replace_with(&tmp_path).map_err(io_err);
    if result.is_err() {
      let _ = fs::remove_file(&tmp_path);
    }
    result
  }

  fn replace_with(&self, tmp_path: &Path) -> io::Result<()> {
    match fs::rename(tmp_path, &self.path) {
      Ok(()) => Ok(()),
      Err(rename_err) => {
        // Some platforms refuse to rename over an existing file
        if self.path.exists() {
          fs::remove_file(&self.path)?;
          fs::rename(tmp_path, &self.path)
        } else {
          Err(rename_err)
        }
      }
    }
  }

  /// Copy the current file aside when the last backup is older than the interval
  fn backup_if_due(&self) {
    if !self.backup.enabled || !self.path.exists() {
      return;
    }

    let backup_path = self.backup_path();
    let due = match fs::metadata(&backup_path).and_then(|m| m.modified()) {
      Ok(modified) => SystemTime::now()
        .duration_since(modified)
        .map(|age| age >= self.backup.interval)
        .unwrap_or(false),
      Err(_) => true,
    };

    if due {
      match fs::copy(&self.path, &backup_path) {
        Ok(_) => tracing::info!(backup = %backup_path.display(), "Backed up fitness data"),
        Err(e) => tracing::warn!(backup = %backup_path.display(), "Backup failed: {}", e),
      }
    }
  }

  // CRUD

  pub fn append_workout(&mut self, record: WorkoutRecord) -> Result<(), StoreError> {
    self.data.workouts.push(record);
    self.save()
  }

  pub fn append_progress(&mut self, record: ProgressRecord) -> Result<(), StoreError> {
    self.data.progress.push(record);
    self.save()
  }

  /// Remove the workout at `index`. Out-of-range indices are ignored and
  /// return `Ok(false)` without touching the file.
  pub fn delete_workout(&mut self, index: usize) -> Result<bool, StoreError> {
    if index >= self.data.workouts.len() {
      return Ok(false);
    }
    self.data.workouts.remove(index);
    self.save().map(|()| true)
  }

  pub fn set_profile_field(&mut self, key: impl Into<String>, value: Value) -> Result<(), StoreError> {
    self.data.user_profile.insert(key.into(), value);
    self.save()
  }

  // Getters

  pub fn get_workouts(&self) -> &[WorkoutRecord] {
    &self.data.workouts
  }

  pub fn get_progress(&self) -> &[ProgressRecord] {
    &self.data.progress
  }

  pub fn profile(&self) -> &UserProfile {
    &self.data.user_profile
  }

  pub fn document(&self) -> &Document {
    &self.data
  }
}
