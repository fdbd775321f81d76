//! Runtime configuration
//!
//! Read from the environment (after loading `.env`), with defaults matching
//! the layout of a fresh checkout: data lives in `data/fitness_data.json`.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::store::BackupPolicy;

pub const APP_TITLE: &str = "Fitness Assistant";
const DEFAULT_DATA_FILE: &str = "data/fitness_data.json";
const DEFAULT_BACKUP_INTERVAL_HOURS: u64 = 24;
const DEFAULT_LOG_FILTER: &str = "fitness_assistant_lib=info";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
  #[error("Invalid value for {key}: {value}")]
  Invalid { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
  pub title: String,
  pub data_file: PathBuf,
  pub backup: BackupPolicy,
  pub log_filter: String,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      title: APP_TITLE.to_string(),
      data_file: PathBuf::from(DEFAULT_DATA_FILE),
      backup: BackupPolicy {
        enabled: true,
        interval: hours(DEFAULT_BACKUP_INTERVAL_HOURS),
      },
      log_filter: DEFAULT_LOG_FILTER.to_string(),
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self, ConfigError> {
    let defaults = Self::default();

    let data_file = env::var("FITNESS_DATA_FILE")
      .map(PathBuf::from)
      .unwrap_or(defaults.data_file);

    let enabled = match env::var("FITNESS_BACKUP_ENABLED") {
      Ok(raw) => parse_bool("FITNESS_BACKUP_ENABLED", &raw)?,
      Err(_) => defaults.backup.enabled,
    };

    let interval = match env::var("FITNESS_BACKUP_INTERVAL_HOURS") {
      Ok(raw) => match raw.trim().parse::<u64>() {
        Ok(h) if h > 0 => hours(h),
        _ => return Err(invalid("FITNESS_BACKUP_INTERVAL_HOURS", &raw)),
      },
      Err(_) => defaults.backup.interval,
    };

    let log_filter = env::var("FITNESS_LOG").unwrap_or(defaults.log_filter);

    Ok(Self {
      title: defaults.title,
      data_file,
      backup: BackupPolicy { enabled, interval },
      log_filter,
    })
  }
}

fn hours(h: u64) -> Duration {
  Duration::from_secs(h * 60 * 60)
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
  match raw.trim().to_ascii_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Ok(true),
    "0" | "false" | "no" | "off" => Ok(false),
    _ => Err(invalid(key, raw)),
  }
}

fn invalid(key: &str, value: &str) -> ConfigError {
  ConfigError::Invalid {
    key: key.to_string(),
    value: value.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  const KEYS: [&str; 4] = [
    "FITNESS_DATA_FILE",
    "FITNESS_BACKUP_ENABLED",
    "FITNESS_BACKUP_INTERVAL_HOURS",
    "FITNESS_LOG",
  ];

  #[test]
  #[serial]
  fn test_defaults_when_unset() {
    temp_env::with_vars_unset(KEYS, || {
      let config = AppConfig::from_env().unwrap();
      assert_eq!(config, AppConfig::default());
      assert_eq!(config.data_file, PathBuf::from("data/fitness_data.json"));
      assert_eq!(config.backup.interval, Duration::from_secs(86_400));
    });
  }

  #[test]
  #[serial]
  fn test_reads_overrides() {
    temp_env::with_vars(
      [
        ("FITNESS_DATA_FILE", Some("/tmp/fit.json")),
        ("FITNESS_BACKUP_ENABLED", Some("off")),
        ("FITNESS_BACKUP_INTERVAL_HOURS", Some("6")),
        ("FITNESS_LOG", Some("debug")),
      ],
      || {
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.data_file, PathBuf::from("/tmp/fit.json"));
        assert!(!config.backup.enabled);
        assert_eq!(config.backup.interval, Duration::from_secs(6 * 3600));
        assert_eq!(config.log_filter, "debug");
      },
    );
  }

  #[test]
  #[serial]
  fn test_rejects_bad_values() {
    temp_env::with_var("FITNESS_BACKUP_INTERVAL_HOURS", Some("0"), || {
      assert_eq!(
        AppConfig::from_env(),
        Err(ConfigError::Invalid {
          key: "FITNESS_BACKUP_INTERVAL_HOURS".into(),
          value: "0".into(),
        })
      );
    });

    temp_env::with_var("FITNESS_BACKUP_ENABLED", Some("maybe"), || {
      assert!(AppConfig::from_env().is_err());
    });
  }
}
