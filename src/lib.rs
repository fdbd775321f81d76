pub mod calculators;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod export;
pub mod models;
pub mod navigation;
pub mod routine;
pub mod stats;
pub mod store;

#[cfg(test)]
mod test_utils;

use commands::AppState;
use config::AppConfig;
use store::Store;
use tracing_subscriber::EnvFilter;

/// Load configuration, open the store and print the dashboard summary
pub fn run() -> Result<(), String> {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  let config = AppConfig::from_env().map_err(|e| format!("Invalid configuration: {}", e))?;

  let filter = EnvFilter::try_new(&config.log_filter)
    .map_err(|e| format!("Invalid log filter '{}': {}", config.log_filter, e))?;
  tracing_subscriber::fmt().with_env_filter(filter).init();

  tracing::info!(path = %config.data_file.display(), "Opening fitness data");
  let state = AppState::new(Store::open(&config.data_file, config.backup));

  let summary = commands::dashboard::get_dashboard(&state)?;
  println!("{}", config.title);
  println!("  Workouts:        {}", summary.workouts);
  println!("  Calories burned: {:.0}", summary.total_calories);
  println!("  Avg duration:    {:.0} min", summary.average_duration);
  println!("  This week:       {}", summary.this_week);

  for week in commands::dashboard::get_weekly_totals(&state)? {
    println!("  {}  {:.0} kcal", week.week, week.calories);
  }

  Ok(())
}
