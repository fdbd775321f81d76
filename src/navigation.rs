//! Page navigation state
//!
//! The front end owns a `NavState` and passes it into each render. A render
//! returns a `Navigation` describing where to go next; nothing is global.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
  #[default]
  Dashboard,
  Routines,
  BmiCalculator,
  CardioLog,
  Resources,
}

impl Page {
  pub const ALL: [Page; 5] = [
    Page::Dashboard,
    Page::Routines,
    Page::BmiCalculator,
    Page::CardioLog,
    Page::Resources,
  ];

  pub fn title(&self) -> &'static str {
    match self {
      Self::Dashboard => "Dashboard",
      Self::Routines => "Rutinas",
      Self::BmiCalculator => "Calculadora IMC",
      Self::CardioLog => "Registro de cardio",
      Self::Resources => "Recursos",
    }
  }
}

impl std::str::FromStr for Page {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "dashboard" => Ok(Self::Dashboard),
      "routines" => Ok(Self::Routines),
      "bmi_calculator" => Ok(Self::BmiCalculator),
      "cardio_log" => Ok(Self::CardioLog),
      "resources" => Ok(Self::Resources),
      _ => Err(format!("Unknown page: {}", s)),
    }
  }
}

/// Outcome of rendering a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
  Stay,
  GoTo(Page),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
  current: Page,
}

impl NavState {
  pub fn current(&self) -> Page {
    self.current
  }

  pub fn apply(&mut self, nav: Navigation) -> Page {
    if let Navigation::GoTo(page) = nav {
      if page != self.current {
        tracing::debug!(from = ?self.current, to = ?page, "Navigate");
      }
      self.current = page;
    }
    self.current
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_starts_on_dashboard_and_stays() {
    let mut nav = NavState::default();
    assert_eq!(nav.current(), Page::Dashboard);
    assert_eq!(nav.apply(Navigation::Stay), Page::Dashboard);
  }

  #[test]
  fn test_goto_transitions() {
    let mut nav = NavState::default();
    assert_eq!(nav.apply(Navigation::GoTo(Page::CardioLog)), Page::CardioLog);
    assert_eq!(nav.apply(Navigation::Stay), Page::CardioLog);
    assert_eq!(nav.apply(Navigation::GoTo(Page::Dashboard)), Page::Dashboard);
  }

  #[test]
  fn test_page_parse_matches_serde_names() {
    for page in Page::ALL {
      let name = serde_json::to_value(page).unwrap();
      let parsed: Page = name.as_str().unwrap().parse().unwrap();
      assert_eq!(parsed, page);
    }
    assert!("settings".parse::<Page>().is_err());
  }
}
