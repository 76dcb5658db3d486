//! Session configuration loaded from TOML

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::algorithms::optimizer::DEFAULT_MAX_SELECTED;
use crate::error::{Error, Result};
use crate::models::FilterCriteria;

const DEFAULT_SOLVER_TIME_BUDGET_MS: u64 = 5_000;

/// Tunables for one analyst session
///
/// ```toml
/// max_selected = 2
/// solver_time_budget_ms = 5000
///
/// [default_criteria]
/// min_savings = 0.0
/// max_distance = 1000.0
/// max_duration = 1000.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Upper bound on the number of trips selected per scenario
    pub max_selected: usize,

    /// Wall-clock budget for a single solve
    pub solver_time_budget_ms: u64,

    /// Thresholds used when the caller supplies none
    pub default_criteria: FilterCriteria,
}

impl SessionConfig {
    /// Reads and validates a TOML configuration file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
            .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))
    }

    /// Parses and validates a TOML configuration string
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: SessionConfig =
            toml::from_str(contents).map_err(|e| Error::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_selected == 0 {
            return Err(Error::config("max_selected must be at least 1"));
        }
        if self.solver_time_budget_ms == 0 {
            return Err(Error::config("solver_time_budget_ms must be greater than zero"));
        }
        self.default_criteria
            .validate()
            .map_err(|e| Error::config(format!("default_criteria: {}", e)))
    }

    pub fn solver_time_budget(&self) -> Duration {
        Duration::from_millis(self.solver_time_budget_ms)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_selected: DEFAULT_MAX_SELECTED,
            solver_time_budget_ms: DEFAULT_SOLVER_TIME_BUDGET_MS,
            default_criteria: FilterCriteria::default(),
        }
    }
}
