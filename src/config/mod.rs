//! Engine tuning and configuration loading.
//!
//! [`EngineConfig`] holds the search ceilings of the schedule engine. It can
//! be built in code, or read from a TOML file with an `[engine]` table:
//!
//! ```toml
//! [engine]
//! max_retries = 1000
//! max_backtracks = 1000
//! max_total_backtracks = 2000
//! max_restarts = 100
//! ```
//!
//! Missing keys fall back to the defaults.

#[cfg(feature = "cli")]
pub mod cli;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::scheduler::DEFAULT_MAX_RETRIES;
use crate::utils::error::{GroupingError, Result};

/// Default backtrack ceiling per generation attempt.
pub const DEFAULT_MAX_BACKTRACKS: usize = 1_000;
/// Default backtrack ceiling across all attempts of one run.
pub const DEFAULT_MAX_TOTAL_BACKTRACKS: usize = 2_000;
/// Default number of full restarts before giving up.
pub const DEFAULT_MAX_RESTARTS: usize = 100;

/// Search ceilings for [`ScheduleEngine`](crate::scheduler::ScheduleEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Random draws allowed per group before the course attempt fails.
    pub max_retries: usize,
    /// Course backtracks allowed within one attempt before it is restarted.
    pub max_backtracks: usize,
    /// Course backtracks allowed across the whole run before reporting
    /// non-convergence.
    pub max_total_backtracks: usize,
    /// Full restarts allowed before reporting non-convergence.
    pub max_restarts: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            max_backtracks: DEFAULT_MAX_BACKTRACKS,
            max_total_backtracks: DEFAULT_MAX_TOTAL_BACKTRACKS,
            max_restarts: DEFAULT_MAX_RESTARTS,
        }
    }
}

impl EngineConfig {
    /// Sets the per-group draw budget.
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the per-attempt backtrack ceiling.
    pub fn with_max_backtracks(mut self, max_backtracks: usize) -> Self {
        self.max_backtracks = max_backtracks;
        self
    }

    /// Sets the run-wide backtrack ceiling.
    pub fn with_max_total_backtracks(mut self, max_total_backtracks: usize) -> Self {
        self.max_total_backtracks = max_total_backtracks;
        self
    }

    /// Sets the restart ceiling.
    pub fn with_max_restarts(mut self, max_restarts: usize) -> Self {
        self.max_restarts = max_restarts;
        self
    }
}

/// Top-level layout of a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub engine: EngineConfig,
}

impl FileConfig {
    /// Parses a configuration document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| GroupingError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }
}
