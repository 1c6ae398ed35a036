//! Dashboard configuration
//!
//! Settings come from built-in defaults, then an optional JSON file, then
//! command line flags.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::config::{CONFIG_FILE, DEFAULT_DATA_FILE, DEFAULT_WINDOW_TITLE};
use crate::constants::server::DEFAULT_BIND_ADDR;
use crate::constants::slider::{DEFAULT_INITIAL_INSET, DEFAULT_STEP};
use crate::error::{DashError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Launch dataset file (CSV or Parquet)
    pub data_path: PathBuf,
    /// Listen address of the web page
    pub bind_addr: String,
    /// Payload slider step in kilograms
    pub slider_step: f64,
    /// Initial payload range is shrunk by this much at both ends
    pub initial_range_inset: f64,
    pub dark_mode: bool,
    pub window_title: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            slider_step: DEFAULT_STEP,
            initial_range_inset: DEFAULT_INITIAL_INSET,
            dark_mode: true,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration
    ///
    /// An explicitly passed file must exist. Without one, `spacex_dash.json`
    /// in the working directory is used when present, defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)?
                } else {
                    tracing::debug!("no {} found, using defaults", CONFIG_FILE);
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            DashError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&contents)?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Reject settings the widgets cannot work with
    pub fn validate(&self) -> Result<()> {
        if !self.slider_step.is_finite() || self.slider_step <= 0.0 {
            return Err(DashError::Config(format!(
                "slider_step must be a positive number, got {}",
                self.slider_step
            )));
        }
        if !self.initial_range_inset.is_finite() || self.initial_range_inset < 0.0 {
            return Err(DashError::Config(format!(
                "initial_range_inset must be zero or positive, got {}",
                self.initial_range_inset
            )));
        }
        if self.bind_addr.trim().is_empty() {
            return Err(DashError::Config("bind_addr must not be empty".to_string()));
        }
        Ok(())
    }

    /// Apply command line overrides
    pub fn with_overrides(mut self, data_path: Option<PathBuf>, bind_addr: Option<String>) -> Self {
        if let Some(path) = data_path {
            self.data_path = path;
        }
        if let Some(addr) = bind_addr {
            self.bind_addr = addr;
        }
        self
    }
}
