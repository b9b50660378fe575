//! Simulation settings, with defaults matching the interactive viewer.
//!
//! Values can come from a TOML file; any field left out keeps its default.
//!
//! ```toml
//! width = 160
//! height = 90
//! step_interval_ms = 80
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{LifeError, Result};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    pub width: i32,
    pub height: i32,
    pub step_interval_ms: u64,
    pub min_step_interval_ms: u64,
    pub max_step_interval_ms: u64,
    /// Amount one faster/slower command moves the interval by.
    pub step_adjust_ms: u64,
    pub history_capacity: usize,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            step_interval_ms: 100,
            min_step_interval_ms: 20,
            max_step_interval_ms: 500,
            step_adjust_ms: 20,
            history_capacity: 64,
        }
    }
}

impl LifeConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LifeConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(LifeError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.min_step_interval_ms > self.max_step_interval_ms {
            return Err(LifeError::Config(format!(
                "min_step_interval_ms ({}) exceeds max_step_interval_ms ({})",
                self.min_step_interval_ms, self.max_step_interval_ms
            )));
        }
        if self.history_capacity == 0 {
            return Err(LifeError::Config("history_capacity must be at least 1".into()));
        }
        Ok(())
    }

    /// Configured interval, clamped into the allowed range.
    pub fn step_interval(&self) -> Duration {
        let (min, max) = self.interval_bounds();
        Duration::from_millis(self.step_interval_ms).clamp(min, max)
    }

    /// `(min, max)` interval bounds; swapped into order if given inverted.
    pub fn interval_bounds(&self) -> (Duration, Duration) {
        let lo = self.min_step_interval_ms.min(self.max_step_interval_ms);
        let hi = self.min_step_interval_ms.max(self.max_step_interval_ms);
        (Duration::from_millis(lo), Duration::from_millis(hi))
    }
}
