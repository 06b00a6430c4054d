//! Scheduler configuration.
//!
//! Defaults are the classic SM-2 constants. A host may override any subset of
//! them from a JSON document; missing keys keep their defaults.

use crate::error::{Result, ScheduleError};
use crate::models::sm2::{
    DEFAULT_BATCH_SIZE, DEFAULT_EASINESS, DEFAULT_INTERVAL, DEFAULT_REPETITIONS, MIN_EASINESS,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub default_easiness: f64,
    pub default_repetitions: u32,
    pub default_interval: u32,
    /// Floor applied to every easiness update
    pub min_easiness: f64,
    /// Cap used by the review batch when the caller gives none
    pub batch_size: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            default_easiness: DEFAULT_EASINESS,
            default_repetitions: DEFAULT_REPETITIONS,
            default_interval: DEFAULT_INTERVAL,
            min_easiness: MIN_EASINESS,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl SchedulerConfig {
    /// Parses a (possibly partial) JSON config and validates it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SchedulerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.min_easiness.is_finite() && self.min_easiness > 0.0) {
            return Err(ScheduleError::InvalidConfig(format!(
                "min_easiness must be positive, got {}",
                self.min_easiness
            )));
        }
        if !(self.default_easiness.is_finite() && self.default_easiness >= self.min_easiness) {
            return Err(ScheduleError::InvalidConfig(format!(
                "default_easiness {} is below min_easiness {}",
                self.default_easiness, self.min_easiness
            )));
        }
        if self.default_interval == 0 {
            return Err(ScheduleError::InvalidConfig(
                "default_interval must be at least 1 day".to_string(),
            ));
        }
        Ok(())
    }
}
