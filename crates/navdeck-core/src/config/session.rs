//! Session registry configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Session registry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Absolute session lifetime in hours, counted from issuance.
    #[serde(default = "default_ttl")]
    pub ttl_hours: u64,
    /// Interval between expired-session sweeps in minutes.
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_minutes: u64,
}

impl SessionConfig {
    /// Session lifetime as a chrono duration.
    pub fn ttl(&self) -> Result<chrono::TimeDelta, AppError> {
        i64::try_from(self.ttl_hours)
            .ok()
            .and_then(chrono::TimeDelta::try_hours)
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "session.ttl_hours is out of range: {}",
                    self.ttl_hours
                ))
            })
    }

    /// Sweep interval as a std duration. Zero is raised to one minute.
    pub fn sweep_interval(&self) -> Result<std::time::Duration, AppError> {
        self.sweep_interval_minutes
            .max(1)
            .checked_mul(60)
            .map(std::time::Duration::from_secs)
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "session.sweep_interval_minutes is out of range: {}",
                    self.sweep_interval_minutes
                ))
            })
    }

    /// Checks that both durations are representable.
    pub fn validate(&self) -> Result<(), AppError> {
        self.ttl()?;
        self.sweep_interval()?;
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_hours: default_ttl(),
            sweep_interval_minutes: default_sweep_interval(),
        }
    }
}

fn default_ttl() -> u64 {
    24
}

fn default_sweep_interval() -> u64 {
    60
}
