//! Charging procedure configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use voltree_bt::TickBudget;

/// What an alert leaf reports after raising its alert.
///
/// The procedure designers were split on whether alerting resolves the
/// stage (the operator was told, move on) or leaves it unresolved; the
/// choice is configuration per alert, not code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertPolicy {
    /// The alerted condition stays unresolved; the stage fails.
    #[default]
    ReportFailure,
    /// Raising the alert counts as handling the stage.
    ReportHandled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargingConfig {
    /// Tick rate of the driver loop, in Hz. The single authoritative rate:
    /// both the loop period and the `dt` every leaf integrates over derive
    /// from this value.
    pub tick_hz: f32,

    /// Upper bound on ticks per run; guarantees termination even when a
    /// leaf never converges.
    pub max_ticks: u64,

    /// Battery percentage below which charging is warranted.
    pub battery_lower_pct: f32,

    /// Battery percentage at which charging counts as done.
    pub battery_upper_pct: f32,

    /// Speed of the approach drive to the station, m/s.
    pub nav_speed_mps: f32,

    /// Speed of the fine-alignment crawl, m/s.
    pub align_speed_mps: f32,

    /// Policy for the communication-guard alert leaf.
    pub comm_alert: AlertPolicy,

    /// Policy for the charging-fault alert leaf.
    pub fault_alert: AlertPolicy,
}

impl Default for ChargingConfig {
    fn default() -> Self {
        Self {
            tick_hz: 10.0,
            max_ticks: 100,
            battery_lower_pct: 20.0,
            battery_upper_pct: 80.0,
            nav_speed_mps: 2.0,
            align_speed_mps: 0.5,
            comm_alert: AlertPolicy::default(),
            fault_alert: AlertPolicy::default(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("tick_hz must be positive and finite, got {0}")]
    InvalidTickRate(f32),

    #[error("max_ticks must be at least 1")]
    ZeroTickBudget,

    #[error("battery thresholds inverted: lower {lower} must be below upper {upper}")]
    InvertedThresholds { lower: f32, upper: f32 },
}

impl ChargingConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if !self.tick_hz.is_finite() || self.tick_hz <= 0.0 {
            return Err(ConfigError::InvalidTickRate(self.tick_hz));
        }
        if self.max_ticks == 0 {
            return Err(ConfigError::ZeroTickBudget);
        }
        if self.battery_lower_pct >= self.battery_upper_pct {
            return Err(ConfigError::InvertedThresholds {
                lower: self.battery_lower_pct,
                upper: self.battery_upper_pct,
            });
        }
        Ok(())
    }

    /// Tick period derived from `tick_hz`. Only meaningful after
    /// [`ChargingConfig::validate`] has accepted the rate.
    pub fn period(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.tick_hz)
    }

    pub fn budget(&self) -> TickBudget {
        TickBudget {
            max_ticks: self.max_ticks,
            period: self.period(),
        }
    }
}
