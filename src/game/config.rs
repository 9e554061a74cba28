//! Tunable game constants, overridable from partial JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decimal::Decimal;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Time points a fresh game starts with.
    pub starting_points: Decimal,
    /// Main points restored by any reset except the condenser's own.
    pub reset_points: Decimal,

    pub wind_max: Decimal,
    pub wind_cooldown_ms: u64,
    pub decay_ms: u64,
    /// Decay period once main upgrade 2 is bought.
    pub slow_decay_ms: u64,

    pub condense_max: Decimal,
    pub condense_cooldown_ms: u64,
    /// Main points required to condense, and debited on every payout.
    pub condense_cost: Decimal,

    pub main_upgrade_costs: [Decimal; 5],
    pub condenser_upgrade_costs: [Decimal; 5],
    /// Main points at which main upgrade 5 shows up.
    pub space_unlock_reveal: Decimal,

    /// Scales every update's elapsed time; 0 pauses.
    pub dev_speed: f64,

    pub ticks_per_sec: u32,
    pub max_frame_ms: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        let d = Decimal::from_f64;
        Self {
            starting_points: Decimal::ZERO,
            reset_points: d(10.0),
            wind_max: d(10.0),
            wind_cooldown_ms: 10,
            decay_ms: 500,
            slow_decay_ms: 1000,
            condense_max: d(10.0),
            condense_cooldown_ms: 10,
            condense_cost: d(1000.0),
            main_upgrade_costs: [d(25.0), d(150.0), d(300.0), d(650.0), d(1e6)],
            condenser_upgrade_costs: [d(1.0), d(3.0), d(10.0), d(75.0), d(500.0)],
            space_unlock_reveal: d(7.5e5),
            dev_speed: 1.0,
            ticks_per_sec: 20,
            max_frame_ms: 1000.0,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.wind_max.is_positive() {
            return Err(ConfigError::Invalid {
                field: "wind_max",
                reason: "must be positive",
            });
        }
        if !self.condense_max.is_positive() {
            return Err(ConfigError::Invalid {
                field: "condense_max",
                reason: "must be positive",
            });
        }
        if self.decay_ms == 0 || self.slow_decay_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "decay_ms",
                reason: "decay periods must be non-zero",
            });
        }
        if !self.dev_speed.is_finite() || self.dev_speed < 0.0 {
            return Err(ConfigError::Invalid {
                field: "dev_speed",
                reason: "must be a finite non-negative number",
            });
        }
        if self.ticks_per_sec == 0 {
            return Err(ConfigError::Invalid {
                field: "ticks_per_sec",
                reason: "must be non-zero",
            });
        }
        Ok(())
    }
}
