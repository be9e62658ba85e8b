//! Simulation parameters and fixed model constants.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Strikes a subject starts with; each relapse consumes one.
pub const MAX_STRIKES: u32 = 5;

/// A value above this after the grace period makes the subject give up.
pub const GIVEUP_THRESHOLD: f64 = 8.0;

/// The threshold check only applies once `day_index > GIVEUP_GRACE_DAYS`.
pub const GIVEUP_GRACE_DAYS: usize = 10;

/// Consecutive relapse days that end a run.
pub const MAX_RELAPSE_STREAK: u32 = 3;

pub const VALUE_MIN: f64 = 0.0;
pub const VALUE_MAX: f64 = 10.0;

/// Immutable parameters shared by every run of one invocation.
///
/// Missing fields deserialize to the [`Default`] values, so a partial
/// JSON/TOML document is enough to override a single knob.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Daily probability of a relapse, in [0, 1].
    pub relapse_chance: f64,
    /// Amount added to the value on a relapse day.
    pub relapse_impact: f64,
    /// Fraction of the distance to target removed on a recovery day.
    pub base_decay_rate: f64,
    /// Value the subject decays toward.
    pub target_value: f64,
    /// Length of every trajectory.
    pub horizon_days: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            relapse_chance: 0.1,
            relapse_impact: 1.5,
            base_decay_rate: 0.05,
            target_value: 2.0,
            horizon_days: 60,
        }
    }
}

impl SimulationConfig {
    /// Reject configurations no run could honor.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("relapse_chance", self.relapse_chance),
            ("relapse_impact", self.relapse_impact),
            ("base_decay_rate", self.base_decay_rate),
            ("target_value", self.target_value),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        if self.horizon_days == 0 {
            return Err(ConfigError::ZeroHorizon);
        }
        if !(0.0..=1.0).contains(&self.relapse_chance) {
            return Err(ConfigError::RelapseChanceOutOfRange {
                value: self.relapse_chance,
            });
        }
        Ok(())
    }
}

/// Initial values must be finite and inside the value band.
pub fn validate_initial(value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { field: "initial_value", value });
    }
    if !(VALUE_MIN..=VALUE_MAX).contains(&value) {
        return Err(ConfigError::InitialValueOutOfRange { value });
    }
    Ok(())
}
