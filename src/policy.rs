//! Intervention policies.
//!
//! A policy looks at the subject as of the start of the day and either
//! scales the decay rate or forgives the day outright.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// Faster decay while the subject has no running relapse streak.
    Reward,
    /// Double decay once the subject is struggling.
    Punishment,
    /// Forgive the day after two consecutive relapses.
    Companion,
    /// Base decay, no intervention.
    Static,
    /// Same trigger and boost as `Punishment`.
    Dynamic,
}

/// What a policy does to one day.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Modulation {
    /// Run the stochastic step with this decay rate.
    Decay(f64),
    /// Reset the streak and skip the day entirely.
    Forgive,
}

impl Policy {
    pub const ALL: [Policy; 5] = [
        Policy::Reward,
        Policy::Punishment,
        Policy::Companion,
        Policy::Static,
        Policy::Dynamic,
    ];

    /// Modulation for a day that starts with `relapse_streak` and `strikes_remaining`.
    pub fn modulate(self, base_decay: f64, relapse_streak: u32, strikes_remaining: u32) -> Modulation {
        let struggling = relapse_streak >= 2 || strikes_remaining <= 1;
        match self {
            Policy::Reward if relapse_streak == 0 => Modulation::Decay(base_decay * 1.5),
            Policy::Punishment | Policy::Dynamic if struggling => Modulation::Decay(base_decay * 2.0),
            Policy::Companion if relapse_streak >= 2 => Modulation::Forgive,
            _ => Modulation::Decay(base_decay),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Policy::Reward => "Reward-Based",
            Policy::Punishment => "Punishment-Based",
            Policy::Companion => "Companion-Based",
            Policy::Static => "Static",
            Policy::Dynamic => "Dynamic",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Policy {
    type Err = ConfigError;

    /// Accepts the display label or the bare name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let key = key.strip_suffix("-based").unwrap_or(&key);
        match key {
            "reward" => Ok(Policy::Reward),
            "punishment" => Ok(Policy::Punishment),
            "companion" => Ok(Policy::Companion),
            "static" => Ok(Policy::Static),
            "dynamic" => Ok(Policy::Dynamic),
            _ => Err(ConfigError::UnknownPolicy { name: s.to_string() }),
        }
    }
}
