//! Error types for invalid simulation input.
//!
//! Every failure is a construction-time problem. Once a run has started it
//! cannot fail, it can only give up, which is a normal outcome.

use thiserror::Error;

/// Rejected configuration, profile, or batch input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("horizon_days must be at least 1")]
    ZeroHorizon,

    #[error("relapse_chance {value} is out of range [0.0, 1.0]")]
    RelapseChanceOutOfRange { value: f64 },

    #[error("parameter '{field}' must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("initial value {value} is out of range [0.0, 10.0]")]
    InitialValueOutOfRange { value: f64 },

    #[error("repeat_count must be at least 1")]
    ZeroRepeats,

    #[error("unknown policy '{name}'")]
    UnknownPolicy { name: String },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ConfigError>;
