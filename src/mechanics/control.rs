//! Control mechanics: proportional approach toward a target.

use crate::config::{VALUE_MAX, VALUE_MIN};

/// Proportional approach: x' = clamp(x + k * (target - x)).
///
/// With `k` as the decay rate this is one exponential-decay day.
#[inline]
pub fn approach(x: f64, target: f64, k: f64, lo: f64, hi: f64) -> f64 {
    (x + k * (target - x)).clamp(lo, hi)
}

/// Hard floor/ceiling for a subject's value.
#[inline]
pub fn clamp_value(x: f64) -> f64 {
    x.clamp(VALUE_MIN, VALUE_MAX)
}
