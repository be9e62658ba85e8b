//! One simulated day for one subject.
//!
//! The policy is consulted first, on the state as of the start of the day.
//! A forgiven day stops there. Otherwise one uniform draw decides between a
//! relapse and a decay step toward the target, the value is clamped, and the
//! give-up conditions are evaluated against the updated state.

use rand_core::RngCore;

use crate::config::{
    GIVEUP_GRACE_DAYS, GIVEUP_THRESHOLD, MAX_RELAPSE_STREAK, MAX_STRIKES, SimulationConfig, VALUE_MAX,
    VALUE_MIN,
};
use crate::mechanics::{control, stoch};
use crate::policy::{Modulation, Policy};

/// Mutable per-run state. Created fresh for every run and every repeat.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubjectState {
    pub current_value: f64,
    pub strikes_remaining: u32,
    /// Consecutive relapse days.
    pub relapse_streak: u32,
    /// 0-based loop index; owned by the run driver.
    pub day_index: usize,
}

impl SubjectState {
    pub fn new(initial_value: f64) -> Self {
        Self {
            current_value: initial_value,
            strikes_remaining: MAX_STRIKES,
            relapse_streak: 0,
            day_index: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GiveUpReason {
    RelapseStreak,
    StrikesExhausted,
    AboveThreshold,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayOutcome {
    /// Companion forgiveness: no draw, no value change, no trajectory entry.
    Forgiven,
    Relapsed,
    Recovered,
    /// Terminal day. The state holds the value the run freezes at.
    GaveUp(GiveUpReason),
}

impl DayOutcome {
    pub fn is_terminal(self) -> bool {
        matches!(self, DayOutcome::GaveUp(_))
    }
}

/// Advance `state` by exactly one day.
pub fn step_day<R: RngCore + ?Sized>(
    state: &mut SubjectState,
    cfg: &SimulationConfig,
    policy: Policy,
    rng: &mut R,
) -> DayOutcome {
    let decay = match policy.modulate(cfg.base_decay_rate, state.relapse_streak, state.strikes_remaining) {
        Modulation::Forgive => {
            state.relapse_streak = 0;
            return DayOutcome::Forgiven;
        }
        Modulation::Decay(rate) => rate,
    };

    let relapsed = stoch::bernoulli(rng, cfg.relapse_chance);
    if relapsed {
        state.current_value = control::clamp_value(state.current_value + cfg.relapse_impact);
        state.strikes_remaining = state.strikes_remaining.saturating_sub(1);
        state.relapse_streak += 1;
    } else {
        state.relapse_streak = 0;
        state.current_value =
            control::approach(state.current_value, cfg.target_value, decay, VALUE_MIN, VALUE_MAX);
    }

    if let Some(reason) = give_up_reason(state) {
        return DayOutcome::GaveUp(reason);
    }
    if relapsed { DayOutcome::Relapsed } else { DayOutcome::Recovered }
}

fn give_up_reason(state: &SubjectState) -> Option<GiveUpReason> {
    if state.relapse_streak >= MAX_RELAPSE_STREAK {
        Some(GiveUpReason::RelapseStreak)
    } else if state.strikes_remaining == 0 {
        Some(GiveUpReason::StrikesExhausted)
    } else if state.day_index > GIVEUP_GRACE_DAYS && state.current_value > GIVEUP_THRESHOLD {
        Some(GiveUpReason::AboveThreshold)
    } else {
        None
    }
}
