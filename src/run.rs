//! Full-horizon run for one subject.
//!
//! The loop invokes the stepper at most `horizon_days` times. Forgiven days
//! use up an iteration without producing a trajectory entry, so a run that
//! forgave days is back-filled with its final value even if it never gave up.

use rand_core::RngCore;
use tracing::{debug, trace};

use crate::config::{SimulationConfig, validate_initial};
use crate::error::Result;
use crate::policy::Policy;
use crate::stepper::{DayOutcome, GiveUpReason, SubjectState, step_day};

/// One value per day, always exactly `horizon_days` long.
pub type Trajectory = Vec<f64>;

/// Where and why a run gave up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GiveUp {
    /// Loop iteration on which the terminal condition fired.
    pub day_index: usize,
    /// First trajectory slot holding the frozen value.
    pub slot: usize,
    pub reason: GiveUpReason,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    pub trajectory: Trajectory,
    pub gave_up: Option<GiveUp>,
    pub forgiven_days: usize,
}

/// Trajectory of one subject starting at `initial_value`.
pub fn simulate_run<R: RngCore + ?Sized>(
    initial_value: f64,
    cfg: &SimulationConfig,
    policy: Policy,
    rng: &mut R,
) -> Result<Trajectory> {
    simulate_run_report(initial_value, cfg, policy, rng).map(|r| r.trajectory)
}

/// Like [`simulate_run`], also reporting the give-up point and forgiven days.
pub fn simulate_run_report<R: RngCore + ?Sized>(
    initial_value: f64,
    cfg: &SimulationConfig,
    policy: Policy,
    rng: &mut R,
) -> Result<RunReport> {
    cfg.validate()?;
    validate_initial(initial_value)?;
    Ok(run_validated(initial_value, cfg, policy, rng))
}

pub(crate) fn run_validated<R: RngCore + ?Sized>(
    initial_value: f64,
    cfg: &SimulationConfig,
    policy: Policy,
    rng: &mut R,
) -> RunReport {
    let days = cfg.horizon_days;
    let mut state = SubjectState::new(initial_value);
    let mut trajectory = Vec::with_capacity(days);
    let mut gave_up = None;
    let mut forgiven_days = 0;

    for day_index in 0..days {
        state.day_index = day_index;
        match step_day(&mut state, cfg, policy, rng) {
            DayOutcome::Forgiven => {
                forgiven_days += 1;
                trace!(day_index, %policy, "relapse streak forgiven");
            }
            DayOutcome::GaveUp(reason) => {
                debug!(day_index, ?reason, value = state.current_value, "subject gave up");
                gave_up = Some(GiveUp {
                    day_index,
                    slot: trajectory.len(),
                    reason,
                    value: state.current_value,
                });
                break;
            }
            DayOutcome::Relapsed | DayOutcome::Recovered => trajectory.push(state.current_value),
        }
    }

    trajectory.resize(days, state.current_value);
    RunReport { trajectory, gave_up, forgiven_days }
}
