/*!
`taste_relapse` — day-by-day sweetness preference under relapses and interventions.

What it does
- Steps one subject through a fixed horizon of days. Each day an
  intervention [`Policy`] either scales the decay rate or forgives the day,
  then one uniform draw picks a relapse (value jumps up, a strike is spent)
  or a decay step toward the target.
- Freezes a subject that gives up (three relapses in a row, strikes
  exhausted, or still above the threshold after day 10) and back-fills the
  rest of the trajectory with the frozen value.
- Averages many independent runs elementwise.

How to use (call surface only)
- Build a [`SimulationConfig`] (or take `Default`) and a [`ProfileSet`].
- Inject a generator: any `rand_core::RngCore` (e.g. `bevy_prng::WyRand`).
- Call [`simulate_run`], [`average_runs`] / [`average_runs_seeded`], or the
  per-profile helpers [`simulate_profiles`], [`average_profiles`],
  [`compare_policies`].

What it does NOT do
- No charts, UI, files, or statistics beyond a plain mean. Every trajectory
  is exactly `horizon_days` long with values in [0, 10]; rendering is yours.
*/

pub mod batch;
pub mod config;
pub mod error;
pub mod mechanics;
pub mod policy;
pub mod profiles;
pub mod run;
pub mod stepper;

pub use batch::{average_runs, average_runs_seeded, repeat_rng};
pub use config::{GIVEUP_THRESHOLD, MAX_STRIKES, SimulationConfig};
pub use error::{ConfigError, Result};
pub use policy::{Modulation, Policy};
pub use profiles::{ProfileSet, Series, average_profiles, compare_policies, simulate_profiles};
pub use run::{GiveUp, RunReport, Trajectory, simulate_run, simulate_run_report};
pub use stepper::{DayOutcome, GiveUpReason, SubjectState, step_day};
