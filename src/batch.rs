//! Monte-Carlo averaging over repeated runs.
//!
//! Repeats share nothing but their starting conditions. The mean is kept as
//! a running mean so identical runs average to exactly the same values.

use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};
use tracing::debug;

use crate::config::{SimulationConfig, validate_initial};
use crate::error::{ConfigError, Result};
use crate::policy::Policy;
use crate::run::{Trajectory, run_validated};

/// Elementwise mean of `repeats` runs drawn from one injected stream.
///
/// With `repeats == 1` this is exactly [`crate::simulate_run`] on the same
/// generator state.
pub fn average_runs<R: RngCore + ?Sized>(
    initial_value: f64,
    cfg: &SimulationConfig,
    policy: Policy,
    repeats: usize,
    rng: &mut R,
) -> Result<Trajectory> {
    check(initial_value, cfg, repeats)?;
    let mut mean = MeanAccumulator::new(cfg.horizon_days);
    let mut gave_up = 0usize;
    for _ in 0..repeats {
        let report = run_validated(initial_value, cfg, policy, rng);
        gave_up += usize::from(report.gave_up.is_some());
        mean.push(&report.trajectory);
    }
    debug!(repeats, gave_up, %policy, initial_value, "batch averaged");
    Ok(mean.finish())
}

/// Elementwise mean of `repeats` runs, repeat `i` seeded with `seed + i`.
///
/// Repeat 0 reproduces a single run on `WyRand` seeded by `seed`. With the
/// `parallel` feature the repeats run on rayon; the output is the same.
pub fn average_runs_seeded(
    initial_value: f64,
    cfg: &SimulationConfig,
    policy: Policy,
    repeats: usize,
    seed: u64,
) -> Result<Trajectory> {
    check(initial_value, cfg, repeats)?;
    let trajectories = seeded_trajectories(initial_value, cfg, policy, repeats, seed);
    let mut mean = MeanAccumulator::new(cfg.horizon_days);
    for t in &trajectories {
        mean.push(t);
    }
    debug!(repeats, seed, %policy, initial_value, "seeded batch averaged");
    Ok(mean.finish())
}

/// Generator for one repeat of a seeded batch.
pub fn repeat_rng(seed: u64, repeat: usize) -> WyRand {
    WyRand::from_seed(seed.wrapping_add(repeat as u64).to_le_bytes())
}

fn check(initial_value: f64, cfg: &SimulationConfig, repeats: usize) -> Result<()> {
    if repeats == 0 {
        return Err(ConfigError::ZeroRepeats);
    }
    cfg.validate()?;
    validate_initial(initial_value)
}

#[cfg(not(feature = "parallel"))]
fn seeded_trajectories(
    initial_value: f64,
    cfg: &SimulationConfig,
    policy: Policy,
    repeats: usize,
    seed: u64,
) -> Vec<Trajectory> {
    (0..repeats)
        .map(|i| run_validated(initial_value, cfg, policy, &mut repeat_rng(seed, i)).trajectory)
        .collect()
}

#[cfg(feature = "parallel")]
fn seeded_trajectories(
    initial_value: f64,
    cfg: &SimulationConfig,
    policy: Policy,
    repeats: usize,
    seed: u64,
) -> Vec<Trajectory> {
    use rayon::prelude::*;

    (0..repeats)
        .into_par_iter()
        .map(|i| run_validated(initial_value, cfg, policy, &mut repeat_rng(seed, i)).trajectory)
        .collect()
}

struct MeanAccumulator {
    mean: Vec<f64>,
    count: usize,
}

impl MeanAccumulator {
    fn new(len: usize) -> Self {
        Self { mean: vec![0.0; len], count: 0 }
    }

    fn push(&mut self, values: &[f64]) {
        self.count += 1;
        let n = self.count as f64;
        for (m, &x) in self.mean.iter_mut().zip(values) {
            *m += (x - *m) / n;
        }
    }

    fn finish(self) -> Trajectory {
        self.mean
    }
}
