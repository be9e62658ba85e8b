//! Named starting points and per-profile drivers.
//!
//! Profiles are fully independent of each other; the helpers here only fan
//! one configuration out over a [`ProfileSet`] and label the results.

use rand_core::RngCore;
use serde::{Deserialize, Serialize};

use crate::batch::average_runs_seeded;
use crate::config::{SimulationConfig, validate_initial};
use crate::error::Result;
use crate::policy::Policy;
use crate::run::{Trajectory, run_validated};

/// Insertion-ordered map from profile label to initial value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileSet {
    entries: Vec<(String, f64)>,
}

impl Default for ProfileSet {
    fn default() -> Self {
        let mut set = Self::new();
        set.insert("High Dependency", 10.0);
        set.insert("Moderate Dependency", 7.0);
        set.insert("Health Conscious", 4.0);
        set
    }
}

impl ProfileSet {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Add a profile, or replace the value of an existing label in place.
    pub fn insert(&mut self, label: impl Into<String>, initial_value: f64) {
        let label = label.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = initial_value,
            None => self.entries.push((label, initial_value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries.iter().find(|(l, _)| l == label).map(|&(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn validate(&self) -> Result<()> {
        self.iter().try_for_each(|(_, v)| validate_initial(v))
    }
}

impl<L: Into<String>> FromIterator<(L, f64)> for ProfileSet {
    fn from_iter<I: IntoIterator<Item = (L, f64)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (label, value) in iter {
            set.insert(label, value);
        }
        set
    }
}

/// A labelled trajectory, one column of an export table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub values: Trajectory,
}

/// One run per profile, in profile order, all drawing from `rng`.
pub fn simulate_profiles<R: RngCore + ?Sized>(
    profiles: &ProfileSet,
    cfg: &SimulationConfig,
    policy: Policy,
    rng: &mut R,
) -> Result<Vec<Series>> {
    cfg.validate()?;
    profiles.validate()?;
    Ok(profiles
        .iter()
        .map(|(label, initial)| Series {
            label: label.to_string(),
            values: run_validated(initial, cfg, policy, rng).trajectory,
        })
        .collect())
}

/// Seeded batch mean per profile. Profile `j` uses `seed` offset by
/// `j * repeats` so no two repeats across profiles share a generator.
pub fn average_profiles(
    profiles: &ProfileSet,
    cfg: &SimulationConfig,
    policy: Policy,
    repeats: usize,
    seed: u64,
) -> Result<Vec<Series>> {
    profiles
        .iter()
        .enumerate()
        .map(|(j, (label, initial))| {
            let profile_seed = seed.wrapping_add((j as u64).wrapping_mul(repeats as u64));
            Ok(Series {
                label: label.to_string(),
                values: average_runs_seeded(initial, cfg, policy, repeats, profile_seed)?,
            })
        })
        .collect()
}

/// Every profile under every policy, labelled `"<profile>_<policy>"`,
/// profile-major.
pub fn compare_policies<R: RngCore + ?Sized>(
    profiles: &ProfileSet,
    cfg: &SimulationConfig,
    policies: &[Policy],
    rng: &mut R,
) -> Result<Vec<Series>> {
    cfg.validate()?;
    profiles.validate()?;
    let mut out = Vec::with_capacity(profiles.len() * policies.len());
    for (label, initial) in profiles.iter() {
        for &policy in policies {
            out.push(Series {
                label: format!("{label}_{policy}"),
                values: run_validated(initial, cfg, policy, rng).trajectory,
            });
        }
    }
    Ok(out)
}
