// tests/batch.rs
mod common;

use bevy_prng::WyRand;
use common::assert_close;
use rand_core::SeedableRng;
use taste_relapse::{ConfigError, Policy, SimulationConfig, average_runs, average_runs_seeded, repeat_rng, simulate_run};

fn noisy() -> SimulationConfig {
    SimulationConfig { relapse_chance: 0.3, horizon_days: 60, ..SimulationConfig::default() }
}

#[test]
fn single_repeat_equals_single_run() {
    let c = noisy();
    for seed in [0u64, 1, 42, 9_999] {
        let mut a = WyRand::from_seed(seed.to_le_bytes());
        let mut b = WyRand::from_seed(seed.to_le_bytes());
        let avg = average_runs(10.0, &c, Policy::Punishment, 1, &mut a).unwrap();
        let run = simulate_run(10.0, &c, Policy::Punishment, &mut b).unwrap();
        assert_eq!(avg, run, "seed {seed}");
    }
}

#[test]
fn seeded_single_repeat_equals_run_on_that_seed() {
    let c = noisy();
    let avg = average_runs_seeded(7.0, &c, Policy::Companion, 1, 123).unwrap();
    let run = simulate_run(7.0, &c, Policy::Companion, &mut WyRand::from_seed(123u64.to_le_bytes())).unwrap();
    assert_eq!(avg, run);
}

#[test]
fn seeded_mean_matches_hand_averaged_repeats() {
    let c = noisy();
    let n = 4;
    let avg = average_runs_seeded(10.0, &c, Policy::Reward, n, 77).unwrap();

    let runs: Vec<Vec<f64>> = (0..n)
        .map(|i| simulate_run(10.0, &c, Policy::Reward, &mut repeat_rng(77, i)).unwrap())
        .collect();
    let expected: Vec<f64> = (0..c.horizon_days)
        .map(|d| runs.iter().map(|r| r[d]).sum::<f64>() / n as f64)
        .collect();
    assert_close(&avg, &expected, 1e-9);
}

#[test]
fn seeded_batches_are_reproducible() {
    let c = noisy();
    let a = average_runs_seeded(10.0, &c, Policy::Dynamic, 200, 5).unwrap();
    let b = average_runs_seeded(10.0, &c, Policy::Dynamic, 200, 5).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 60);
    assert!(a.iter().all(|v| (0.0..=10.0).contains(v)));
}

#[test]
fn zero_relapse_chance_has_zero_variance() {
    let c = SimulationConfig { relapse_chance: 0.0, base_decay_rate: 0.07, horizon_days: 90, ..SimulationConfig::default() };
    let single = simulate_run(6.3, &c, Policy::Reward, &mut WyRand::from_seed(3u64.to_le_bytes())).unwrap();

    let mut rng = WyRand::from_seed(11u64.to_le_bytes());
    assert_eq!(average_runs(6.3, &c, Policy::Reward, 1_000, &mut rng).unwrap(), single);
    assert_eq!(average_runs_seeded(6.3, &c, Policy::Reward, 1_000, 99).unwrap(), single);
}

#[test]
fn averaging_moves_toward_target_without_relapses_dominating() {
    // mild relapses: mean trajectory should end well below where it started
    let c = SimulationConfig { relapse_chance: 0.05, relapse_impact: 0.5, ..SimulationConfig::default() };
    let avg = average_runs_seeded(7.0, &c, Policy::Static, 500, 2024).unwrap();
    assert!(avg[c.horizon_days - 1] < avg[0]);
}

#[test]
fn zero_repeats_is_rejected() {
    let c = noisy();
    let mut rng = WyRand::from_seed(0u64.to_le_bytes());
    assert_eq!(average_runs(5.0, &c, Policy::Static, 0, &mut rng), Err(ConfigError::ZeroRepeats));
    assert_eq!(average_runs_seeded(5.0, &c, Policy::Static, 0, 0), Err(ConfigError::ZeroRepeats));
}
