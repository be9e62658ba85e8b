// demos/profiles.rs
// Run with:
//   cargo run --example profiles -- companion 200
//   RUST_LOG=taste_relapse=debug cargo run --example profiles -- dynamic

use bevy_prng::WyRand;
use rand_core::SeedableRng;
use taste_relapse::{Policy, ProfileSet, Series, SimulationConfig, average_profiles, simulate_profiles};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let policy: Policy = args.next().as_deref().unwrap_or("reward").parse()?;
    let repeats: usize = args.next().map(|s| s.parse()).transpose()?.unwrap_or(1);

    let cfg = SimulationConfig::default();
    let profiles = ProfileSet::default();
    let seed: u64 = 2024;

    let series = if repeats > 1 {
        average_profiles(&profiles, &cfg, policy, repeats, seed)?
    } else {
        simulate_profiles(&profiles, &cfg, policy, &mut WyRand::from_seed(seed.to_le_bytes()))?
    };

    println!("== {policy} (repeats: {repeats}, target: {}) ==", cfg.target_value);
    print_table(&series, cfg.horizon_days);
    Ok(())
}

fn print_table(series: &[Series], days: usize) {
    print!("{:>4}", "Day");
    for s in series {
        print!(" {:>20}", s.label);
    }
    println!();
    for day in 0..days {
        print!("{:>4}", day + 1);
        for s in series {
            print!(" {:>20.3}", s.values[day]);
        }
        println!();
    }
}
