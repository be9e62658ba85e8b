//! Stochastic mechanics: uniform draws over any `RngCore`.
//! Callers inject the generator so runs can be seeded or scripted.

use rand_core::RngCore;

/// Uniform r in [0, 1) from the top 53 bits of one `next_u64`.
#[inline]
pub fn uniform01<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    ((rng.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Bernoulli(p): one draw, true when it falls below `p`.
#[inline]
pub fn bernoulli<R: RngCore + ?Sized>(rng: &mut R, p: f64) -> bool {
    uniform01(rng) < p
}
