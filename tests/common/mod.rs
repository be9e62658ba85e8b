// tests/common/mod.rs
#![allow(dead_code)]

use rand_core::RngCore;

/// Raw draw that maps to uniform01 == 0.0: relapses whenever chance > 0.
pub const RELAPSE: u64 = 0;
/// Raw draw that maps to the largest uniform01 below 1.0: never relapses
/// for chance < 1.
pub const RECOVER: u64 = u64::MAX;

/// Replays a fixed script of raw draws, repeating the last one forever.
/// Counts how many draws were taken.
pub struct ScriptedRng {
    script: Vec<u64>,
    pub draws: usize,
}

impl ScriptedRng {
    pub fn new(script: Vec<u64>) -> Self {
        assert!(!script.is_empty());
        Self { script, draws: 0 }
    }

    /// `true` = relapse day, `false` = recovery day.
    pub fn from_pattern(pattern: &[bool]) -> Self {
        Self::new(pattern.iter().map(|&r| if r { RELAPSE } else { RECOVER }).collect())
    }

    pub fn always(raw: u64) -> Self {
        Self::new(vec![raw])
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let i = self.draws.min(self.script.len() - 1);
        self.draws += 1;
        self.script[i]
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

pub fn assert_close(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(actual.len(), expected.len(), "length mismatch: {actual:?} vs {expected:?}");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() <= tol, "day {i}: got {a}, expected {e} (full: {actual:?})");
    }
}
