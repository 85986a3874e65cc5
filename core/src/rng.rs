//! Deterministic random number generation.
//!
//! RULE: Nothing in the simulation may call any platform RNG.
//! All randomness flows through SimRng instances derived from a single
//! master seed, one stream per stable slot. Adding a slot never changes
//! the streams of existing slots.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

pub struct SimRng {
    inner: Pcg64Mcg,
}

impl SimRng {
    pub fn new(master_seed: u64, slot: RngSlot) -> Self {
        let derived_seed = master_seed ^ (slot as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15);
        Self { inner: Pcg64Mcg::seed_from_u64(derived_seed) }
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Roll a u64 in [0, n).
    pub fn below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Roll a u64 in [lo, hi].
    pub fn between(&mut self, lo: u64, hi: u64) -> u64 {
        assert!(lo <= hi, "empty range {lo}..={hi}");
        lo + self.below(hi - lo + 1)
    }

    /// Roll an i64 in [-radius, radius].
    pub fn offset(&mut self, radius: u64) -> i64 {
        self.below(2 * radius + 1) as i64 - radius as i64
    }

    /// Pick one element of a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len() as u64) as usize]
    }
}

/// Stable stream assignments.
/// NEVER reorder or remove entries — only append.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum RngSlot {
    Placement = 0,
    Movement  = 1,
}
