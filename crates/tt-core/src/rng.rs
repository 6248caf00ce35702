//! Deterministic per-bus RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each bus gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (ordinal * MIXING_CONSTANT)
//!
//! where `ordinal` is the bus's position in the initial fleet.  The mixing
//! constant is the 64-bit fractional part of the golden ratio, which spreads
//! consecutive ordinals uniformly across the seed space.  This means:
//!
//! - Buses never share RNG state, so the draw order of one bus cannot shift
//!   the values another bus receives.
//! - Appending routes to the catalog does not disturb the speeds of buses on
//!   existing routes, so runs are reproducible as the network grows.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-bus deterministic RNG.
pub struct BusRng(SmallRng);

impl BusRng {
    /// Seed deterministically from the run's global seed and a bus ordinal.
    pub fn new(global_seed: u64, ordinal: u64) -> Self {
        let seed = global_seed ^ ordinal.wrapping_mul(MIXING_CONSTANT);
        BusRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
