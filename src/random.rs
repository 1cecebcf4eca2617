//! Seeded random number generation.
//!
//! All stochastic operators in this crate take an explicit `&mut R: Rng`
//! handle. The runners create one generator per run with [`create_rng`] and
//! thread it through every operator, so a fixed seed reproduces a run
//! draw-for-draw.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// The generator type created by the runners.
pub type Rng64 = StdRng;

/// Creates a deterministic generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> Rng64 {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from fresh entropy when `None`.
pub(crate) fn rng_from_seed(seed: Option<u64>) -> Rng64 {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
