//! Random population initialization.

use crate::distance::Tour;
use rand::seq::SliceRandom;
use rand::Rng;

/// Creates `population_size` tours over `n` cities, each an independent
/// uniform shuffle of `0..n`.
///
/// Identical tours are not deduplicated.
pub fn initialize<R: Rng>(population_size: usize, n: usize, rng: &mut R) -> Vec<Tour> {
    (0..population_size)
        .map(|_| {
            let mut tour: Tour = (0..n).collect();
            tour.shuffle(rng);
            tour
        })
        .collect()
}
