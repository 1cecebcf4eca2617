//! Tournament selection.
//!
//! Binary tournament with replacement: each parent slot draws two candidate
//! indices independently (they may coincide) and keeps the one with lower
//! fitness.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use crate::distance::Tour;
use rand::Rng;

/// Picks the winner of one binary tournament and returns its index.
///
/// The first candidate wins only if its fitness is **strictly** lower; on
/// equal fitness the second candidate wins. Draw order is: first index,
/// then second index.
///
/// # Panics
/// Panics if `fitness` is empty.
pub fn tournament<R: Rng>(fitness: &[f64], rng: &mut R) -> usize {
    assert!(!fitness.is_empty(), "cannot select from empty population");

    let n = fitness.len();
    let first = rng.random_range(0..n);
    let second = rng.random_range(0..n);
    if fitness[first] < fitness[second] {
        first
    } else {
        second
    }
}

/// Selects `population.len()` parents by repeated binary tournament.
///
/// Parents are independent copies, so a tour selected for several slots
/// never shares storage with another slot. The output is consumed pairwise
/// by crossover: slots 0 & 1, 2 & 3, …
///
/// # Panics
/// Panics if `population` and `fitness` have different lengths.
pub fn select_parents<R: Rng>(population: &[Tour], fitness: &[f64], rng: &mut R) -> Vec<Tour> {
    assert_eq!(
        population.len(),
        fitness.len(),
        "fitness table must be index-aligned with the population"
    );

    (0..population.len())
        .map(|_| population[tournament(fitness, rng)].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_tournament_favors_best() {
        let fitness = [10.0, 5.0, 1.0, 8.0];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[tournament(&fitness, &mut rng)] += 1;
        }
        // Best wins unless both draws miss it: P = 1 - (3/4)^2 = 0.4375
        assert!(
            counts[2] > 4000,
            "expected best to win ~44% of tournaments, got {}/{n}",
            counts[2]
        );
        // Worst wins only when drawn twice: P = 1/16
        assert!(
            counts[0] < 900,
            "expected worst to win ~6% of tournaments, got {}/{n}",
            counts[0]
        );
    }

    #[test]
    fn test_tie_goes_to_second_candidate() {
        let fitness = [3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0];
        let mut rng = create_rng(11);
        let mut mirror = create_rng(11);

        for _ in 0..200 {
            let winner = tournament(&fitness, &mut rng);
            let _first = mirror.random_range(0..fitness.len());
            let second = mirror.random_range(0..fitness.len());
            assert_eq!(winner, second, "ties must resolve to the second draw");
        }
    }

    #[test]
    fn test_strictly_lower_first_wins() {
        let fitness = [1.0, 2.0];
        let mut rng = create_rng(5);
        let mut mirror = create_rng(5);

        for _ in 0..200 {
            let winner = tournament(&fitness, &mut rng);
            let first = mirror.random_range(0..2);
            let second = mirror.random_range(0..2);
            let expected = if fitness[first] < fitness[second] {
                first
            } else {
                second
            };
            assert_eq!(winner, expected);
        }
    }

    #[test]
    fn test_single_individual() {
        let mut rng = create_rng(42);
        assert_eq!(tournament(&[5.0], &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_fitness_panics() {
        let mut rng = create_rng(42);
        tournament(&[], &mut rng);
    }

    #[test]
    fn test_parents_come_from_population() {
        let population: Vec<Tour> = vec![
            vec![0, 1, 2, 3],
            vec![3, 2, 1, 0],
            vec![1, 0, 3, 2],
            vec![2, 3, 0, 1],
        ];
        let fitness = [4.0, 3.0, 2.0, 1.0];
        let mut rng = create_rng(3);

        for _ in 0..50 {
            let parents = select_parents(&population, &fitness, &mut rng);
            assert_eq!(parents.len(), population.len());
            for p in &parents {
                assert!(population.contains(p), "parent {p:?} not in population");
            }
        }
    }

    #[test]
    fn test_parents_are_independent_copies() {
        let population: Vec<Tour> = vec![vec![0, 1, 2], vec![2, 1, 0]];
        let fitness = [1.0, 1.0];
        let mut rng = create_rng(8);
        let mut parents = select_parents(&population, &fitness, &mut rng);

        parents[0].swap(0, 2);
        assert_eq!(population[0], vec![0, 1, 2]);
        assert_eq!(population[1], vec![2, 1, 0]);
    }
}
