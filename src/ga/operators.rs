//! Permutation-preserving crossover and mutation.
//!
//! All operators work on `&[usize]` index vectors and keep every tour a
//! permutation of `0..n`.
//!
//! # Crossover
//!
//! - [`prefix_crossover`]: one-point crossover that keeps a prefix of one
//!   parent and fills the rest in the other parent's order
//! - [`crossover_pairs`]: applies it to consecutive parent pairs at a given rate
//!
//! # Mutation
//!
//! - [`swap_mutation`]: exchange two random positions (may coincide), O(1)
//! - [`mutate_children`]: applies it to each child at a given rate

use crate::distance::Tour;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Builds one child from the first `cut` genes of `template`, followed by
/// the genes of `donor` in donor order, skipping genes already in the prefix.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or `cut > n`.
pub fn prefix_crossover(template: &[usize], donor: &[usize], cut: usize) -> Tour {
    let n = template.len();
    assert_eq!(n, donor.len(), "parents must have equal length");
    assert!(cut <= n, "cut point {cut} exceeds tour length {n}");

    let mut in_prefix = vec![false; n];
    let mut child = Vec::with_capacity(n);
    for &gene in &template[..cut] {
        in_prefix[gene] = true;
        child.push(gene);
    }
    child.extend(donor.iter().copied().filter(|&gene| !in_prefix[gene]));
    child
}

/// Recombines consecutive parent pairs `(0, 1), (2, 3), …` into children.
///
/// For each pair one uniform value `r` in `[0, 1)` is drawn. If
/// `r < crossover_rate`, a cut point `k` is drawn uniformly from `[1, n-1]`
/// and the pair yields `prefix_crossover(p1, p2, k)` and
/// `prefix_crossover(p2, p1, k)`. Otherwise both parents pass through
/// unchanged. Single-city tours skip the cut-point draw.
///
/// The output preserves pairing order and has the same length as `parents`.
///
/// # Panics
/// Panics if `parents.len()` is odd.
pub fn crossover_pairs<R: Rng>(parents: Vec<Tour>, crossover_rate: f64, rng: &mut R) -> Vec<Tour> {
    assert!(
        parents.len() % 2 == 0,
        "crossover needs an even number of parents, got {}",
        parents.len()
    );

    let mut children = Vec::with_capacity(parents.len());
    let mut parents = parents.into_iter();
    while let (Some(p1), Some(p2)) = (parents.next(), parents.next()) {
        let r: f64 = rng.random();
        let n = p1.len();
        if r < crossover_rate && n >= 2 {
            let cut = rng.random_range(1..n);
            children.push(prefix_crossover(&p1, &p2, cut));
            children.push(prefix_crossover(&p2, &p1, cut));
        } else {
            children.push(p1);
            children.push(p2);
        }
    }
    children
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: exchange the genes at two positions drawn independently
/// from `0..n`.
///
/// The positions may coincide, in which case the swap is a no-op.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n == 0 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    perm.swap(i, j);
}

/// Applies [`swap_mutation`] to each child with probability `mutation_rate`.
///
/// One uniform value is drawn per child; the swap positions are drawn only
/// for children that mutate.
pub fn mutate_children<R: Rng>(children: &mut [Tour], mutation_rate: f64, rng: &mut R) {
    for child in children.iter_mut() {
        let r: f64 = rng.random();
        if r < mutation_rate {
            swap_mutation(child, rng);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn is_permutation(perm: &[usize], n: usize) -> bool {
        let mut seen = vec![false; n];
        perm.len() == n && perm.iter().all(|&g| g < n && !std::mem::replace(&mut seen[g], true))
    }

    fn parent_pair() -> impl Strategy<Value = (Tour, Tour)> {
        (1usize..40).prop_flat_map(|n| {
            let identity: Tour = (0..n).collect();
            (
                Just(identity.clone()).prop_shuffle(),
                Just(identity).prop_shuffle(),
            )
        })
    }

    proptest! {
        #[test]
        fn prop_prefix_crossover_is_permutation((p1, p2) in parent_pair(), cut in 0usize..40) {
            let n = p1.len();
            let cut = cut % (n + 1);
            let child = prefix_crossover(&p1, &p2, cut);
            prop_assert!(is_permutation(&child, n));
            prop_assert_eq!(&child[..cut], &p1[..cut]);
        }

        #[test]
        fn prop_crossover_pairs_are_permutations(
            (p1, p2) in parent_pair(),
            rate in 0.0f64..=1.0,
            seed in 0u64..10000,
        ) {
            let n = p1.len();
            let mut rng = create_rng(seed);
            let children = crossover_pairs(vec![p1, p2], rate, &mut rng);
            prop_assert_eq!(children.len(), 2);
            for child in &children {
                prop_assert!(is_permutation(child, n));
            }
        }

        #[test]
        fn prop_mutation_is_permutation((tour, _) in parent_pair(), seed in 0u64..10000) {
            let n = tour.len();
            let mut rng = create_rng(seed);
            let mut children = vec![tour];
            mutate_children(&mut children, 1.0, &mut rng);
            prop_assert!(is_permutation(&children[0], n));
        }
    }
}
