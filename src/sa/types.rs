//! Core trait for Simulated Annealing and the TSP swap neighborhood.

use crate::distance::{DistanceModel, Tour};
use rand::seq::SliceRandom;
use rand::Rng;

/// Defines a Simulated Annealing problem.
///
/// The user implements neighbor generation and cost evaluation.
/// The SA framework handles temperature management, acceptance
/// criterion, and cooling.
///
/// # Minimization
///
/// SA minimizes the cost function. For maximization, negate the cost.
///
/// # References
///
/// Kirkpatrick et al. (1983), Cerny (1985)
pub trait SaProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send;

    /// Creates a random initial solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates a neighbor of the current solution.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}

/// The swap neighborhood over tours of a [`DistanceModel`].
///
/// A neighbor exchanges the cities at two **distinct** positions, so every
/// neighbor of a tour with at least two cities differs from it. Tours with
/// fewer than two cities are their own only neighbor and draw nothing.
///
/// # Examples
///
/// ```
/// use u_memetic::distance::DistanceModel;
/// use u_memetic::random::create_rng;
/// use u_memetic::sa::{SaProblem, SwapNeighborhood};
///
/// let model = DistanceModel::from_coordinates(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]).unwrap();
/// let problem = SwapNeighborhood::new(&model);
/// let mut rng = create_rng(42);
///
/// let tour = vec![0, 1, 2];
/// let next = problem.neighbor(&tour, &mut rng);
/// assert_ne!(next, tour);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SwapNeighborhood<'a> {
    model: &'a DistanceModel,
}

impl<'a> SwapNeighborhood<'a> {
    /// Swap neighborhood over the tours of `model`.
    pub fn new(model: &'a DistanceModel) -> Self {
        Self { model }
    }

    /// The distance model tours are scored against.
    pub fn model(&self) -> &'a DistanceModel {
        self.model
    }
}

impl SaProblem for SwapNeighborhood<'_> {
    type Solution = Tour;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Tour {
        let mut tour: Tour = (0..self.model.size()).collect();
        tour.shuffle(rng);
        tour
    }

    fn cost(&self, tour: &Tour) -> f64 {
        self.model.tour_length(tour)
    }

    fn neighbor<R: Rng>(&self, tour: &Tour, rng: &mut R) -> Tour {
        let mut next = tour.clone();
        let n = next.len();
        if n < 2 {
            return next;
        }
        let i = rng.random_range(0..n);
        let mut j = rng.random_range(0..n - 1);
        if j >= i {
            j += 1;
        }
        next.swap(i, j);
        next
    }
}
