//! SA execution loop.

use super::config::SaConfig;
use super::types::SaProblem;
use crate::error::ConfigError;
use crate::random::rng_from_seed;
use rand::Rng;

/// Upper bound on the steps reserved up front for `cost_history`.
const HISTORY_RESERVE_LIMIT: usize = 1 << 16;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Cost of the starting solution.
    pub initial_cost: f64,

    /// Total number of steps (neighbor evaluations).
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Best cost before the first step and after every step.
    pub cost_history: Vec<f64>,
}

/// Executes the Simulated Annealing algorithm.
///
/// # Usage
///
/// ```
/// use u_memetic::distance::DistanceModel;
/// use u_memetic::sa::{SaConfig, SaRunner, SwapNeighborhood};
///
/// let model = DistanceModel::from_coordinates(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)])
///     .unwrap();
/// let problem = SwapNeighborhood::new(&model);
/// let result = SaRunner::refine(&problem, vec![0, 2, 1, 3], &SaConfig::default().with_seed(1))
///     .unwrap();
/// assert!(result.best_cost <= result.initial_cost);
/// assert_eq!(result.iterations, 158);
/// ```
pub struct SaRunner;

impl SaRunner {
    /// Runs SA from a problem-supplied random initial solution.
    pub fn run<P: SaProblem>(
        problem: &P,
        config: &SaConfig,
    ) -> Result<SaResult<P::Solution>, ConfigError> {
        config.validate()?;
        let mut rng = rng_from_seed(config.seed);
        let initial = problem.initial_solution(&mut rng);
        Self::refine_with_rng(problem, initial, config, &mut rng)
    }

    /// Runs SA from `initial` with a generator seeded from `config.seed`.
    pub fn refine<P: SaProblem>(
        problem: &P,
        initial: P::Solution,
        config: &SaConfig,
    ) -> Result<SaResult<P::Solution>, ConfigError> {
        let mut rng = rng_from_seed(config.seed);
        Self::refine_with_rng(problem, initial, config, &mut rng)
    }

    /// Runs SA from `initial`, drawing all randomness from `rng`.
    ///
    /// Each step draws one neighbor, then, only for non-improving moves, one
    /// uniform value for the Metropolis test. The returned cost is never
    /// worse than the cost of `initial`.
    #[tracing::instrument(level = "debug", skip_all, fields(steps = tracing::field::Empty))]
    pub fn refine_with_rng<P: SaProblem, R: Rng>(
        problem: &P,
        initial: P::Solution,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult<P::Solution>, ConfigError> {
        config.validate()?;
        let steps = config.step_count();
        tracing::Span::current().record("steps", steps);

        let mut current_cost = problem.cost(&initial);
        let initial_cost = current_cost;
        let mut best = initial.clone();
        let mut best_cost = current_cost;
        let mut current = initial;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cost_history = Vec::with_capacity(steps.min(HISTORY_RESERVE_LIMIT) + 1);
        cost_history.push(best_cost);

        while temperature > config.final_temperature {
            let neighbor = problem.neighbor(&current, rng);
            let neighbor_cost = problem.cost(&neighbor);
            let delta = neighbor_cost - current_cost;

            if delta < 0.0 {
                improving_moves += 1;
            }
            if metropolis_accept(delta, temperature, rng) {
                current = neighbor;
                current_cost = neighbor_cost;
                accepted_moves += 1;
            }

            if current_cost < best_cost {
                best = current.clone();
                best_cost = current_cost;
                tracing::trace!(iteration = iterations + 1, best_cost, "annealing improved");
            }

            iterations += 1;
            cost_history.push(best_cost);
            temperature *= config.cooling_factor;
        }

        tracing::info!(
            initial_cost,
            best_cost,
            iterations,
            accepted_moves,
            "annealing finished"
        );

        Ok(SaResult {
            best,
            best_cost,
            initial_cost,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cost_history,
        })
    }
}

/// Metropolis acceptance criterion.
///
/// Improving moves (`delta < 0`) are always accepted without drawing.
/// Otherwise one uniform value `u` in `[0, 1)` is drawn and the move is
/// accepted iff `u < exp(-delta / temperature)`.
pub fn metropolis_accept<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if delta < 0.0 {
        return true;
    }
    let probability = (-delta / temperature).exp();
    rng.random::<f64>() < probability
}
