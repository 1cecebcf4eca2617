//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation →
//! replacement → global-best update → repeat.

use super::config::GaConfig;
use super::operators::{crossover_pairs, mutate_children};
use super::population::initialize;
use super::selection::select_parents;
use crate::distance::{DistanceModel, Tour};
use crate::error::ConfigError;
use crate::random::rng_from_seed;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The lowest-cost tour observed so far.
///
/// Cost is monotonically non-increasing: [`offer`](GlobalBest::offer) only
/// replaces the record on strict improvement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlobalBest {
    tour: Option<Tour>,
    cost: f64,
}

impl GlobalBest {
    /// An empty record with cost `+∞`.
    pub fn new() -> Self {
        Self {
            tour: None,
            cost: f64::INFINITY,
        }
    }

    /// The best tour, if any has been offered.
    pub fn tour(&self) -> Option<&Tour> {
        self.tour.as_ref()
    }

    /// Cost of the best tour (`+∞` when empty).
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Records `tour` if `cost` is strictly lower than the current best.
    ///
    /// Returns `true` if the record changed.
    pub fn offer(&mut self, tour: &[usize], cost: f64) -> bool {
        if cost < self.cost {
            self.tour = Some(tour.to_vec());
            self.cost = cost;
            true
        } else {
            false
        }
    }

    fn into_parts(self) -> (Option<Tour>, f64) {
        (self.tour, self.cost)
    }
}

impl Default for GlobalBest {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary of one generation's fitness table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// 1-based generation number.
    pub generation: usize,
    /// Lowest tour length in the scored population.
    pub best: f64,
    /// Mean tour length in the scored population.
    pub mean: f64,
    /// Highest tour length in the scored population.
    pub worst: f64,
}

impl GenerationStats {
    fn from_fitness(generation: usize, fitness: &[f64]) -> Self {
        let best = fitness.iter().copied().fold(f64::INFINITY, f64::min);
        let worst = fitness.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = fitness.iter().sum::<f64>() / fitness.len() as f64;
        Self {
            generation,
            best,
            mean,
            worst,
        }
    }
}

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The best tour found, `None` if no population was ever scored.
    pub best: Option<Tour>,

    /// Length of `best` (`+∞` when `best` is `None`).
    pub best_cost: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Global-best cost at the end of each generation.
    pub fitness_history: Vec<f64>,

    /// The population produced by the last generation.
    pub final_population: Vec<Tour>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_memetic::distance::DistanceModel;
/// use u_memetic::ga::{GaConfig, GaRunner};
///
/// let model = DistanceModel::from_coordinates(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)])
///     .unwrap();
/// let config = GaConfig::new(10, 0.9, 0.05, 30).with_seed(42);
/// let result = GaRunner::run(&model, &config).unwrap();
/// assert!(result.best_cost >= 4.0 - 1e-9);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from `config.seed`.
    ///
    /// # Errors
    /// Returns the [`ConfigError`] from [`GaConfig::validate`].
    pub fn run(model: &DistanceModel, config: &GaConfig) -> Result<GaResult, ConfigError> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(model, config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`. `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        model: &DistanceModel,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult, ConfigError> {
        Self::run_with_observer(model, config, rng, |_| {})
    }

    /// Runs the GA, calling `observer` once per generation with statistics
    /// of the population scored in that generation.
    ///
    /// Per generation, in order:
    ///
    /// 1. score the current population
    /// 2. select parents by binary tournament
    /// 3. recombine parent pairs
    /// 4. mutate the children
    /// 5. replace the population with the children
    /// 6. offer the best tour of the population scored in step 1 to the
    ///    global best
    ///
    /// Children are scored at the start of the next generation, so the
    /// last generation's children only count when
    /// [`GaConfig::final_evaluation`] is set.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(
            cities = model.size(),
            population_size = config.population_size,
            generation_count = config.generation_count,
        )
    )]
    pub fn run_with_observer<R, F>(
        model: &DistanceModel,
        config: &GaConfig,
        rng: &mut R,
        mut observer: F,
    ) -> Result<GaResult, ConfigError>
    where
        R: Rng,
        F: FnMut(&GenerationStats),
    {
        config.validate()?;

        let mut population = initialize(config.population_size, model.size(), rng);
        let mut best = GlobalBest::new();
        let mut fitness_history = Vec::with_capacity(config.generation_count);

        for gen in 0..config.generation_count {
            let fitness = evaluate_population(model, &population, config.parallel);

            let parents = select_parents(&population, &fitness, rng);
            let mut children = crossover_pairs(parents, config.crossover_rate, rng);
            mutate_children(&mut children, config.mutation_rate, rng);
            let scored = std::mem::replace(&mut population, children);

            let (idx, cost) = argmin(&fitness);
            if best.offer(&scored[idx], cost) {
                tracing::debug!(generation = gen + 1, cost, "new global best");
            }
            fitness_history.push(best.cost());

            let stats = GenerationStats::from_fitness(gen + 1, &fitness);
            tracing::trace!(
                generation = stats.generation,
                best = stats.best,
                mean = stats.mean,
                worst = stats.worst,
                "generation scored"
            );
            observer(&stats);
        }

        if config.final_evaluation {
            let fitness = evaluate_population(model, &population, config.parallel);
            let (idx, cost) = argmin(&fitness);
            if best.offer(&population[idx], cost) {
                tracing::debug!(cost, "final population improved global best");
            }
        }

        tracing::info!(
            best_cost = best.cost(),
            generations = config.generation_count,
            "genetic search finished"
        );

        let (best, best_cost) = best.into_parts();
        Ok(GaResult {
            best,
            best_cost,
            generations: config.generation_count,
            fitness_history,
            final_population: population,
        })
    }
}

/// Scores every tour in the population.
fn evaluate_population(model: &DistanceModel, population: &[Tour], parallel: bool) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    if parallel {
        return population
            .par_iter()
            .map(|tour| model.tour_length(tour))
            .collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    population
        .iter()
        .map(|tour| model.tour_length(tour))
        .collect()
}

/// Index and value of the first minimum in the fitness table.
fn argmin(fitness: &[f64]) -> (usize, f64) {
    let mut best_idx = 0;
    for (i, &f) in fitness.iter().enumerate().skip(1) {
        if f < fitness[best_idx] {
            best_idx = i;
        }
    }
    (best_idx, fitness[best_idx])
}

// ============================================================================
// Tests
// ============================================================================
