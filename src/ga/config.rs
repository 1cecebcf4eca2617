//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.
//! They are fixed at construction and never change during a run.

use crate::error::{check_rate, ConfigError};

/// Configuration for the genetic algorithm.
///
/// The four search parameters are required; there is no `Default`.
///
/// # Examples
///
/// ```
/// use u_memetic::ga::GaConfig;
///
/// let config = GaConfig::new(100, 0.8, 0.01, 500)
///     .with_seed(42)
///     .with_parallel(false);
/// assert!(config.validate().is_ok());
///
/// // Odd population sizes cannot be paired for crossover.
/// assert!(GaConfig::new(7, 0.8, 0.01, 500).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of tours in the population. Must be positive and even.
    pub population_size: usize,

    /// Probability of recombining a parent pair (0.0–1.0).
    ///
    /// When crossover is not applied, both parents are copied unchanged.
    pub crossover_rate: f64,

    /// Per-child probability of one random position swap (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of generations to run.
    pub generation_count: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Whether to score the population in parallel using rayon.
    ///
    /// Only honored with the `parallel` feature. Scoring draws no random
    /// numbers, so seeded runs are identical either way.
    pub parallel: bool,

    /// Whether to score the final population once after the last
    /// generation and offer it to the global best.
    ///
    /// Off by default: the global best then reflects only the populations
    /// scored at the start of each generation, so the last generation's
    /// children are never considered.
    pub final_evaluation: bool,
}

impl GaConfig {
    /// Creates a configuration from the four required search parameters.
    pub fn new(
        population_size: usize,
        crossover_rate: f64,
        mutation_rate: f64,
        generation_count: usize,
    ) -> Self {
        Self {
            population_size,
            crossover_rate,
            mutation_rate,
            generation_count,
            seed: None,
            parallel: false,
            final_evaluation: false,
        }
    }

    /// Preset tuned on a 52-city benchmark instance.
    ///
    /// - Population: 100, Generations: 5161
    /// - Crossover rate: ≈0.807, Mutation rate: ≈0.0092
    pub fn tuned() -> Self {
        Self::new(100, 0.807_289_907_047_724_7, 0.009_229_974_637_784_487, 5161)
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the crossover rate. Not clamped; see [`validate`](Self::validate).
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation rate. Not clamped; see [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the number of generations.
    pub fn with_generation_count(mut self, n: usize) -> Self {
        self.generation_count = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Enables or disables the extra scoring pass over the final population.
    pub fn with_final_evaluation(mut self, enabled: bool) -> Self {
        self.final_evaluation = enabled;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EmptyPopulation`] if `population_size == 0`
    /// - [`ConfigError::OddPopulationSize`] if `population_size` is odd
    /// - [`ConfigError::RateOutOfRange`] if either rate is outside `[0, 1]`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.population_size % 2 != 0 {
            return Err(ConfigError::OddPopulationSize(self.population_size));
        }
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config() {
        let config = GaConfig::new(10, 0.9, 0.1, 30);
        assert_eq!(config.population_size, 10);
        assert!((config.crossover_rate - 0.9).abs() < 1e-10);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert_eq!(config.generation_count, 30);
        assert!(config.seed.is_none());
        assert!(!config.parallel);
        assert!(!config.final_evaluation);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::new(10, 0.9, 0.1, 30)
            .with_population_size(20)
            .with_crossover_rate(0.5)
            .with_mutation_rate(0.05)
            .with_generation_count(100)
            .with_seed(42)
            .with_parallel(true)
            .with_final_evaluation(true);

        assert_eq!(config.population_size, 20);
        assert!((config.crossover_rate - 0.5).abs() < 1e-10);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert_eq!(config.generation_count, 100);
        assert_eq!(config.seed, Some(42));
        assert!(config.parallel);
        assert!(config.final_evaluation);
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::new(2, 0.0, 1.0, 0).validate().is_ok());
    }

    #[test]
    fn test_validate_zero_population() {
        assert_eq!(
            GaConfig::new(0, 0.5, 0.5, 10).validate(),
            Err(ConfigError::EmptyPopulation)
        );
    }

    #[test]
    fn test_validate_odd_population() {
        assert_eq!(
            GaConfig::new(5, 0.5, 0.5, 10).validate(),
            Err(ConfigError::OddPopulationSize(5))
        );
    }

    #[test]
    fn test_validate_rates_out_of_range() {
        assert!(matches!(
            GaConfig::new(4, 1.5, 0.5, 10).validate(),
            Err(ConfigError::RateOutOfRange {
                name: "crossover_rate",
                ..
            })
        ));
        assert!(matches!(
            GaConfig::new(4, 0.5, -0.1, 10).validate(),
            Err(ConfigError::RateOutOfRange {
                name: "mutation_rate",
                ..
            })
        ));
        assert!(GaConfig::new(4, f64::NAN, 0.5, 10).validate().is_err());
    }

    #[test]
    fn test_setters_do_not_clamp() {
        let config = GaConfig::new(4, 0.5, 0.5, 10).with_mutation_rate(2.0);
        assert!((config.mutation_rate - 2.0).abs() < 1e-10);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_preset_tuned() {
        let config = GaConfig::tuned();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.generation_count, 5161);
        assert!((config.crossover_rate - 0.8072899070477247).abs() < 1e-15);
        assert!((config.mutation_rate - 0.009229974637784487).abs() < 1e-15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_preset_chainable() {
        let config = GaConfig::tuned().with_generation_count(50).with_seed(7);
        assert_eq!(config.generation_count, 50);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.population_size, 100);
    }
}
