//! Configuration errors.
//!
//! Every fault this crate reports is a configuration fault detected before
//! a run starts. Once a configuration validates, the stochastic operators
//! cannot fail.

/// An invalid configuration or city catalog.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The city catalog has no cities, so there are no genes to permute.
    #[error("city catalog must contain at least one city")]
    EmptyCatalog,

    /// A city coordinate is NaN or infinite.
    #[error("city {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    /// Population size is zero.
    #[error("population_size must be positive")]
    EmptyPopulation,

    /// Population size is odd, leaving the last parent without a partner.
    #[error("population_size must be even, got {0}")]
    OddPopulationSize(usize),

    /// A probability parameter lies outside `[0, 1]` or is NaN.
    #[error("{name} must be in [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },

    /// The annealing schedule cannot terminate or is meaningless.
    #[error("invalid annealing schedule: {0}")]
    InvalidAnnealing(String),
}

/// Checks that `value` is a probability.
pub(crate) fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::RateOutOfRange { name, value })
    }
}
