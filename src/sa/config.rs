//! SA configuration.

use crate::error::ConfigError;

/// Geometric cooling schedule for Simulated Annealing.
///
/// The temperature starts at `initial_temperature` and is multiplied by
/// `cooling_factor` after every step until it is no longer above
/// `final_temperature`. One neighbor is evaluated per step.
///
/// The default schedule is `T0 = 1000`, `Tf = 1`, `α = 0.957`.
///
/// # Examples
///
/// ```
/// use u_memetic::sa::SaConfig;
///
/// let config = SaConfig::default();
/// assert_eq!(config.step_count(), 158);
///
/// let slow = SaConfig::default().with_cooling_factor(0.99).with_seed(42);
/// assert!(slow.step_count() > config.step_count());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Starting temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// The loop runs while the temperature is above this value.
    pub final_temperature: f64,

    /// Multiplicative cooling factor in (0, 1): `T ← T · α` each step.
    pub cooling_factor: f64,

    /// Random seed for reproducibility, used by [`SaRunner::run`](super::SaRunner::run).
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            final_temperature: 1.0,
            cooling_factor: 0.957,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_final_temperature(mut self, t: f64) -> Self {
        self.final_temperature = t;
        self
    }

    pub fn with_cooling_factor(mut self, alpha: f64) -> Self {
        self.cooling_factor = alpha;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of annealing steps: `ceil(ln(Tf / T0) / ln(α))`.
    ///
    /// Independent of which moves are accepted. Assumes a valid schedule.
    pub fn step_count(&self) -> usize {
        let steps = (self.final_temperature / self.initial_temperature).ln()
            / self.cooling_factor.ln();
        steps.ceil().max(0.0) as usize
    }

    /// Validates the schedule.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidAnnealing`] if a temperature is not positive and
    /// finite, `Tf >= T0`, or `α` is outside (0, 1).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(ConfigError::InvalidAnnealing(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            )));
        }
        if !(self.final_temperature.is_finite() && self.final_temperature > 0.0) {
            return Err(ConfigError::InvalidAnnealing(format!(
                "final_temperature must be positive and finite, got {}",
                self.final_temperature
            )));
        }
        if self.final_temperature >= self.initial_temperature {
            return Err(ConfigError::InvalidAnnealing(
                "final_temperature must be less than initial_temperature".into(),
            ));
        }
        let alpha = self.cooling_factor;
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(ConfigError::InvalidAnnealing(format!(
                "cooling_factor must be in (0, 1), got {alpha}"
            )));
        }
        Ok(())
    }
}
