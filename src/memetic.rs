//! Memetic algorithm: GA followed by annealing of the global best.
//!
//! [`MemeticRunner`] runs the genetic search to completion, then hands the
//! global-best tour to Simulated Annealing over the swap neighborhood. A
//! single generator feeds both phases, so one seed reproduces the whole run.

use crate::distance::{DistanceModel, Tour};
use crate::error::ConfigError;
use crate::ga::{GaConfig, GaResult, GaRunner};
use crate::random::rng_from_seed;
use crate::sa::{SaConfig, SaResult, SaRunner, SwapNeighborhood};
use rand::Rng;

/// Result of a memetic run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemeticResult {
    /// Outcome of the genetic phase.
    pub genetic: GaResult,

    /// Outcome of annealing the genetic best; `None` when the genetic phase
    /// produced no tour (zero generations).
    pub refined: Option<SaResult<Tour>>,
}

impl MemeticResult {
    /// The final tour: the refined tour if annealing ran, else the genetic best.
    pub fn best(&self) -> Option<&Tour> {
        match &self.refined {
            Some(sa) => Some(&sa.best),
            None => self.genetic.best.as_ref(),
        }
    }

    /// Length of [`best`](Self::best), `+∞` if there is none.
    pub fn best_cost(&self) -> f64 {
        match &self.refined {
            Some(sa) => sa.best_cost,
            None => self.genetic.best_cost,
        }
    }
}

/// Executes the memetic algorithm.
///
/// # Usage
///
/// ```
/// use u_memetic::distance::DistanceModel;
/// use u_memetic::ga::GaConfig;
/// use u_memetic::memetic::MemeticRunner;
/// use u_memetic::sa::SaConfig;
///
/// let model = DistanceModel::from_coordinates(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)])
///     .unwrap();
/// let ga = GaConfig::new(4, 1.0, 0.0, 50).with_seed(42);
/// let result = MemeticRunner::run(&model, &ga, &SaConfig::default()).unwrap();
/// assert!((result.best_cost() - 4.0).abs() < 1e-9);
/// ```
pub struct MemeticRunner;

impl MemeticRunner {
    /// Runs both phases with a generator seeded from `ga_config.seed`.
    ///
    /// `sa_config.seed` is ignored.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] from either configuration, before
    /// any randomness is drawn.
    pub fn run(
        model: &DistanceModel,
        ga_config: &GaConfig,
        sa_config: &SaConfig,
    ) -> Result<MemeticResult, ConfigError> {
        let mut rng = rng_from_seed(ga_config.seed);
        Self::run_with_rng(model, ga_config, sa_config, &mut rng)
    }

    /// Runs both phases drawing all randomness from `rng`.
    #[tracing::instrument(level = "debug", skip_all, fields(cities = model.size()))]
    pub fn run_with_rng<R: Rng>(
        model: &DistanceModel,
        ga_config: &GaConfig,
        sa_config: &SaConfig,
        rng: &mut R,
    ) -> Result<MemeticResult, ConfigError> {
        ga_config.validate()?;
        sa_config.validate()?;

        let genetic = GaRunner::run_with_rng(model, ga_config, rng)?;

        let refined = match &genetic.best {
            Some(tour) => {
                let problem = SwapNeighborhood::new(model);
                Some(SaRunner::refine_with_rng(&problem, tour.clone(), sa_config, rng)?)
            }
            None => {
                tracing::warn!("genetic phase produced no tour; skipping annealing");
                None
            }
        };

        let result = MemeticResult { genetic, refined };
        tracing::info!(
            genetic_cost = result.genetic.best_cost,
            final_cost = result.best_cost(),
            "memetic search finished"
        );
        Ok(result)
    }
}
