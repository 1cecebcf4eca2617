//! Genetic and memetic optimization for the symmetric Euclidean TSP.
//!
//! Given a fixed catalog of points, searches for a closed visiting order of
//! minimal total length:
//!
//! - **Genetic Algorithm (GA)**: Population of random tours evolved by
//!   binary tournament selection, prefix crossover, and swap mutation, with
//!   the best tour ever scored tracked across generations.
//! - **Simulated Annealing (SA)**: Swap-neighborhood annealing under a
//!   geometric cooling schedule.
//! - **Memetic**: GA followed by SA refinement of the GA's best tour.
//!
//! All randomness flows through one explicit generator per run, so a fixed
//! seed reproduces a run exactly.
//!
//! # Example
//!
//! ```
//! use u_memetic::distance::DistanceModel;
//! use u_memetic::ga::GaConfig;
//! use u_memetic::memetic::MemeticRunner;
//! use u_memetic::sa::SaConfig;
//!
//! let model = DistanceModel::from_coordinates(&[
//!     (0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0), (2.0, 5.0),
//! ])
//! .unwrap();
//! let ga = GaConfig::new(20, 0.8, 0.05, 50).with_seed(7);
//! let result = MemeticRunner::run(&model, &ga, &SaConfig::default()).unwrap();
//! assert!(model.is_tour(result.best().unwrap()));
//! ```

pub mod distance;
pub mod error;
pub mod ga;
pub mod memetic;
pub mod random;
pub mod sa;

pub use error::ConfigError;
