//! Genetic algorithm for the Euclidean TSP.
//!
//! Each generation scores the population, selects parents by binary
//! tournament, recombines them pairwise with a permutation-preserving
//! one-point crossover, applies swap mutation, and replaces the whole
//! population with the children. The best tour ever scored is tracked in a
//! [`GlobalBest`] record alongside the population.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Search parameters (population size, rates, generations)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best tour, cost history, and final population
//!
//! # Submodules
//!
//! - [`population`]: Random initial population
//! - [`selection`]: Binary tournament selection
//! - [`operators`]: Prefix crossover and swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
pub mod population;
mod runner;
pub mod selection;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner, GenerationStats, GlobalBest};
