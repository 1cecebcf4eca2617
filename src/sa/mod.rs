//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases over time (temperature), allowing the search to escape
//! local optima.
//!
//! For tours, [`SwapNeighborhood`] proposes exchanges of two distinct
//! positions; [`SaRunner::refine`] polishes a given tour under the
//! geometric schedule in [`SaConfig`].
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;
mod types;

pub use config::SaConfig;
pub use runner::{metropolis_accept, SaResult, SaRunner};
pub use types::{SaProblem, SwapNeighborhood};
