//! City catalog and Euclidean distance model.
//!
//! [`DistanceModel`] is the fitness function of the whole crate: every
//! operator that scores a tour goes through [`DistanceModel::tour_length`].

mod city;
mod model;

pub use city::City;
pub use model::{DistanceModel, Tour};
