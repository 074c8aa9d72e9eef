//! Vehicle and driver assignment for delivery orders.
//!
//! Eligible vehicles are scored on their great-circle distance to the pickup
//! town and on the cost of the whole trip. Both figures are min-max
//! normalised across the candidate pool and combined with [`ScoreWeights`]
//! (0.7 distance, 0.3 cost by default); the lowest score wins and exact ties
//! keep the first vehicle. A driver is then drawn through a
//! [`DriverSelector`], which tests seed for reproducible runs.
//!
//! [`AssignmentEngine`] works on slices the caller has already filtered.
//! [`AssignmentService`] resolves an order id through a
//! [`FleetStore`](dispatch_core::FleetStore) and filters for you.

#![forbid(unsafe_code)]

mod driver;
mod engine;
mod error;
mod scoring;
mod service;

pub use driver::{DriverSelector, RandomDriverSelector};
pub use engine::AssignmentEngine;
pub use error::AssignError;
pub use scoring::{ScoreWeights, ScoredCandidate, normalise, score_candidates, select_best};
pub use service::AssignmentService;
