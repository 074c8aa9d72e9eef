//! Facade crate for the dispatch engine.
//!
//! This crate re-exports the core domain types and, behind the `assign`
//! feature, the assignment engine and its store-backed service.

#![forbid(unsafe_code)]

pub use dispatch_core::{
    AssignmentResult, Driver, FleetStore, LocationTable, LocationTableError, MemoryFleetStore,
    NO_AVAILABLE_DRIVERS, NO_AVAILABLE_VEHICLES, ORDER_ALREADY_PROCESSED, Order, OrderError,
    StoreError, UnknownLocation, Vehicle, VehicleError, haversine_km, round2,
};

#[cfg(feature = "serde")]
pub use dispatch_core::{DatasetError, FleetDataset};

#[cfg(feature = "assign")]
pub use dispatch_assign::{
    AssignError, AssignmentEngine, AssignmentService, DriverSelector, RandomDriverSelector,
    ScoreWeights, ScoredCandidate,
};
