//! Core domain types for the dispatch engine.
//!
//! The crate holds the records the assignment engine reads (orders,
//! vehicles, drivers), the town-name [`LocationTable`], great-circle
//! distance helpers and the [`AssignmentResult`] returned to callers. Record
//! storage is abstracted behind [`FleetStore`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod assignment;
#[cfg(feature = "serde")]
pub mod dataset;
pub mod geodesy;
pub mod location;
pub mod record;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use assignment::{
    AssignmentResult, NO_AVAILABLE_DRIVERS, NO_AVAILABLE_VEHICLES, ORDER_ALREADY_PROCESSED,
};
#[cfg(feature = "serde")]
pub use dataset::{DatasetError, FleetDataset};
pub use geodesy::{EARTH_RADIUS_KM, haversine_km, round2, travel_cost};
pub use location::{LocationTable, LocationTableError, UnknownLocation};
pub use record::{Driver, Order, OrderError, Vehicle, VehicleError};
pub use store::{FleetStore, MemoryFleetStore, StoreError};
