//! JSON fleet datasets.
//!
//! A dataset bundles the three record collections in one document:
//!
//! ```json
//! {
//!   "orders":   [{ "id": 1, "customer_name": "ACME", "pickup_addr": "Nitra",
//!                  "delivery_addr": "Trnava", "total_weight": 450.0,
//!                  "date": "2025-03-14", "status": false }],
//!   "vehicles": [{ "id": 1, "license_plate": "NR-123AB", "vehicle_type": "van",
//!                  "max_capacity": 600.0, "cost_per_km": 0.8,
//!                  "current_position": "Nitra", "availability": true }],
//!   "drivers":  [{ "id": 1, "name": "Jana", "phone": "+421900111222",
//!                  "availability": true }]
//! }
//! ```

use std::io::Read;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Driver, MemoryFleetStore, Order, StoreError, Vehicle};

/// Errors raised while loading a [`FleetDataset`].
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The JSON document could not be decoded.
    #[error("failed to parse fleet dataset JSON: {0}")]
    Parse(#[source] serde_json::Error),
    /// A record failed validation.
    #[error("invalid {kind} {id}: {reason}")]
    InvalidRecord {
        /// Record kind, e.g. `"vehicle"`.
        kind: &'static str,
        /// Identifier of the rejected record.
        id: u64,
        /// Validation failure message.
        reason: String,
    },
    /// Records could not be loaded into a store.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Serialisable collection of orders, vehicles and drivers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetDataset {
    /// Delivery orders.
    #[serde(default)]
    pub orders: Vec<Order>,
    /// Vehicles in the fleet.
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    /// Drivers on the roster.
    #[serde(default)]
    pub drivers: Vec<Driver>,
}

impl FleetDataset {
    /// Decode a dataset from a JSON string.
    ///
    /// # Errors
    /// Returns [`DatasetError::Parse`] for malformed JSON and
    /// [`DatasetError::InvalidRecord`] when a numeric field is negative or
    /// not finite.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let dataset: Self = serde_json::from_str(json).map_err(DatasetError::Parse)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Decode a dataset from `reader`.
    ///
    /// # Errors
    /// See [`FleetDataset::from_json_str`].
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let dataset: Self = serde_json::from_reader(reader).map_err(DatasetError::Parse)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Move the records into a [`MemoryFleetStore`].
    ///
    /// # Errors
    /// Returns [`DatasetError::Store`] when identifiers collide.
    pub fn into_store(self) -> Result<MemoryFleetStore, DatasetError> {
        let store = MemoryFleetStore::with_records(self.orders, self.vehicles, self.drivers)?;
        Ok(store)
    }

    fn validate(&self) -> Result<(), DatasetError> {
        for order in &self.orders {
            order.validate().map_err(|err| DatasetError::InvalidRecord {
                kind: "order",
                id: order.id,
                reason: err.to_string(),
            })?;
        }
        for vehicle in &self.vehicles {
            vehicle.validate().map_err(|err| DatasetError::InvalidRecord {
                kind: "vehicle",
                id: vehicle.id,
                reason: err.to_string(),
            })?;
        }
        Ok(())
    }
}
