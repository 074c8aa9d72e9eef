//! Record access for orders, vehicles and drivers.
//!
//! The `FleetStore` trait is the read side the assignment service depends
//! on. `MemoryFleetStore` is the in-process implementation used by the CLI
//! and the tests; it also provides the create operations.

use thiserror::Error;

use crate::{Driver, Order, Vehicle};

/// Errors raised by [`MemoryFleetStore`] create operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A record with the same identifier already exists.
    #[error("{kind} with id {id} already exists")]
    DuplicateId {
        /// Record kind, e.g. `"order"`.
        kind: &'static str,
        /// Conflicting identifier.
        id: u64,
    },
}

/// Read-only access to fleet records.
///
/// Iterators yield owned records so implementations can hand out snapshots
/// from behind locks or connections.
///
/// # Examples
/// ```
/// use dispatch_core::{Driver, FleetStore, MemoryFleetStore};
///
/// let mut store = MemoryFleetStore::default();
/// store.insert_driver(Driver::new(0, "Jana", "+421900111222")).unwrap();
/// store.insert_driver(Driver::new(0, "Peter", "+421900333444").unavailable()).unwrap();
///
/// let names: Vec<_> = store.available_drivers().into_iter().map(|d| d.name).collect();
/// assert_eq!(names, vec!["Jana".to_string()]);
/// ```
pub trait FleetStore {
    /// Return the order with `id`, if present.
    fn order(&self, id: u64) -> Option<Order>;

    /// Iterate over every order.
    fn orders(&self) -> Box<dyn Iterator<Item = Order> + Send + '_>;

    /// Iterate over every vehicle.
    fn vehicles(&self) -> Box<dyn Iterator<Item = Vehicle> + Send + '_>;

    /// Iterate over every driver.
    fn drivers(&self) -> Box<dyn Iterator<Item = Driver> + Send + '_>;

    /// Vehicles that are available and can carry `order`.
    fn eligible_vehicles(&self, order: &Order) -> Vec<Vehicle> {
        self.vehicles()
            .filter(|vehicle| vehicle.is_eligible_for(order))
            .collect()
    }

    /// Drivers that are available.
    fn available_drivers(&self) -> Vec<Driver> {
        self.drivers().filter(|driver| driver.availability).collect()
    }
}

/// In-memory [`FleetStore`] backed by vectors.
///
/// Records keep insertion order, which is also the order in which vehicles
/// reach the engine and therefore the tie-break order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryFleetStore {
    orders: Vec<Order>,
    vehicles: Vec<Vehicle>,
    drivers: Vec<Driver>,
}

impl MemoryFleetStore {
    /// Build a store from existing records.
    ///
    /// # Errors
    /// Returns [`StoreError::DuplicateId`] when two records of the same kind
    /// share a non-zero identifier.
    pub fn with_records(
        orders: impl IntoIterator<Item = Order>,
        vehicles: impl IntoIterator<Item = Vehicle>,
        drivers: impl IntoIterator<Item = Driver>,
    ) -> Result<Self, StoreError> {
        let mut store = Self::default();
        for order in orders {
            store.insert_order(order)?;
        }
        for vehicle in vehicles {
            store.insert_vehicle(vehicle)?;
        }
        for driver in drivers {
            store.insert_driver(driver)?;
        }
        Ok(store)
    }

    /// Insert an order and return its identifier.
    ///
    /// An `id` of `0` asks the store to allocate the next identifier.
    ///
    /// # Errors
    /// Returns [`StoreError::DuplicateId`] if the identifier is taken.
    pub fn insert_order(&mut self, mut order: Order) -> Result<u64, StoreError> {
        order.id = allocate("order", order.id, self.orders.iter().map(|o| o.id))?;
        let id = order.id;
        self.orders.push(order);
        Ok(id)
    }

    /// Insert a vehicle and return its identifier.
    ///
    /// # Errors
    /// Returns [`StoreError::DuplicateId`] if the identifier is taken.
    pub fn insert_vehicle(&mut self, mut vehicle: Vehicle) -> Result<u64, StoreError> {
        vehicle.id = allocate("vehicle", vehicle.id, self.vehicles.iter().map(|v| v.id))?;
        let id = vehicle.id;
        self.vehicles.push(vehicle);
        Ok(id)
    }

    /// Insert a driver and return its identifier.
    ///
    /// # Errors
    /// Returns [`StoreError::DuplicateId`] if the identifier is taken.
    pub fn insert_driver(&mut self, mut driver: Driver) -> Result<u64, StoreError> {
        driver.id = allocate("driver", driver.id, self.drivers.iter().map(|d| d.id))?;
        let id = driver.id;
        self.drivers.push(driver);
        Ok(id)
    }
}

impl FleetStore for MemoryFleetStore {
    fn order(&self, id: u64) -> Option<Order> {
        self.orders.iter().find(|order| order.id == id).cloned()
    }

    fn orders(&self) -> Box<dyn Iterator<Item = Order> + Send + '_> {
        Box::new(self.orders.iter().cloned())
    }

    fn vehicles(&self) -> Box<dyn Iterator<Item = Vehicle> + Send + '_> {
        Box::new(self.vehicles.iter().cloned())
    }

    fn drivers(&self) -> Box<dyn Iterator<Item = Driver> + Send + '_> {
        Box::new(self.drivers.iter().cloned())
    }
}

fn allocate(
    kind: &'static str,
    requested: u64,
    existing: impl Iterator<Item = u64>,
) -> Result<u64, StoreError> {
    let mut max_id = 0;
    for id in existing {
        if requested != 0 && id == requested {
            return Err(StoreError::DuplicateId { kind, id });
        }
        max_id = max_id.max(id);
    }
    if requested == 0 {
        Ok(max_id.saturating_add(1))
    } else {
        Ok(requested)
    }
}
