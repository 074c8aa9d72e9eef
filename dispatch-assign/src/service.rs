//! Store-backed assignment by order identifier.

use dispatch_core::{AssignmentResult, FleetStore, LocationTable};

use crate::{AssignError, AssignmentEngine, DriverSelector};

/// Resolves orders from a [`FleetStore`] and runs them through an
/// [`AssignmentEngine`].
///
/// The store supplies the eligibility filtering: only available vehicles
/// whose capacity covers the order weight, and only available drivers,
/// reach the engine.
#[derive(Debug)]
pub struct AssignmentService<'t, S, D> {
    store: S,
    engine: AssignmentEngine<'t, D>,
}

impl<'t, S: FleetStore, D: DriverSelector> AssignmentService<'t, S, D> {
    /// Combine a store with a location table and driver selector.
    #[must_use]
    pub fn new(store: S, locations: &'t LocationTable, driver_selector: D) -> Self {
        Self::with_engine(store, AssignmentEngine::new(locations, driver_selector))
    }

    /// Combine a store with a preconfigured engine.
    #[must_use]
    pub const fn with_engine(store: S, engine: AssignmentEngine<'t, D>) -> Self {
        Self { store, engine }
    }

    /// The backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Assign the order identified by `order_id`.
    ///
    /// # Errors
    /// Returns [`AssignError::RecordNotFound`] if the store has no such order
    /// and [`AssignError::UnknownLocation`] for towns missing from the
    /// location table.
    pub fn assign_order(&mut self, order_id: u64) -> Result<AssignmentResult, AssignError> {
        let order = self
            .store
            .order(order_id)
            .ok_or(AssignError::RecordNotFound { order_id })?;
        let vehicles = self.store.eligible_vehicles(&order);
        let drivers = self.store.available_drivers();
        log::debug!(
            "order {order_id}: {} eligible vehicles, {} available drivers",
            vehicles.len(),
            drivers.len()
        );
        self.engine.assign(&order, &vehicles, &drivers)
    }
}
