//! The outcome of an assignment attempt.

/// Reasoning used when the order has already been processed.
pub const ORDER_ALREADY_PROCESSED: &str = "Order already processed.";
/// Reasoning used when no vehicle is eligible for the order.
pub const NO_AVAILABLE_VEHICLES: &str = "No available vehicles for this order.";
/// Reasoning used when no driver is available.
pub const NO_AVAILABLE_DRIVERS: &str = "No available drivers for this order.";

/// Vehicle and driver chosen for an order, with the reasoning behind it.
///
/// Business outcomes that leave the order unassigned (already processed, no
/// vehicles, no drivers) are still represented as an `AssignmentResult`:
/// the labels are empty, the figures are zero and `reasoning` explains why.
///
/// # Examples
/// ```
/// use dispatch_core::{AssignmentResult, NO_AVAILABLE_DRIVERS};
///
/// let result = AssignmentResult::unassigned(NO_AVAILABLE_DRIVERS);
/// assert!(!result.is_assigned());
/// assert_eq!(result.estimated_cost, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignmentResult {
    /// Licence plate of the chosen vehicle, empty when unassigned.
    pub assigned_vehicle: String,
    /// Name of the chosen driver, empty when unassigned.
    pub assigned_driver: String,
    /// Cost of the full trip rounded to two decimals.
    pub estimated_cost: f64,
    /// Vehicle-to-pickup plus pickup-to-delivery distance in kilometres,
    /// rounded to two decimals.
    pub distance_km: f64,
    /// Human-readable explanation of the outcome.
    pub reasoning: String,
}

impl AssignmentResult {
    /// Result for an order that could not be assigned.
    #[must_use]
    pub fn unassigned(reasoning: impl Into<String>) -> Self {
        Self {
            reasoning: reasoning.into(),
            ..Self::default()
        }
    }

    /// Report whether a vehicle was chosen.
    #[must_use]
    pub fn is_assigned(&self) -> bool {
        !self.assigned_vehicle.is_empty()
    }
}
