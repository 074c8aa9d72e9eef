//! Order, vehicle and driver records supplied by the fleet store.
//!
//! Records are plain data. Constructors validate the numeric fields that the
//! assignment engine relies on so malformed input fails before scoring.

use jiff::civil::Date;
use thiserror::Error;

/// A delivery order awaiting a vehicle and a driver.
///
/// # Examples
/// ```
/// use dispatch_core::Order;
/// use jiff::civil::date;
///
/// # fn main() -> Result<(), dispatch_core::OrderError> {
/// let order = Order::new(1, "ACME", "Nitra", "Trnava", 450.0, date(2025, 3, 14))?;
/// assert!(!order.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    /// Store-assigned identifier.
    pub id: u64,
    /// Customer placing the order.
    pub customer_name: String,
    /// Town name where the goods are collected.
    pub pickup_addr: String,
    /// Town name where the goods are delivered.
    pub delivery_addr: String,
    /// Total weight of the goods in kilograms.
    pub total_weight: f64,
    /// Requested delivery date.
    pub date: Date,
    /// `true` once the order has been processed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: bool,
}

/// Errors returned by [`Order::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderError {
    /// Weight was negative, NaN or infinite.
    #[error("order weight must be a finite, non-negative number (got {weight})")]
    InvalidWeight {
        /// Rejected weight.
        weight: f64,
    },
}

impl Order {
    /// Validates and constructs an unprocessed [`Order`].
    ///
    /// # Errors
    /// Returns [`OrderError::InvalidWeight`] when `total_weight` is negative
    /// or not finite.
    pub fn new(
        id: u64,
        customer_name: impl Into<String>,
        pickup_addr: impl Into<String>,
        delivery_addr: impl Into<String>,
        total_weight: f64,
        date: Date,
    ) -> Result<Self, OrderError> {
        let order = Self {
            id,
            customer_name: customer_name.into(),
            pickup_addr: pickup_addr.into(),
            delivery_addr: delivery_addr.into(),
            total_weight,
            date,
            status: false,
        };
        order.validate()?;
        Ok(order)
    }

    /// Check the numeric fields of a record built outside [`Order::new`].
    ///
    /// # Errors
    /// Returns [`OrderError::InvalidWeight`] for a negative or non-finite
    /// weight.
    pub fn validate(&self) -> Result<(), OrderError> {
        if is_non_negative(self.total_weight) {
            Ok(())
        } else {
            Err(OrderError::InvalidWeight {
                weight: self.total_weight,
            })
        }
    }

    /// Mark the order as processed.
    #[must_use]
    pub const fn processed(mut self) -> Self {
        self.status = true;
        self
    }
}

/// A vehicle that may carry an order.
///
/// `current_position` is a town name and must match a key in the
/// [`LocationTable`](crate::LocationTable).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    /// Store-assigned identifier.
    pub id: u64,
    /// Registration plate, used as the display label.
    pub license_plate: String,
    /// Free-form vehicle category such as `van` or `truck`.
    pub vehicle_type: String,
    /// Maximum load in kilograms.
    pub max_capacity: f64,
    /// Operating cost per kilometre.
    pub cost_per_km: f64,
    /// Town where the vehicle is parked.
    pub current_position: String,
    /// Whether the vehicle can take new work.
    pub availability: bool,
}

/// Errors returned by [`Vehicle::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VehicleError {
    /// Capacity was negative, NaN or infinite.
    #[error("vehicle capacity must be a finite, non-negative number (got {capacity})")]
    InvalidCapacity {
        /// Rejected capacity.
        capacity: f64,
    },
    /// Cost per kilometre was negative, NaN or infinite.
    #[error("cost per km must be a finite, non-negative number (got {cost_per_km})")]
    InvalidCostPerKm {
        /// Rejected rate.
        cost_per_km: f64,
    },
}

impl Vehicle {
    /// Validates and constructs an available [`Vehicle`].
    ///
    /// # Errors
    /// Returns [`VehicleError`] when the capacity or the per-kilometre cost
    /// is negative or not finite.
    pub fn new(
        id: u64,
        license_plate: impl Into<String>,
        vehicle_type: impl Into<String>,
        max_capacity: f64,
        cost_per_km: f64,
        current_position: impl Into<String>,
    ) -> Result<Self, VehicleError> {
        let vehicle = Self {
            id,
            license_plate: license_plate.into(),
            vehicle_type: vehicle_type.into(),
            max_capacity,
            cost_per_km,
            current_position: current_position.into(),
            availability: true,
        };
        vehicle.validate()?;
        Ok(vehicle)
    }

    /// Check the numeric fields of a record built outside [`Vehicle::new`].
    ///
    /// # Errors
    /// Returns [`VehicleError`] for a negative or non-finite capacity or
    /// per-kilometre cost.
    pub fn validate(&self) -> Result<(), VehicleError> {
        if !is_non_negative(self.max_capacity) {
            return Err(VehicleError::InvalidCapacity {
                capacity: self.max_capacity,
            });
        }
        if !is_non_negative(self.cost_per_km) {
            return Err(VehicleError::InvalidCostPerKm {
                cost_per_km: self.cost_per_km,
            });
        }
        Ok(())
    }

    /// Mark the vehicle as unavailable.
    #[must_use]
    pub const fn unavailable(mut self) -> Self {
        self.availability = false;
        self
    }

    /// Report whether the vehicle's capacity covers `weight`.
    #[must_use]
    pub fn can_carry(&self, weight: f64) -> bool {
        self.max_capacity >= weight
    }

    /// Report whether the vehicle is available and large enough for `order`.
    ///
    /// # Examples
    /// ```
    /// use dispatch_core::{Order, Vehicle};
    /// use jiff::civil::date;
    ///
    /// let order = Order::new(1, "ACME", "Nitra", "Trnava", 500.0, date(2025, 1, 2)).unwrap();
    /// let van = Vehicle::new(7, "NR-123AB", "van", 600.0, 0.8, "Nitra").unwrap();
    /// assert!(van.is_eligible_for(&order));
    /// assert!(!van.unavailable().is_eligible_for(&order));
    /// ```
    #[must_use]
    pub fn is_eligible_for(&self, order: &Order) -> bool {
        self.availability && self.can_carry(order.total_weight)
    }
}

/// A driver who may be paired with the selected vehicle.
///
/// Drivers are assumed able to drive every vehicle type and to reach every
/// town, so no positional data is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Driver {
    /// Store-assigned identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Contact number.
    pub phone: String,
    /// Driving licence number, when recorded.
    #[cfg_attr(feature = "serde", serde(default))]
    pub license_number: Option<String>,
    /// Whether the driver can take new work.
    pub availability: bool,
}

impl Driver {
    /// Construct an available [`Driver`] without a licence number.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            phone: phone.into(),
            license_number: None,
            availability: true,
        }
    }

    /// Attach a licence number.
    #[must_use]
    pub fn with_license_number(mut self, license_number: impl Into<String>) -> Self {
        self.license_number = Some(license_number.into());
        self
    }

    /// Mark the driver as unavailable.
    #[must_use]
    pub const fn unavailable(mut self) -> Self {
        self.availability = false;
        self
    }
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use rstest::rstest;

    #[rstest]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn order_rejects_invalid_weight(#[case] weight: f64) {
        let result = Order::new(1, "ACME", "A", "B", weight, date(2025, 1, 1));
        assert!(matches!(result, Err(OrderError::InvalidWeight { .. })));
    }

    #[rstest]
    fn order_starts_unprocessed() {
        let order = Order::new(1, "ACME", "A", "B", 0.0, date(2025, 1, 1)).unwrap();
        assert!(!order.status);
        assert!(order.processed().status);
    }

    #[rstest]
    #[case(-5.0, 1.0)]
    #[case(100.0, -0.1)]
    #[case(f64::NAN, 1.0)]
    fn vehicle_rejects_invalid_numbers(#[case] capacity: f64, #[case] cost: f64) {
        assert!(Vehicle::new(1, "BA-001AA", "van", capacity, cost, "A").is_err());
    }

    #[rstest]
    #[case(600.0, true, true)]
    #[case(500.0, true, true)]
    #[case(499.9, true, false)]
    #[case(600.0, false, false)]
    fn vehicle_eligibility(#[case] capacity: f64, #[case] available: bool, #[case] expected: bool) {
        let order = Order::new(1, "ACME", "A", "B", 500.0, date(2025, 1, 1)).unwrap();
        let mut vehicle = Vehicle::new(1, "BA-001AA", "van", capacity, 1.0, "A").unwrap();
        vehicle.availability = available;
        assert_eq!(vehicle.is_eligible_for(&order), expected);
    }

    #[rstest]
    fn driver_builder_sets_licence() {
        let driver = Driver::new(3, "Jana", "+421900000000").with_license_number("SK123");
        assert_eq!(driver.license_number.as_deref(), Some("SK123"));
        assert!(driver.availability);
        assert!(!driver.unavailable().availability);
    }
}
