//! Fixture builders shared by unit, behaviour and property tests.
//!
//! `meridian_table` places towns on the prime meridian so haversine
//! distances between them equal the requested kilometre offsets, which keeps
//! worked examples readable.

use jiff::civil::date;

use crate::{Driver, EARTH_RADIUS_KM, LocationTable, Order, Vehicle};

/// Kilometres covered by one degree of latitude on the haversine sphere.
#[expect(clippy::float_arithmetic, reason = "arc length per degree")]
#[must_use]
pub fn km_per_degree() -> f64 {
    EARTH_RADIUS_KM * std::f64::consts::PI / 180.0
}

/// Latitude, in degrees, lying `km` north of the equator on the meridian.
#[expect(clippy::float_arithmetic, reason = "inverse arc length")]
#[must_use]
pub fn latitude_for_km(km: f64) -> f64 {
    km / km_per_degree()
}

/// Build a table whose towns sit on the prime meridian at the given
/// kilometre offsets from the equator (negative values lie south).
///
/// # Panics
/// Panics if an offset maps outside the valid latitude range.
#[expect(clippy::expect_used, reason = "fixtures fail fast on bad offsets")]
#[must_use]
pub fn meridian_table(towns: &[(&str, f64)]) -> LocationTable {
    LocationTable::from_entries(
        towns
            .iter()
            .map(|&(name, km)| (name, latitude_for_km(km), 0.0)),
    )
    .expect("meridian offsets must stay within ±90° latitude")
}

/// Unprocessed order for `weight` kilograms from `pickup` to `delivery`.
///
/// # Panics
/// Panics if `weight` is negative or not finite.
#[expect(clippy::expect_used, reason = "fixtures fail fast on bad weights")]
#[must_use]
pub fn order(id: u64, pickup: &str, delivery: &str, weight: f64) -> Order {
    Order::new(id, "Test Customer", pickup, delivery, weight, date(2025, 1, 15))
        .expect("fixture weight must be valid")
}

/// Available vehicle parked at `position`.
///
/// # Panics
/// Panics if `capacity` or `cost_per_km` is negative or not finite.
#[expect(clippy::expect_used, reason = "fixtures fail fast on bad numbers")]
#[must_use]
pub fn vehicle(id: u64, plate: &str, position: &str, cost_per_km: f64, capacity: f64) -> Vehicle {
    Vehicle::new(id, plate, "van", capacity, cost_per_km, position)
        .expect("fixture vehicle numbers must be valid")
}

/// Available driver with a placeholder phone number.
#[must_use]
pub fn driver(id: u64, name: &str) -> Driver {
    Driver::new(id, name, format!("+421900{id:06}"))
}
