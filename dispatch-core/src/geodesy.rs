//! Great-circle distance and cost helpers.
//!
//! Coordinates follow the `geo` convention used throughout the workspace:
//! `x` is longitude and `y` is latitude, both in degrees.

use geo::Coord;

/// Mean Earth radius used for haversine distances, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Return the haversine distance between `start` and `finish` in kilometres.
///
/// The result is symmetric and exactly `0.0` for identical points.
///
/// # Examples
/// ```
/// use dispatch_core::haversine_km;
/// use geo::Coord;
///
/// let bratislava = Coord { x: 17.1077, y: 48.1486 };
/// let kosice = Coord { x: 21.2611, y: 48.7164 };
/// let d = haversine_km(bratislava, kosice);
/// assert!((d - 312.0).abs() < 5.0);
/// assert_eq!(haversine_km(bratislava, bratislava), 0.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "great-circle distance is floating-point trigonometry"
)]
#[must_use]
pub fn haversine_km(start: Coord<f64>, finish: Coord<f64>) -> f64 {
    let phi1 = start.y.to_radians();
    let phi2 = finish.y.to_radians();
    let delta_phi = (finish.y - start.y).to_radians();
    let delta_lambda = (finish.x - start.x).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Cost of travelling `distance_km` at `cost_per_km`.
#[expect(clippy::float_arithmetic, reason = "cost is distance times rate")]
#[must_use]
pub fn travel_cost(distance_km: f64, cost_per_km: f64) -> f64 {
    distance_km * cost_per_km
}

/// Round to two decimal places.
///
/// Rounds the exact binary value; a tie only occurs when `value` is an exact
/// half-hundredth such as `0.125`, and goes to the even digit.
///
/// Used for every distance and cost exposed in an
/// [`AssignmentResult`](crate::AssignmentResult).
#[must_use]
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
