//! Candidate scoring: distance, cost, min-max normalisation and weighting.
//!
//! Every eligible vehicle becomes a [`ScoredCandidate`]. Distances and costs
//! are normalised against the current candidate pool so the two criteria
//! are commensurable, then combined with [`ScoreWeights`]. Lower scores are
//! better.

use dispatch_core::{LocationTable, UnknownLocation, Vehicle, haversine_km, travel_cost};
use geo::Coord;

/// Relative importance of distance and cost in a candidate's score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Multiplier for the normalised distance to pickup.
    pub distance: f64,
    /// Multiplier for the normalised trip cost.
    pub cost: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            distance: 0.7,
            cost: 0.3,
        }
    }
}

/// A vehicle paired with the figures computed for one order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<'v> {
    /// The vehicle being ranked.
    pub vehicle: &'v Vehicle,
    /// Haversine distance from the vehicle to the pickup town, in km.
    pub distance_to_pickup: f64,
    /// Distance to pickup plus the pickup-to-delivery leg, in km.
    pub trip_distance: f64,
    /// `trip_distance * cost_per_km`.
    pub estimated_cost: f64,
    /// `distance_to_pickup` mapped into `[0, 1]` across the pool.
    pub norm_distance: f64,
    /// `estimated_cost` mapped into `[0, 1]` across the pool.
    pub norm_cost: f64,
    /// Weighted sum of the normalised figures.
    pub score: f64,
}

/// Min-max normalise `values` into `[0, 1]`.
///
/// When every value is equal the range is degenerate and each entry maps to
/// `0.0`.
///
/// # Examples
/// ```
/// use dispatch_assign::normalise;
///
/// assert_eq!(normalise(&[10.0, 20.0, 15.0]), vec![0.0, 1.0, 0.5]);
/// assert_eq!(normalise(&[4.0, 4.0]), vec![0.0, 0.0]);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "min-max normalisation divides by the value range"
)]
#[must_use]
pub fn normalise(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max == min {
        return vec![0.0; values.len()];
    }
    let range = max - min;
    values.iter().map(|value| (value - min) / range).collect()
}

/// Score every vehicle against an order whose pickup sits at `pickup` and
/// whose own leg measures `path_order` kilometres.
///
/// Candidates are returned in input order.
///
/// # Errors
/// Returns [`UnknownLocation`] as soon as a vehicle's current position is
/// missing from `locations`; no vehicle is skipped.
#[expect(
    clippy::float_arithmetic,
    reason = "trip distance and weighted score are floating-point sums"
)]
pub fn score_candidates<'v>(
    vehicles: &'v [Vehicle],
    pickup: Coord<f64>,
    path_order: f64,
    locations: &LocationTable,
    weights: ScoreWeights,
) -> Result<Vec<ScoredCandidate<'v>>, UnknownLocation> {
    let mut distances = Vec::with_capacity(vehicles.len());
    let mut costs = Vec::with_capacity(vehicles.len());
    for vehicle in vehicles {
        let position = locations.lookup(&vehicle.current_position)?;
        let distance_to_pickup = haversine_km(position, pickup);
        distances.push(distance_to_pickup);
        costs.push(travel_cost(distance_to_pickup + path_order, vehicle.cost_per_km));
    }

    let norm_distances = normalise(&distances);
    let norm_costs = normalise(&costs);

    let candidates = vehicles
        .iter()
        .zip(distances)
        .zip(costs)
        .zip(norm_distances.into_iter().zip(norm_costs))
        .map(
            |(((vehicle, distance_to_pickup), estimated_cost), (norm_distance, norm_cost))| {
                ScoredCandidate {
                    vehicle,
                    distance_to_pickup,
                    trip_distance: distance_to_pickup + path_order,
                    estimated_cost,
                    norm_distance,
                    norm_cost,
                    score: weights.distance * norm_distance + weights.cost * norm_cost,
                }
            },
        )
        .collect();
    Ok(candidates)
}

/// Return the candidate with the lowest score.
///
/// Exact ties keep the candidate that appears first.
#[must_use]
pub fn select_best<'c, 'v>(
    candidates: &'c [ScoredCandidate<'v>],
) -> Option<&'c ScoredCandidate<'v>> {
    let mut best: Option<&ScoredCandidate<'v>> = None;
    for candidate in candidates {
        match best {
            Some(current) if candidate.score >= current.score => {}
            _ => best = Some(candidate),
        }
    }
    best
}
