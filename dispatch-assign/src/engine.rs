//! The assignment engine.
//!
//! [`AssignmentEngine::assign`] applies the short-circuit policy, scores the
//! eligible vehicles against the order and pairs the winner with a driver.
//! The engine reads its inputs and never mutates them; it does not mark the
//! order processed or the vehicle busy.

use dispatch_core::{
    AssignmentResult, Driver, LocationTable, NO_AVAILABLE_DRIVERS, NO_AVAILABLE_VEHICLES,
    ORDER_ALREADY_PROCESSED, Order, UnknownLocation, Vehicle, haversine_km, round2,
};
use geo::Coord;

use crate::{
    AssignError, DriverSelector, ScoreWeights, ScoredCandidate, score_candidates, select_best,
};

/// Pairs an order with the best-scoring vehicle and a driver.
///
/// The engine borrows a shared [`LocationTable`] and owns its driver
/// selector. Build one engine per thread when assigning concurrently.
///
/// # Examples
/// ```
/// use dispatch_assign::{AssignmentEngine, RandomDriverSelector};
/// use dispatch_core::{Driver, LocationTable, Order, Vehicle};
/// use jiff::civil::date;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let table = LocationTable::from_entries([
///     ("Nitra", 48.3069, 18.0864),
///     ("Trnava", 48.3774, 17.5872),
/// ])?;
/// let order = Order::new(1, "ACME", "Nitra", "Trnava", 450.0, date(2025, 3, 14))?;
/// let vehicles = [Vehicle::new(1, "NR-123AB", "van", 600.0, 0.8, "Nitra")?];
/// let drivers = [Driver::new(1, "Jana", "+421900111222")];
///
/// let mut engine = AssignmentEngine::new(&table, RandomDriverSelector::seeded(7));
/// let result = engine.assign(&order, &vehicles, &drivers)?;
/// assert_eq!(result.assigned_vehicle, "NR-123AB");
/// assert_eq!(result.assigned_driver, "Jana");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AssignmentEngine<'t, D> {
    locations: &'t LocationTable,
    weights: ScoreWeights,
    driver_selector: D,
}

impl<'t, D: DriverSelector> AssignmentEngine<'t, D> {
    /// Construct an engine with the default 0.7 / 0.3 weighting.
    #[must_use]
    pub fn new(locations: &'t LocationTable, driver_selector: D) -> Self {
        Self::with_weights(locations, driver_selector, ScoreWeights::default())
    }

    /// Construct an engine with explicit weights.
    #[must_use]
    pub const fn with_weights(
        locations: &'t LocationTable,
        driver_selector: D,
        weights: ScoreWeights,
    ) -> Self {
        Self {
            locations,
            weights,
            driver_selector,
        }
    }

    /// The location table used for lookups.
    #[must_use]
    pub const fn locations(&self) -> &'t LocationTable {
        self.locations
    }

    /// The weights applied to normalised distance and cost.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Assign a vehicle and a driver to `order`.
    ///
    /// `vehicles` and `drivers` must already be filtered for eligibility.
    /// The checks below run in order and the first match returns an
    /// unassigned result:
    ///
    /// 1. the order is already processed;
    /// 2. no vehicle is eligible;
    /// 3. no driver is available.
    ///
    /// # Errors
    /// Returns [`AssignError::UnknownLocation`] if the pickup, the delivery
    /// or any vehicle position is missing from the location table.
    pub fn assign(
        &mut self,
        order: &Order,
        vehicles: &[Vehicle],
        drivers: &[Driver],
    ) -> Result<AssignmentResult, AssignError> {
        if let Some(reasoning) = short_circuit(order, vehicles, drivers) {
            log::debug!("order {} not assigned: {reasoning}", order.id);
            return Ok(AssignmentResult::unassigned(reasoning));
        }

        let leg = self.order_leg(order)?;
        let candidates = self.score(order, vehicles, &leg)?;
        let Some(best) = select_best(&candidates) else {
            return Ok(AssignmentResult::unassigned(NO_AVAILABLE_VEHICLES));
        };
        let Some(driver) = self.driver_selector.select(drivers) else {
            return Ok(AssignmentResult::unassigned(NO_AVAILABLE_DRIVERS));
        };

        log::info!(
            "order {} assigned to {} driven by {} (score {:.3})",
            order.id,
            best.vehicle.license_plate,
            driver.name,
            best.score
        );
        Ok(build_result(best, driver))
    }

    /// Score `vehicles` for `order` and sort them best first.
    ///
    /// The sort is stable, so exactly tied vehicles keep their input order.
    /// Unlike [`AssignmentEngine::assign`], no short-circuit policy applies.
    ///
    /// # Errors
    /// Returns [`AssignError::UnknownLocation`] for any missing town.
    pub fn rank<'v>(
        &self,
        order: &Order,
        vehicles: &'v [Vehicle],
    ) -> Result<Vec<ScoredCandidate<'v>>, AssignError> {
        let leg = self.order_leg(order)?;
        let mut candidates = self.score(order, vehicles, &leg)?;
        candidates.sort_by(|a, b| a.score.total_cmp(&b.score));
        Ok(candidates)
    }

    fn order_leg(&self, order: &Order) -> Result<OrderLeg, AssignError> {
        let pickup = self.resolve(order, &order.pickup_addr)?;
        let delivery = self.resolve(order, &order.delivery_addr)?;
        Ok(OrderLeg {
            pickup,
            path_km: haversine_km(pickup, delivery),
        })
    }

    fn score<'v>(
        &self,
        order: &Order,
        vehicles: &'v [Vehicle],
        leg: &OrderLeg,
    ) -> Result<Vec<ScoredCandidate<'v>>, AssignError> {
        let candidates =
            score_candidates(vehicles, leg.pickup, leg.path_km, self.locations, self.weights)
                .map_err(|err| unknown_location(order, err))?;
        for candidate in &candidates {
            log::debug!(
                "order {}: {} distance {:.2} km, cost {:.2}, score {:.4}",
                order.id,
                candidate.vehicle.license_plate,
                candidate.distance_to_pickup,
                candidate.estimated_cost,
                candidate.score
            );
        }
        Ok(candidates)
    }

    fn resolve(&self, order: &Order, name: &str) -> Result<Coord<f64>, AssignError> {
        self.locations
            .lookup(name)
            .map_err(|err| unknown_location(order, err))
    }
}

/// Pickup position and pickup-to-delivery distance of an order.
struct OrderLeg {
    pickup: Coord<f64>,
    path_km: f64,
}

fn short_circuit(order: &Order, vehicles: &[Vehicle], drivers: &[Driver]) -> Option<&'static str> {
    if order.status {
        Some(ORDER_ALREADY_PROCESSED)
    } else if vehicles.is_empty() {
        Some(NO_AVAILABLE_VEHICLES)
    } else if drivers.is_empty() {
        Some(NO_AVAILABLE_DRIVERS)
    } else {
        None
    }
}

fn unknown_location(order: &Order, err: UnknownLocation) -> AssignError {
    log::warn!("order {} references {err}", order.id);
    AssignError::from(err)
}

fn build_result(best: &ScoredCandidate<'_>, driver: &Driver) -> AssignmentResult {
    let plate = &best.vehicle.license_plate;
    AssignmentResult {
        assigned_vehicle: plate.clone(),
        assigned_driver: driver.name.clone(),
        estimated_cost: round2(best.estimated_cost),
        distance_km: round2(best.trip_distance),
        reasoning: format!(
            "Selected {plate}: adequate capacity, distance: {:?} km, cost: {:?}€, weighted criteria applied.",
            round2(best.distance_to_pickup),
            round2(best.estimated_cost)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RandomDriverSelector;
    use dispatch_core::test_support::{driver, meridian_table, order, vehicle};
    use rand_chacha::ChaCha8Rng;
    use rstest::{fixture, rstest};

    type Engine<'t> = AssignmentEngine<'t, RandomDriverSelector<ChaCha8Rng>>;

    #[fixture]
    fn locations() -> LocationTable {
        meridian_table(&[("A", 0.0), ("B", 100.0), ("C", -50.0)])
    }

    fn engine(locations: &LocationTable) -> Engine<'_> {
        AssignmentEngine::new(locations, RandomDriverSelector::seeded(11))
    }

    fn fleet() -> Vec<Vehicle> {
        vec![
            vehicle(1, "V1", "A", 1.0, 600.0),
            vehicle(2, "V2", "C", 0.5, 600.0),
        ]
    }

    #[rstest]
    fn distance_outweighs_cost(locations: LocationTable) {
        let result = engine(&locations)
            .assign(&order(1, "A", "B", 500.0), &fleet(), &[driver(1, "Jana")])
            .expect("assignment succeeds");

        assert_eq!(result.assigned_vehicle, "V1");
        assert_eq!(result.assigned_driver, "Jana");
        assert_eq!(result.distance_km, 100.0);
        assert_eq!(result.estimated_cost, 100.0);
        assert_eq!(
            result.reasoning,
            "Selected V1: adequate capacity, distance: 0.0 km, cost: 100.0€, weighted criteria applied."
        );
    }

    #[rstest]
    fn processed_order_wins_over_everything(locations: LocationTable) {
        let processed = order(1, "A", "B", 500.0).processed();
        let result = engine(&locations)
            .assign(&processed, &fleet(), &[driver(1, "Jana")])
            .expect("short-circuit is not an error");
        assert_eq!(result, AssignmentResult::unassigned(ORDER_ALREADY_PROCESSED));
    }

    #[rstest]
    fn missing_vehicles_reported_before_drivers(locations: LocationTable) {
        let result = engine(&locations)
            .assign(&order(1, "A", "B", 500.0), &[], &[])
            .expect("short-circuit is not an error");
        assert_eq!(result.reasoning, NO_AVAILABLE_VEHICLES);
        assert!(!result.is_assigned());
    }

    #[rstest]
    fn missing_drivers_reported(locations: LocationTable) {
        let result = engine(&locations)
            .assign(&order(1, "A", "B", 500.0), &fleet(), &[])
            .expect("short-circuit is not an error");
        assert_eq!(result.reasoning, NO_AVAILABLE_DRIVERS);
        assert_eq!(result.distance_km, 0.0);
    }

    #[rstest]
    fn short_circuit_skips_location_lookups(locations: LocationTable) {
        let result = engine(&locations)
            .assign(&order(1, "Nowhere", "B", 1.0), &[], &[driver(1, "Jana")])
            .expect("no lookup happens before the vehicle check");
        assert_eq!(result.reasoning, NO_AVAILABLE_VEHICLES);
    }

    #[rstest]
    #[case("Nowhere", "B", "Nowhere")]
    #[case("A", "Elsewhere", "Elsewhere")]
    fn unknown_order_towns_fail(
        locations: LocationTable,
        #[case] pickup: &str,
        #[case] delivery: &str,
        #[case] missing: &str,
    ) {
        let err = engine(&locations)
            .assign(&order(1, pickup, delivery, 1.0), &fleet(), &[driver(1, "Jana")])
            .expect_err("lookup fails");
        assert_eq!(
            err,
            AssignError::UnknownLocation(UnknownLocation {
                name: missing.to_owned()
            })
        );
    }

    #[rstest]
    fn unknown_vehicle_town_aborts_instead_of_skipping(locations: LocationTable) {
        let mut vehicles = fleet();
        vehicles.push(vehicle(3, "LOST", "Atlantis", 0.1, 600.0));
        let err = engine(&locations)
            .assign(&order(1, "A", "B", 1.0), &vehicles, &[driver(1, "Jana")])
            .expect_err("Atlantis is unknown");
        assert!(matches!(
            err,
            AssignError::UnknownLocation(UnknownLocation { ref name }) if name == "Atlantis"
        ));
    }

    #[rstest]
    fn inputs_are_left_untouched(locations: LocationTable) {
        let target = order(1, "A", "B", 500.0);
        let vehicles = fleet();
        let drivers = [driver(1, "Jana")];
        let before = (target.clone(), vehicles.clone(), drivers.clone());
        engine(&locations)
            .assign(&target, &vehicles, &drivers)
            .expect("assignment succeeds");
        assert_eq!((target, vehicles, drivers), before);
    }

    #[rstest]
    fn rank_orders_best_first(locations: LocationTable) {
        let vehicles = fleet();
        let ranked = engine(&locations)
            .rank(&order(1, "A", "B", 500.0), &vehicles)
            .expect("all towns known");
        let plates: Vec<_> = ranked.iter().map(|c| c.vehicle.license_plate.as_str()).collect();
        assert_eq!(plates, vec!["V1", "V2"]);
    }

    #[rstest]
    fn cost_only_weights_flip_the_choice(locations: LocationTable) {
        let weights = ScoreWeights {
            distance: 0.0,
            cost: 1.0,
        };
        let mut engine =
            AssignmentEngine::with_weights(&locations, RandomDriverSelector::seeded(1), weights);
        let result = engine
            .assign(&order(1, "A", "B", 500.0), &fleet(), &[driver(1, "Jana")])
            .expect("assignment succeeds");
        assert_eq!(result.assigned_vehicle, "V2");
        assert_eq!(result.estimated_cost, 75.0);
        assert_eq!(result.distance_km, 150.0);
    }
}
