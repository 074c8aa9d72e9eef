//! Behavioural tests for `AssignmentService` using rstest-bdd.

use std::cell::RefCell;

use dispatch_assign::{AssignError, AssignmentService, RandomDriverSelector};
use dispatch_core::test_support::{driver, meridian_table, order, vehicle};
use dispatch_core::{
    AssignmentResult, Driver, LocationTable, MemoryFleetStore, NO_AVAILABLE_DRIVERS,
    NO_AVAILABLE_VEHICLES, ORDER_ALREADY_PROCESSED, Order, UnknownLocation, Vehicle,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

const SEED: u64 = 17;

#[derive(Debug)]
struct AssignWorld {
    locations: RefCell<LocationTable>,
    orders: RefCell<Vec<Order>>,
    vehicles: RefCell<Vec<Vehicle>>,
    drivers: RefCell<Vec<Driver>>,
    outcome: RefCell<Option<Result<AssignmentResult, AssignError>>>,
}

impl AssignWorld {
    fn new() -> Self {
        Self {
            locations: RefCell::new(LocationTable::default()),
            orders: RefCell::new(Vec::new()),
            vehicles: RefCell::new(Vec::new()),
            drivers: RefCell::new(Vec::new()),
            outcome: RefCell::new(None),
        }
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn assign(&self, order_id: u64) {
        let store = MemoryFleetStore::with_records(
            self.orders.borrow().clone(),
            self.vehicles.borrow().clone(),
            self.drivers.borrow().clone(),
        )
        .expect("scenario ids are unique");
        let locations = self.locations.borrow();
        let mut service =
            AssignmentService::new(store, &locations, RandomDriverSelector::seeded(SEED));
        self.outcome.replace(Some(service.assign_order(order_id)));
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_outcome(&self) -> Result<AssignmentResult, AssignError> {
        self.outcome
            .borrow()
            .as_ref()
            .cloned()
            .expect("outcome should be recorded before assertions")
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_result(&self) -> AssignmentResult {
        self.expect_outcome().expect("expected assignment success")
    }

    fn push_order(&self, pickup: &str, weight: f64, processed: bool) {
        let open = order(1, pickup, "B", weight);
        let record = if processed { open.processed() } else { open };
        self.orders.borrow_mut().push(record);
    }
}

#[fixture]
fn world() -> AssignWorld {
    AssignWorld::new()
}

#[given("towns A, B and C lie 0, 100 and -50 km along a meridian")]
fn given_meridian_towns(world: &AssignWorld) {
    world
        .locations
        .replace(meridian_table(&[("A", 0.0), ("B", 100.0), ("C", -50.0)]));
}

#[given("vehicle V1 parked in A at 1.00 per km")]
fn given_v1(world: &AssignWorld) {
    world
        .vehicles
        .borrow_mut()
        .push(vehicle(1, "V1", "A", 1.0, 600.0));
}

#[given("vehicle V2 parked in C at 0.50 per km")]
fn given_v2(world: &AssignWorld) {
    world
        .vehicles
        .borrow_mut()
        .push(vehicle(2, "V2", "C", 0.5, 600.0));
}

#[given("an available driver named Jana")]
fn given_jana(world: &AssignWorld) {
    world.drivers.borrow_mut().push(driver(1, "Jana"));
}

#[given("a busy driver named Peter")]
fn given_busy_peter(world: &AssignWorld) {
    world
        .drivers
        .borrow_mut()
        .push(driver(2, "Peter").unavailable());
}

#[given("an open order from A to B weighing 500 kg")]
fn given_open_order(world: &AssignWorld) {
    world.push_order("A", 500.0, false);
}

#[given("a processed order from A to B weighing 500 kg")]
fn given_processed_order(world: &AssignWorld) {
    world.push_order("A", 500.0, true);
}

#[given("an open order from A to B weighing 5000 kg")]
fn given_heavy_order(world: &AssignWorld) {
    world.push_order("A", 5000.0, false);
}

#[given("an open order from Atlantis to B weighing 500 kg")]
fn given_lost_order(world: &AssignWorld) {
    world.push_order("Atlantis", 500.0, false);
}

#[when("the order is assigned")]
fn when_assigned(world: &AssignWorld) {
    world.assign(1);
}

#[when("order 99 is assigned")]
fn when_missing_assigned(world: &AssignWorld) {
    world.assign(99);
}

#[then("vehicle V1 and driver Jana are chosen")]
fn then_v1_and_jana(world: &AssignWorld) {
    let result = world.expect_result();
    assert_eq!(result.assigned_vehicle, "V1");
    assert_eq!(result.assigned_driver, "Jana");
}

#[then("the trip covers 100.0 km and costs 100.0")]
#[expect(
    clippy::float_cmp,
    reason = "figures are rounded to two decimals before comparison"
)]
fn then_trip_figures(world: &AssignWorld) {
    let result = world.expect_result();
    assert_eq!(result.distance_km, 100.0);
    assert_eq!(result.estimated_cost, 100.0);
}

#[then("the reasoning names V1 with distance 0.0 km and cost 100.0")]
fn then_reasoning(world: &AssignWorld) {
    assert_eq!(
        world.expect_result().reasoning,
        "Selected V1: adequate capacity, distance: 0.0 km, cost: 100.0€, weighted criteria applied."
    );
}

#[then("the order stays unassigned because it was already processed")]
fn then_already_processed(world: &AssignWorld) {
    assert_eq!(
        world.expect_result(),
        AssignmentResult::unassigned(ORDER_ALREADY_PROCESSED)
    );
}

#[then("the order stays unassigned because no vehicle is available")]
fn then_no_vehicle(world: &AssignWorld) {
    assert_eq!(
        world.expect_result(),
        AssignmentResult::unassigned(NO_AVAILABLE_VEHICLES)
    );
}

#[then("the order stays unassigned because no driver is available")]
fn then_no_driver(world: &AssignWorld) {
    assert_eq!(
        world.expect_result(),
        AssignmentResult::unassigned(NO_AVAILABLE_DRIVERS)
    );
}

#[then("the assignment fails naming Atlantis")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_unknown_location(world: &AssignWorld) {
    let err = world.expect_outcome().expect_err("expected lookup failure");
    assert_eq!(
        err,
        AssignError::UnknownLocation(UnknownLocation {
            name: "Atlantis".to_owned()
        })
    );
}

#[then("the assignment fails because order 99 was not found")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_not_found(world: &AssignWorld) {
    let err = world.expect_outcome().expect_err("expected missing order");
    assert_eq!(err, AssignError::RecordNotFound { order_id: 99 });
}

#[scenario(path = "tests/features/assignment.feature", index = 0)]
fn closer_vehicle_wins(world: AssignWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/assignment.feature", index = 1)]
fn processed_order(world: AssignWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/assignment.feature", index = 2)]
fn no_vehicle(world: AssignWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/assignment.feature", index = 3)]
fn no_driver(world: AssignWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/assignment.feature", index = 4)]
fn unknown_pickup(world: AssignWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/assignment.feature", index = 5)]
fn missing_order(world: AssignWorld) {
    let _ = world;
}
