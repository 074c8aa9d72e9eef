//! Driver selection.
//!
//! Drivers carry no position, so any available driver suits any vehicle.
//! Selection is random by default; the randomness source is injected so
//! tests can fix the seed.

use dispatch_core::Driver;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Choose one driver from the available pool.
///
/// Implementations must return `None` only for an empty pool.
pub trait DriverSelector {
    /// Pick a driver from `drivers`.
    fn select<'d>(&mut self, drivers: &'d [Driver]) -> Option<&'d Driver>;
}

/// Uniformly random selection backed by any [`Rng`].
///
/// # Examples
/// ```
/// use dispatch_assign::{DriverSelector, RandomDriverSelector};
/// use dispatch_core::Driver;
///
/// let drivers = vec![Driver::new(1, "Jana", "1"), Driver::new(2, "Peter", "2")];
/// let first = RandomDriverSelector::seeded(42).select(&drivers).map(|d| d.id);
/// let again = RandomDriverSelector::seeded(42).select(&drivers).map(|d| d.id);
/// assert_eq!(first, again);
/// ```
#[derive(Debug, Clone)]
pub struct RandomDriverSelector<R> {
    rng: R,
}

impl<R: Rng> RandomDriverSelector<R> {
    /// Wrap an existing random number generator.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomDriverSelector<ChaCha8Rng> {
    /// Deterministic selector for reproducible runs.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl RandomDriverSelector<StdRng> {
    /// Selector seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> DriverSelector for RandomDriverSelector<R> {
    fn select<'d>(&mut self, drivers: &'d [Driver]) -> Option<&'d Driver> {
        drivers.choose(&mut self.rng)
    }
}

impl<T: DriverSelector + ?Sized> DriverSelector for &mut T {
    fn select<'d>(&mut self, drivers: &'d [Driver]) -> Option<&'d Driver> {
        (**self).select(drivers)
    }
}
