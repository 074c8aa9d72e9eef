//! Error types raised by the assignment engine and service.

use dispatch_core::UnknownLocation;
use thiserror::Error;

/// Data-integrity failures that abort an assignment.
///
/// Orders that cannot be served (already processed, no vehicles, no
/// drivers) are not errors; they produce an unassigned
/// [`AssignmentResult`](dispatch_core::AssignmentResult).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignError {
    /// An order or vehicle referenced a town missing from the location
    /// table.
    #[error(transparent)]
    UnknownLocation(#[from] UnknownLocation),
    /// The requested order does not exist in the store.
    #[error("order {order_id} does not exist")]
    RecordNotFound {
        /// Identifier that failed to resolve.
        order_id: u64,
    },
}
