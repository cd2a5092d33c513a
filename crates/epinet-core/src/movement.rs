//! The `MovementPolicy` trait and `dyn MovementPolicy` downcast support.

use crate::id::CompartmentId;
use smallvec::SmallVec;
use std::any::Any;

/// Spatial transition behaviour for spatially partitioned algorithms.
///
/// A model only stores and forwards its policy; spatial steppers call it to
/// learn how mass leaves a cell. Cells are identified by the stepper's own
/// flat cell index.
///
/// # Thread Safety
///
/// `Send + Sync` is required because a validated model, policy included, is
/// shared by reference across algorithm workers.
pub trait MovementPolicy: Any + Send + Sync + 'static {
    /// Human-readable name for debugging and logging.
    fn name(&self) -> &str;

    /// Per-unit transition rates from `cell` to each neighbouring cell for
    /// the given compartment, as `(neighbour_cell, rate)` pairs.
    ///
    /// The `SmallVec<[_; 8]>` avoids heap allocation for lattices with up
    /// to eight neighbours.
    fn neighbour_rates(&self, cell: usize, compartment: CompartmentId)
        -> SmallVec<[(usize, f64); 8]>;
}

impl dyn MovementPolicy {
    /// Attempt to downcast a trait object to a concrete policy type.
    pub fn downcast_ref<T: MovementPolicy>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}
