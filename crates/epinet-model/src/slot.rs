//! Atomic hand-off of validated models to running algorithms.
//!
//! [`ModelSlot`] holds the current `Arc<ValidatedModel>`. Workers take a
//! clone of the `Arc` at the start of a step and keep a consistent view for
//! as long as they hold it; a driver that needs a different network builds
//! and validates a new model and publishes it in one swap. Models are never
//! mutated in place while readers are active.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::validated::ValidatedModel;

/// Shared holder of the model currently in use.
pub struct ModelSlot {
    current: Mutex<Arc<ValidatedModel>>,
    generation: AtomicU64,
}

// Compile-time assertion: ModelSlot must be Send + Sync.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<ModelSlot>();
};

impl ModelSlot {
    /// Create a slot holding `model` at generation 0.
    pub fn new(model: ValidatedModel) -> Self {
        Self {
            current: Mutex::new(Arc::new(model)),
            generation: AtomicU64::new(0),
        }
    }

    /// The model currently in use.
    pub fn current(&self) -> Arc<ValidatedModel> {
        Arc::clone(&self.current.lock().unwrap())
    }

    /// Replace the current model, returning the one it displaced.
    ///
    /// Readers that already hold the previous model keep using it; new
    /// calls to [`current`](Self::current) see `model`.
    pub fn publish(&self, model: ValidatedModel) -> Arc<ValidatedModel> {
        let arc = Arc::new(model);
        let (previous, generation) = {
            let mut slot = self.current.lock().unwrap();
            let previous = std::mem::replace(&mut *slot, arc);
            // Bumped under the lock so generations follow publication order.
            (previous, self.generation.fetch_add(1, Ordering::Release) + 1)
        };
        tracing::debug!(generation, "published new reaction network model");
        previous
    }

    /// Number of models published since construction.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}

impl std::fmt::Debug for ModelSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelSlot")
            .field("generation", &self.generation())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ReactionNetworkModel;
    use epinet_core::Algorithm;

    fn frozen(compartments: usize) -> ValidatedModel {
        ReactionNetworkModel::new(compartments, 0, 0, None, Algorithm::Deterministic)
            .unwrap()
            .into_validated()
            .unwrap()
    }

    #[test]
    fn new_slot_serves_initial_model() {
        let slot = ModelSlot::new(frozen(2));
        assert_eq!(slot.generation(), 0);
        assert_eq!(slot.current().compartment_count(), 2);
    }

    #[test]
    fn publish_swaps_and_returns_previous() {
        let slot = ModelSlot::new(frozen(2));
        let held = slot.current();
        let previous = slot.publish(frozen(5));

        assert_eq!(previous.compartment_count(), 2);
        assert_eq!(held.compartment_count(), 2);
        assert_eq!(slot.current().compartment_count(), 5);
        assert_eq!(slot.generation(), 1);
    }
}
