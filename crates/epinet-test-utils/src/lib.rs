//! Test utilities and fixture networks for epinet development.
//!
//! Provides mock [`MovementPolicy`] implementations and ready-made
//! networks (see [`fixtures`]) for building test scenarios.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::sync::atomic::{AtomicUsize, Ordering};

use epinet_core::{CompartmentId, MovementPolicy};
use smallvec::SmallVec;

pub use fixtures::{chain_model, scenario_model, seir_config, sir_config, spatial_sir_config};

/// Movement policy on a 1D ring of `cells` cells: every compartment moves to
/// both neighbours at the same per-unit `rate`.
pub struct RingMovement {
    pub cells: usize,
    pub rate: f64,
}

impl RingMovement {
    pub fn new(cells: usize, rate: f64) -> Self {
        Self { cells, rate }
    }
}

impl MovementPolicy for RingMovement {
    fn name(&self) -> &str {
        "ring"
    }

    fn neighbour_rates(
        &self,
        cell: usize,
        _compartment: CompartmentId,
    ) -> SmallVec<[(usize, f64); 8]> {
        let mut rates = SmallVec::new();
        if self.cells < 2 {
            return rates;
        }
        let left = (cell + self.cells - 1) % self.cells;
        let right = (cell + 1) % self.cells;
        rates.push((left, self.rate));
        if right != left {
            rates.push((right, self.rate));
        }
        rates
    }
}

/// Movement policy that records how often it is consulted and never moves
/// anything.
///
/// Uses `AtomicUsize` for the counter so it satisfies `Sync`.
pub struct CountingMovement {
    calls: AtomicUsize,
}

impl CountingMovement {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    /// How many times `neighbour_rates()` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Default for CountingMovement {
    fn default() -> Self {
        Self::new()
    }
}

impl MovementPolicy for CountingMovement {
    fn name(&self) -> &str {
        "counting"
    }

    fn neighbour_rates(
        &self,
        _cell: usize,
        _compartment: CompartmentId,
    ) -> SmallVec<[(usize, f64); 8]> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        SmallVec::new()
    }
}
