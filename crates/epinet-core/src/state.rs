//! Per-unit compartment populations.

use std::ops::{Index, IndexMut};

use crate::error::StateError;

/// Population counts for a single simulated unit (a cell, a patch, or the
/// whole population in a non-spatial model), one entry per compartment.
///
/// The length is fixed at construction. Counts are unsigned, so a state can
/// never hold a negative population; algorithms that would drive a count
/// below zero must detect that themselves before calling [`set`](Self::set).
///
/// Each state owns its buffer exclusively. [`Clone`] produces an independent
/// copy, so evolving one state never changes another.
///
/// # Examples
///
/// ```
/// use epinet_core::CompartmentState;
///
/// let mut s = CompartmentState::new(3);
/// s.set(0, 990).unwrap();
/// s.set(1, 10).unwrap();
/// assert_eq!(s.total_population(), 1000);
///
/// let snapshot = s.clone();
/// s.set(1, 11).unwrap();
/// assert_eq!(snapshot.get(1), Ok(10));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CompartmentState {
    counts: Vec<u64>,
}

// Compile-time assertion: states are handed to parallel workers.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<CompartmentState>();
};

impl CompartmentState {
    /// Create a zero-filled state with `compartment_count` entries.
    pub fn new(compartment_count: usize) -> Self {
        Self {
            counts: vec![0; compartment_count],
        }
    }

    /// Adopt an existing count buffer. The state's length is `counts.len()`.
    pub fn from_counts(counts: Vec<u64>) -> Self {
        Self { counts }
    }

    /// Number of compartments.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the state has zero compartments.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Read the count of compartment `index`.
    pub fn get(&self, index: usize) -> Result<u64, StateError> {
        self.counts
            .get(index)
            .copied()
            .ok_or(StateError::IndexOutOfRange {
                index,
                len: self.counts.len(),
            })
    }

    /// Overwrite the count of compartment `index`.
    pub fn set(&mut self, index: usize, value: u64) -> Result<(), StateError> {
        let len = self.counts.len();
        let slot = self
            .counts
            .get_mut(index)
            .ok_or(StateError::IndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Sum of all compartments. Saturates at `u64::MAX`.
    pub fn total_population(&self) -> u64 {
        self.counts
            .iter()
            .fold(0u64, |acc, &c| acc.saturating_add(c))
    }

    /// Set every compartment to zero.
    pub fn reset_to_zero(&mut self) {
        self.counts.fill(0);
    }

    /// Overwrite this state with `other`'s counts.
    ///
    /// If the lengths differ nothing is copied and `false` is returned;
    /// the state is left exactly as it was. Callers that treat a length
    /// mismatch as a bug should use [`try_copy_from`](Self::try_copy_from).
    pub fn copy_from(&mut self, other: &CompartmentState) -> bool {
        if other.len() != self.len() {
            tracing::debug!(
                target_len = self.len(),
                source_len = other.len(),
                "copy_from skipped: state lengths differ"
            );
            return false;
        }
        self.counts.copy_from_slice(&other.counts);
        true
    }

    /// Overwrite this state with `other`'s counts, failing on a length
    /// mismatch.
    pub fn try_copy_from(&mut self, other: &CompartmentState) -> Result<(), StateError> {
        if other.len() != self.len() {
            return Err(StateError::LengthMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }
        self.counts.copy_from_slice(&other.counts);
        Ok(())
    }

    /// The counts as a slice, in compartment order.
    pub fn as_slice(&self) -> &[u64] {
        &self.counts
    }

    /// The counts as a mutable slice. The length cannot be changed through it.
    pub fn as_mut_slice(&mut self) -> &mut [u64] {
        &mut self.counts
    }

    /// Iterate over the counts in compartment order.
    pub fn iter(&self) -> std::slice::Iter<'_, u64> {
        self.counts.iter()
    }
}

impl Index<usize> for CompartmentState {
    type Output = u64;

    fn index(&self, index: usize) -> &u64 {
        &self.counts[index]
    }
}

impl IndexMut<usize> for CompartmentState {
    fn index_mut(&mut self, index: usize) -> &mut u64 {
        &mut self.counts[index]
    }
}

impl<'a> IntoIterator for &'a CompartmentState {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
