//! Strongly-typed indices for compartments, reactions and parameters.

use std::fmt;

/// Identifies a compartment (a population bucket such as Susceptible).
///
/// `CompartmentId(n)` addresses the n-th entry of a
/// [`CompartmentState`](crate::CompartmentState).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompartmentId(pub u32);

impl CompartmentId {
    /// The id as a slice index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CompartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CompartmentId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a reaction within a network.
///
/// Reactions are registered in order; `ReactionId(n)` is the n-th
/// stoichiometry / binding slot of the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReactionId(pub u32);

impl ReactionId {
    /// The id as a slice index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ReactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ReactionId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Position of a coefficient in a model's flat parameter list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParameterIndex(pub u32);

impl ParameterIndex {
    /// The index as a slice index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ParameterIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ParameterIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
