//! Reaction families, bindings, stoichiometry and the algorithm tag.

use std::fmt;

use smallvec::SmallVec;

use crate::error::ModelError;
use crate::id::{CompartmentId, ParameterIndex};

/// Which simulation algorithm may legally consume a model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Deterministic rate-equation integration.
    Deterministic,
    /// Deterministic integration with exact stochastic jumps mixed in.
    DeterministicWithJumps,
    /// Approximate accelerated stochastic simulation (tau-leaping).
    TauLeaping,
    /// Exact stochastic simulation (Gillespie).
    Gillespie,
    /// Spatially partitioned Gillespie, stepped on a single thread.
    SpatialGillespie,
}

impl Algorithm {
    /// Whether the algorithm moves mass between spatial cells and therefore
    /// needs a [`MovementPolicy`](crate::MovementPolicy).
    pub fn is_spatial(self) -> bool {
        matches!(self, Self::SpatialGillespie)
    }

    /// Whether the algorithm samples reaction events randomly.
    pub fn is_stochastic(self) -> bool {
        !matches!(self, Self::Deterministic)
    }

    /// Short lowercase name, used in logs and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Deterministic => "deterministic",
            Self::DeterministicWithJumps => "deterministic_with_jumps",
            Self::TauLeaping => "tau_leaping",
            Self::Gillespie => "gillespie",
            Self::SpatialGillespie => "spatial_gillespie",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The rate law family a reaction belongs to.
///
/// Each variant has a stable integer code, which is the first element of a
/// raw binding (see [`ReactionBinding::from_raw`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReactionFamily {
    /// Mass action with one reactant, e.g. recovery `I -> R` (code 0).
    FirstOrder,
    /// Mass action with two reactants, e.g. infection `S + I -> 2I` (code 1).
    SecondOrder,
    /// Movement of mass between neighbouring spatial cells (code 2).
    Spatial,
    /// Mass action with three reactants (code 3).
    ThirdOrder,
}

impl ReactionFamily {
    /// Decode a family from its integer code.
    pub fn from_code(code: i64) -> Result<Self, ModelError> {
        match code {
            0 => Ok(Self::FirstOrder),
            1 => Ok(Self::SecondOrder),
            2 => Ok(Self::Spatial),
            3 => Ok(Self::ThirdOrder),
            _ => Err(ModelError::UnknownFamily { code }),
        }
    }

    /// The family's integer code.
    pub fn code(self) -> i64 {
        match self {
            Self::FirstOrder => 0,
            Self::SecondOrder => 1,
            Self::Spatial => 2,
            Self::ThirdOrder => 3,
        }
    }

    /// Kinetic order of the rate law.
    ///
    /// Spatial movement is linear in the moving population.
    pub fn order(self) -> u32 {
        match self {
            Self::FirstOrder | Self::Spatial => 1,
            Self::SecondOrder => 2,
            Self::ThirdOrder => 3,
        }
    }

    /// Whether this is the spatial movement family.
    pub fn is_spatial(self) -> bool {
        matches!(self, Self::Spatial)
    }
}

impl fmt::Display for ReactionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstOrder => f.write_str("first_order"),
            Self::SecondOrder => f.write_str("second_order"),
            Self::Spatial => f.write_str("spatial"),
            Self::ThirdOrder => f.write_str("third_order"),
        }
    }
}

/// The (source, destination) pair a reaction acts on: each firing moves one
/// unit from `source` to `destination`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Stoichiometry {
    /// Compartment losing one unit.
    pub source: CompartmentId,
    /// Compartment gaining one unit.
    pub destination: CompartmentId,
}

impl Stoichiometry {
    /// Construct from raw compartment indices.
    pub fn new(source: u32, destination: u32) -> Self {
        Self {
            source: CompartmentId(source),
            destination: CompartmentId(destination),
        }
    }

    /// Whether `compartment` is the source or the destination.
    pub fn touches(&self, compartment: CompartmentId) -> bool {
        self.source == compartment || self.destination == compartment
    }
}

/// Binds a reaction to its rate law family and the parameters the
/// consuming algorithm should pass to it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ReactionBinding {
    /// Rate law family.
    pub family: ReactionFamily,
    /// Algorithm-specific argument list, usually parameter indices.
    pub args: SmallVec<[u32; 4]>,
}

impl ReactionBinding {
    /// Create a binding from a family and its arguments.
    pub fn new(family: ReactionFamily, args: impl IntoIterator<Item = u32>) -> Self {
        Self {
            family,
            args: args.into_iter().collect(),
        }
    }

    /// Parse the flat `[family_code, arg, arg, ...]` form.
    ///
    /// # Examples
    ///
    /// ```
    /// use epinet_core::{ReactionBinding, ReactionFamily};
    ///
    /// let b = ReactionBinding::from_raw(&[1, 0]).unwrap();
    /// assert_eq!(b.family, ReactionFamily::SecondOrder);
    /// assert_eq!(b.args.as_slice(), &[0]);
    /// ```
    pub fn from_raw(raw: &[i64]) -> Result<Self, ModelError> {
        let (&code, rest) = raw.split_first().ok_or(ModelError::EmptyBinding)?;
        let family = ReactionFamily::from_code(code)?;
        let mut args = SmallVec::with_capacity(rest.len());
        for &arg in rest {
            let arg = u32::try_from(arg).map_err(|_| ModelError::InvalidArgument {
                name: "binding argument",
                reason: format!("{arg} is not a valid index"),
            })?;
            args.push(arg);
        }
        Ok(Self { family, args })
    }

    /// The flat `[family_code, arg, arg, ...]` form.
    pub fn to_raw(&self) -> Vec<i64> {
        std::iter::once(self.family.code())
            .chain(self.args.iter().map(|&a| i64::from(a)))
            .collect()
    }

    /// The argument at `position`, interpreted as a parameter index.
    pub fn parameter(&self, position: usize) -> Option<ParameterIndex> {
        self.args.get(position).copied().map(ParameterIndex)
    }
}
