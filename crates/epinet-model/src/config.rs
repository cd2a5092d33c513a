//! Network configuration: the builder input for a reaction network.
//!
//! [`NetworkConfig`] is what procedural setup code (and any future file
//! loader) fills in. [`build()`](NetworkConfig::build) checks the declared
//! shape and produces a [`ReactionNetworkModel`] ready for validation.

use std::fmt;
use std::sync::Arc;

use epinet_core::{Algorithm, ModelError, MovementPolicy, ReactionBinding, Stoichiometry};

use crate::model::{check_count, ReactionNetworkModel};

/// Complete description of a reaction network before it becomes a model.
///
/// `stoichiometry[r]` and `bindings[r]` describe reaction `r`; a `None`
/// entry is carried into the model as an absent slot and reported by
/// validation.
#[derive(Clone)]
pub struct NetworkConfig {
    /// Algorithm the network is declared for.
    pub algorithm: Algorithm,
    /// Number of compartments.
    pub compartment_count: usize,
    /// One entry per reaction.
    pub stoichiometry: Vec<Option<Stoichiometry>>,
    /// One entry per reaction.
    pub bindings: Vec<Option<ReactionBinding>>,
    /// Flat parameter list.
    pub parameters: Vec<f64>,
    /// Scale of stochastic parameter perturbation. Default: 0.0.
    pub parameter_noise_modifier: f64,
    /// Spatial transition behaviour, required by spatial algorithms.
    pub movement: Option<Arc<dyn MovementPolicy>>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::new(0, Algorithm::Gillespie)
    }
}

impl NetworkConfig {
    /// An empty network over `compartment_count` compartments.
    pub fn new(compartment_count: usize, algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            compartment_count,
            stoichiometry: Vec::new(),
            bindings: Vec::new(),
            parameters: Vec::new(),
            parameter_noise_modifier: 0.0,
            movement: None,
        }
    }

    /// Append a complete reaction moving one unit from `source` to
    /// `destination`.
    pub fn reaction(mut self, source: u32, destination: u32, binding: ReactionBinding) -> Self {
        self.stoichiometry
            .push(Some(Stoichiometry::new(source, destination)));
        self.bindings.push(Some(binding));
        self
    }

    /// Append a parameter.
    pub fn parameter(mut self, value: f64) -> Self {
        self.parameters.push(value);
        self
    }

    /// Attach a movement policy.
    pub fn movement(mut self, policy: Arc<dyn MovementPolicy>) -> Self {
        self.movement = Some(policy);
        self
    }

    /// Check the declared shape and build the model.
    ///
    /// Fails if the per-reaction arrays disagree in length, a count does not
    /// fit the `u32` id space, a stoichiometry endpoint is outside the
    /// compartments, or the noise modifier is not finite. Completeness is
    /// left to validation.
    pub fn build(self) -> Result<ReactionNetworkModel, ModelError> {
        if self.bindings.len() != self.stoichiometry.len() {
            return Err(ModelError::ShapeMismatch {
                what: "bindings",
                declared: self.stoichiometry.len(),
                actual: self.bindings.len(),
            });
        }

        check_count("compartment_count", self.compartment_count)?;
        check_count("reaction_count", self.stoichiometry.len())?;
        check_count("parameter_count", self.parameters.len())?;
        if !self.parameter_noise_modifier.is_finite() {
            return Err(ModelError::InvalidArgument {
                name: "parameter_noise_modifier",
                reason: format!("must be finite, got {}", self.parameter_noise_modifier),
            });
        }
        for s in self.stoichiometry.iter().flatten() {
            for compartment in [s.source, s.destination] {
                if compartment.index() >= self.compartment_count {
                    return Err(ModelError::CompartmentOutOfRange {
                        compartment,
                        compartment_count: self.compartment_count,
                    });
                }
            }
        }

        Ok(ReactionNetworkModel::from_parts(
            self.algorithm,
            self.compartment_count,
            self.stoichiometry,
            self.bindings,
            self.parameters,
            self.parameter_noise_modifier,
            self.movement,
        ))
    }
}

impl fmt::Debug for NetworkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkConfig")
            .field("algorithm", &self.algorithm)
            .field("compartment_count", &self.compartment_count)
            .field("reactions", &self.stoichiometry.len())
            .field("parameters", &self.parameters.len())
            .field("parameter_noise_modifier", &self.parameter_noise_modifier)
            .field("movement", &self.movement.as_ref().map(|m| m.name()))
            .finish()
    }
}
