//! The reaction network model.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use epinet_core::{
    Algorithm, CompartmentId, CompartmentState, ModelError, MovementPolicy, ParameterIndex,
    ReactionBinding, ReactionFamily, ReactionId, Stoichiometry,
};

use crate::validate::{validate_network, ValidationReport};
use crate::validated::{RejectedModel, ValidatedModel};

/// A complete description of a compartmental reaction system.
///
/// Shapes are fixed at construction: `reaction_count` stoichiometry and
/// binding slots (initially absent) and `parameter_count` zero-filled
/// parameters. A builder fills the slots through the `set_*` methods, then
/// [`validate`](Self::validate) or [`into_validated`](Self::into_validated)
/// checks the network before any algorithm may run against it.
///
/// # Examples
///
/// ```
/// use epinet_core::{Algorithm, ReactionBinding, ReactionFamily};
/// use epinet_model::ReactionNetworkModel;
///
/// // S -> I (infection), I -> R (recovery).
/// let mut model = ReactionNetworkModel::new(3, 2, 2, None, Algorithm::Gillespie).unwrap();
/// model.set_stoichiometry(0, 0, 1).unwrap();
/// model.set_binding(0, ReactionBinding::new(ReactionFamily::SecondOrder, [0])).unwrap();
/// model.set_stoichiometry(1, 1, 2).unwrap();
/// model.set_binding(1, ReactionBinding::new(ReactionFamily::FirstOrder, [1])).unwrap();
/// model.set_parameter(0, 0.3).unwrap();
/// model.set_parameter(1, 0.1).unwrap();
///
/// assert!(model.validate().is_ok());
/// assert_eq!(model.highest_reaction_order(1), 2);
/// ```
#[derive(Clone)]
pub struct ReactionNetworkModel {
    algorithm: Algorithm,
    compartment_count: usize,
    stoichiometry: Vec<Option<Stoichiometry>>,
    bindings: Vec<Option<ReactionBinding>>,
    parameters: Vec<f64>,
    parameter_noise_modifier: f64,
    movement: Option<Arc<dyn MovementPolicy>>,
}

impl ReactionNetworkModel {
    /// Create an empty model with the given shape.
    ///
    /// Fails with [`ModelError::InvalidArgument`] if a count does not fit
    /// the `u32` id space.
    pub fn new(
        compartment_count: usize,
        reaction_count: usize,
        parameter_count: usize,
        movement: Option<Arc<dyn MovementPolicy>>,
        algorithm: Algorithm,
    ) -> Result<Self, ModelError> {
        check_count("compartment_count", compartment_count)?;
        check_count("reaction_count", reaction_count)?;
        check_count("parameter_count", parameter_count)?;
        Ok(Self {
            algorithm,
            compartment_count,
            stoichiometry: vec![None; reaction_count],
            bindings: vec![None; reaction_count],
            parameters: vec![0.0; parameter_count],
            parameter_noise_modifier: 0.0,
            movement,
        })
    }

    /// Assemble a model from already-shaped parts. Callers have checked the
    /// shape invariants.
    pub(crate) fn from_parts(
        algorithm: Algorithm,
        compartment_count: usize,
        stoichiometry: Vec<Option<Stoichiometry>>,
        bindings: Vec<Option<ReactionBinding>>,
        parameters: Vec<f64>,
        parameter_noise_modifier: f64,
        movement: Option<Arc<dyn MovementPolicy>>,
    ) -> Self {
        debug_assert_eq!(stoichiometry.len(), bindings.len());
        Self {
            algorithm,
            compartment_count,
            stoichiometry,
            bindings,
            parameters,
            parameter_noise_modifier,
            movement,
        }
    }

    // ── Accessors ──────────────────────────────────────────────

    /// The algorithm this model is declared for.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Number of compartments; every state vector has this length.
    pub fn compartment_count(&self) -> usize {
        self.compartment_count
    }

    /// Number of reactions.
    pub fn reaction_count(&self) -> usize {
        self.stoichiometry.len()
    }

    /// Number of parameters.
    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    /// Stoichiometry of `reaction`, or `None` if absent or out of range.
    pub fn stoichiometry(&self, reaction: usize) -> Option<&Stoichiometry> {
        self.stoichiometry.get(reaction)?.as_ref()
    }

    /// Binding of `reaction`, or `None` if absent or out of range.
    pub fn binding(&self, reaction: usize) -> Option<&ReactionBinding> {
        self.bindings.get(reaction)?.as_ref()
    }

    /// Parameter `index`, or `None` if out of range.
    pub fn parameter(&self, index: usize) -> Option<f64> {
        self.parameters.get(index).copied()
    }

    /// All parameters in index order.
    pub fn parameters(&self) -> &[f64] {
        &self.parameters
    }

    /// Scale of stochastic parameter perturbation. 0.0 means no noise.
    pub fn parameter_noise_modifier(&self) -> f64 {
        self.parameter_noise_modifier
    }

    /// The movement policy, if one is attached.
    pub fn movement_policy(&self) -> Option<&Arc<dyn MovementPolicy>> {
        self.movement.as_ref()
    }

    /// Iterate over every reaction slot as `(id, stoichiometry, binding)`.
    pub fn reactions(
        &self,
    ) -> impl Iterator<Item = (ReactionId, Option<&Stoichiometry>, Option<&ReactionBinding>)> + '_
    {
        self.stoichiometry
            .iter()
            .zip(&self.bindings)
            .enumerate()
            .map(|(i, (s, b))| (ReactionId(i as u32), s.as_ref(), b.as_ref()))
    }

    /// A zero-filled state vector sized for this model.
    pub fn empty_state(&self) -> CompartmentState {
        CompartmentState::new(self.compartment_count)
    }

    // ── Builder mutators ───────────────────────────────────────

    /// Set the stoichiometry of `reaction` to `source -> destination`.
    pub fn set_stoichiometry(
        &mut self,
        reaction: usize,
        source: u32,
        destination: u32,
    ) -> Result<(), ModelError> {
        let stoich = Stoichiometry::new(source, destination);
        for compartment in [stoich.source, stoich.destination] {
            if compartment.index() >= self.compartment_count {
                return Err(ModelError::CompartmentOutOfRange {
                    compartment,
                    compartment_count: self.compartment_count,
                });
            }
        }
        let reaction_count = self.reaction_count();
        let slot = self
            .stoichiometry
            .get_mut(reaction)
            .ok_or_else(|| reaction_out_of_range(reaction, reaction_count))?;
        *slot = Some(stoich);
        Ok(())
    }

    /// Set the binding of `reaction`.
    pub fn set_binding(
        &mut self,
        reaction: usize,
        binding: ReactionBinding,
    ) -> Result<(), ModelError> {
        let reaction_count = self.reaction_count();
        let slot = self
            .bindings
            .get_mut(reaction)
            .ok_or_else(|| reaction_out_of_range(reaction, reaction_count))?;
        *slot = Some(binding);
        Ok(())
    }

    /// Set parameter `index` to `value`.
    pub fn set_parameter(&mut self, index: usize, value: f64) -> Result<(), ModelError> {
        let parameter_count = self.parameters.len();
        let slot = self
            .parameters
            .get_mut(index)
            .ok_or(ModelError::ParameterOutOfRange {
                parameter: ParameterIndex(index.min(u32::MAX as usize) as u32),
                parameter_count,
            })?;
        *slot = value;
        Ok(())
    }

    /// Set the parameter noise modifier. Must be finite.
    pub fn set_parameter_noise_modifier(&mut self, value: f64) -> Result<(), ModelError> {
        if !value.is_finite() {
            return Err(ModelError::InvalidArgument {
                name: "parameter_noise_modifier",
                reason: format!("must be finite, got {value}"),
            });
        }
        self.parameter_noise_modifier = value;
        Ok(())
    }

    /// Retag the model for a different algorithm. Requires re-validation.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// Attach or detach the movement policy.
    pub fn set_movement_policy(&mut self, movement: Option<Arc<dyn MovementPolicy>>) {
        self.movement = movement;
    }

    // ── Queries ────────────────────────────────────────────────

    /// Highest kinetic order among reactions whose stoichiometry touches
    /// `compartment`, or 0 if it takes part in none.
    ///
    /// Recomputed on every call; it only feeds the tau-leaping step size
    /// heuristic. Reactions with an absent stoichiometry or binding are
    /// skipped.
    pub fn highest_reaction_order(&self, compartment: usize) -> u32 {
        self.highest_reaction_order_by(compartment, ReactionFamily::order)
    }

    /// [`highest_reaction_order`](Self::highest_reaction_order) with a
    /// caller-supplied order classification.
    pub fn highest_reaction_order_by<F>(&self, compartment: usize, classify: F) -> u32
    where
        F: Fn(ReactionFamily) -> u32,
    {
        let Ok(compartment) = u32::try_from(compartment).map(CompartmentId) else {
            return 0;
        };
        self.reactions()
            .filter_map(|(_, stoich, binding)| match (stoich, binding) {
                (Some(s), Some(b)) if s.touches(compartment) => Some(classify(b.family)),
                _ => None,
            })
            .max()
            .unwrap_or(0)
    }

    // ── Validation ─────────────────────────────────────────────

    /// Check the structural invariants every consuming algorithm relies on.
    ///
    /// Passing is necessary, not sufficient: a valid model will not break
    /// the algorithms' bookkeeping, but may still describe meaningless
    /// dynamics. The model is never modified.
    pub fn validate(&self) -> Result<(), ValidationReport> {
        validate_network(self)
    }

    /// Pass/fail verdict of [`validate`](Self::validate).
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Validate and freeze the model.
    ///
    /// On failure the unchanged model is handed back together with the
    /// report.
    pub fn into_validated(self) -> Result<ValidatedModel, RejectedModel> {
        match validate_network(&self) {
            Ok(()) => Ok(ValidatedModel::new(self)),
            Err(report) => Err(RejectedModel {
                model: self,
                report,
            }),
        }
    }

    // ── Persistence ────────────────────────────────────────────

    /// Load a model from a file. Not implemented.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let _ = path.as_ref();
        Err(ModelError::NotImplemented {
            operation: "ReactionNetworkModel::from_file",
        })
    }

    /// Write the model to a file. Not implemented.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), ModelError> {
        let _ = path.as_ref();
        Err(ModelError::NotImplemented {
            operation: "ReactionNetworkModel::write_to_file",
        })
    }

    /// Replace this model's contents from a file. Not implemented; the model
    /// is left untouched.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), ModelError> {
        let _ = path.as_ref();
        Err(ModelError::NotImplemented {
            operation: "ReactionNetworkModel::load_from_file",
        })
    }
}

pub(crate) fn check_count(name: &'static str, count: usize) -> Result<(), ModelError> {
    if u32::try_from(count).is_err() {
        return Err(ModelError::InvalidArgument {
            name,
            reason: format!("{count} exceeds u32::MAX"),
        });
    }
    Ok(())
}

fn reaction_out_of_range(reaction: usize, reaction_count: usize) -> ModelError {
    ModelError::ReactionOutOfRange {
        reaction: ReactionId(reaction.min(u32::MAX as usize) as u32),
        reaction_count,
    }
}

impl fmt::Debug for ReactionNetworkModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReactionNetworkModel")
            .field("algorithm", &self.algorithm)
            .field("compartment_count", &self.compartment_count)
            .field("stoichiometry", &self.stoichiometry)
            .field("bindings", &self.bindings)
            .field("parameters", &self.parameters)
            .field("parameter_noise_modifier", &self.parameter_noise_modifier)
            .field("movement", &self.movement.as_ref().map(|m| m.name()))
            .finish()
    }
}
