//! Structural validation of reaction networks.
//!
//! [`validate_network`] runs once, after a builder has populated a model and
//! before any algorithm consumes it. Every violated invariant is collected
//! into a [`ValidationReport`] so callers and tests can see exactly what is
//! wrong rather than a bare pass/fail.

use indexmap::IndexMap;

use epinet_core::{Algorithm, ReactionId};

use crate::model::ReactionNetworkModel;

use std::error::Error;
use std::fmt;

// ── Violations ─────────────────────────────────────────────────────

/// A single violated structural invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// The reaction has no binding, so no algorithm knows its rate law.
    MissingBinding {
        /// The incomplete reaction.
        reaction: ReactionId,
    },
    /// The reaction has no stoichiometry, so no algorithm knows what it
    /// moves.
    MissingStoichiometry {
        /// The incomplete reaction.
        reaction: ReactionId,
    },
    /// A tau-leaping model contains a spatial reaction. The leap size
    /// heuristic is not derived for spatially coupled propensities.
    SpatialReactionInLeapModel {
        /// The spatial reaction.
        reaction: ReactionId,
    },
    /// A spatial algorithm was selected but no movement policy is attached.
    MissingMovementPolicy {
        /// The spatial algorithm.
        algorithm: Algorithm,
    },
}

impl Violation {
    /// The reaction this violation concerns, if it concerns one.
    pub fn reaction(&self) -> Option<ReactionId> {
        match self {
            Self::MissingBinding { reaction }
            | Self::MissingStoichiometry { reaction }
            | Self::SpatialReactionInLeapModel { reaction } => Some(*reaction),
            Self::MissingMovementPolicy { .. } => None,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBinding { reaction } => {
                write!(f, "reaction {reaction} has no binding")
            }
            Self::MissingStoichiometry { reaction } => {
                write!(f, "reaction {reaction} has no stoichiometry")
            }
            Self::SpatialReactionInLeapModel { reaction } => {
                write!(f, "reaction {reaction} is spatial, which tau-leaping cannot run")
            }
            Self::MissingMovementPolicy { algorithm } => {
                write!(f, "algorithm '{algorithm}' requires a movement policy")
            }
        }
    }
}

// ── Report ─────────────────────────────────────────────────────────

/// Every violation found by [`validate_network`], in check order.
///
/// Never empty: a network with no violations validates as `Ok(())`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// The violations, in the order the checks found them.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Whether the report contains `violation`.
    pub fn contains(&self, violation: &Violation) -> bool {
        self.violations.contains(violation)
    }

    /// Violations grouped by the reaction they concern, in first-seen
    /// order. Model-wide violations are omitted.
    pub fn by_reaction(&self) -> IndexMap<ReactionId, Vec<&Violation>> {
        let mut grouped: IndexMap<ReactionId, Vec<&Violation>> = IndexMap::new();
        for v in &self.violations {
            if let Some(reaction) = v.reaction() {
                grouped.entry(reaction).or_default().push(v);
            }
        }
        grouped
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid reaction network: ")?;
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl Error for ValidationReport {}

impl IntoIterator for ValidationReport {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

// ── Validation ─────────────────────────────────────────────────────

/// Validate a reaction network.
///
/// Checks performed, all collected rather than stopping at the first:
///
/// 1. Every reaction has a binding.
/// 2. Every reaction has a stoichiometry.
/// 3. A [`Algorithm::TauLeaping`] model has no spatial reactions.
/// 4. A spatial algorithm has a movement policy.
///
/// Shape invariants (array lengths, compartment index ranges, known family
/// codes) are enforced when the model is built and are not rechecked.
pub fn validate_network(model: &ReactionNetworkModel) -> Result<(), ValidationReport> {
    let mut violations = Vec::new();

    // 1–2. Completeness, per reaction.
    for (reaction, stoich, binding) in model.reactions() {
        if binding.is_none() {
            violations.push(Violation::MissingBinding { reaction });
        }
        if stoich.is_none() {
            violations.push(Violation::MissingStoichiometry { reaction });
        }
    }

    // 3. Tau-leaping excludes spatial reactions.
    if model.algorithm() == Algorithm::TauLeaping {
        for (reaction, _, binding) in model.reactions() {
            if binding.is_some_and(|b| b.family.is_spatial()) {
                violations.push(Violation::SpatialReactionInLeapModel { reaction });
            }
        }
    }

    // 4. Spatial algorithms need somewhere to send mass.
    if model.algorithm().is_spatial() && model.movement_policy().is_none() {
        violations.push(Violation::MissingMovementPolicy {
            algorithm: model.algorithm(),
        });
    }

    if violations.is_empty() {
        tracing::debug!(
            algorithm = %model.algorithm(),
            reactions = model.reaction_count(),
            "reaction network validated"
        );
        Ok(())
    } else {
        tracing::debug!(
            algorithm = %model.algorithm(),
            violations = violations.len(),
            "reaction network failed validation"
        );
        Err(ValidationReport { violations })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use epinet_core::{ReactionBinding, ReactionFamily};

    fn binding(family: ReactionFamily) -> ReactionBinding {
        ReactionBinding::new(family, [0])
    }

    fn complete(algorithm: Algorithm, families: &[ReactionFamily]) -> ReactionNetworkModel {
        let mut m = ReactionNetworkModel::new(2, families.len(), 1, None, algorithm).unwrap();
        for (r, &family) in families.iter().enumerate() {
            m.set_stoichiometry(r, 0, 1).unwrap();
            m.set_binding(r, binding(family)).unwrap();
        }
        m
    }

    #[test]
    fn empty_network_is_valid() {
        let m = ReactionNetworkModel::new(0, 0, 0, None, Algorithm::TauLeaping).unwrap();
        assert!(validate_network(&m).is_ok());
    }

    #[test]
    fn complete_network_is_valid() {
        let m = complete(Algorithm::Gillespie, &[ReactionFamily::FirstOrder]);
        assert!(validate_network(&m).is_ok());
    }

    #[test]
    fn missing_entries_reported_per_reaction_in_order() {
        let mut m = ReactionNetworkModel::new(2, 3, 0, None, Algorithm::Gillespie).unwrap();
        m.set_stoichiometry(0, 0, 1).unwrap();
        m.set_binding(0, binding(ReactionFamily::FirstOrder)).unwrap();
        m.set_binding(1, binding(ReactionFamily::FirstOrder)).unwrap();
        m.set_stoichiometry(2, 1, 0).unwrap();

        let report = validate_network(&m).unwrap_err();
        assert_eq!(
            report.violations(),
            &[
                Violation::MissingStoichiometry {
                    reaction: ReactionId(1)
                },
                Violation::MissingBinding {
                    reaction: ReactionId(2)
                },
            ]
        );
    }

    #[test]
    fn fully_absent_reaction_reports_both() {
        let m = ReactionNetworkModel::new(1, 1, 0, None, Algorithm::Deterministic).unwrap();
        let report = validate_network(&m).unwrap_err();
        assert_eq!(report.len(), 2);
        let grouped = report.by_reaction();
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[&ReactionId(0)].len(), 2);
    }

    #[test]
    fn spatial_reaction_rejected_under_tau_leaping() {
        let m = complete(
            Algorithm::TauLeaping,
            &[ReactionFamily::FirstOrder, ReactionFamily::Spatial],
        );
        let report = validate_network(&m).unwrap_err();
        assert_eq!(
            report.violations(),
            &[Violation::SpatialReactionInLeapModel {
                reaction: ReactionId(1)
            }]
        );
    }

    #[test]
    fn spatial_reaction_allowed_under_gillespie() {
        let m = complete(
            Algorithm::Gillespie,
            &[ReactionFamily::FirstOrder, ReactionFamily::Spatial],
        );
        assert!(validate_network(&m).is_ok());
    }

    #[test]
    fn spatial_algorithm_requires_movement_policy() {
        let m = complete(Algorithm::SpatialGillespie, &[ReactionFamily::Spatial]);
        let report = validate_network(&m).unwrap_err();
        assert_eq!(
            report.violations(),
            &[Violation::MissingMovementPolicy {
                algorithm: Algorithm::SpatialGillespie
            }]
        );
        assert!(report.by_reaction().is_empty());
    }

    #[test]
    fn report_display_lists_every_violation() {
        let m = ReactionNetworkModel::new(1, 1, 0, None, Algorithm::Gillespie).unwrap();
        let msg = validate_network(&m).unwrap_err().to_string();
        assert!(msg.contains("has no binding"));
        assert!(msg.contains("has no stoichiometry"));
    }

    #[test]
    fn validation_does_not_modify_model() {
        let m = ReactionNetworkModel::new(1, 1, 0, None, Algorithm::TauLeaping).unwrap();
        let before = format!("{m:?}");
        let _ = validate_network(&m);
        assert_eq!(format!("{m:?}"), before);
    }
}
