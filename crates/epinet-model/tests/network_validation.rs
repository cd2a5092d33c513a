//! Integration test: structural validation across algorithm tags.
//!
//! Builds the reference networks from `epinet-test-utils`, checks that
//! complete networks pass under every algorithm they are legal for, and
//! that incomplete or tau-leaping-with-spatial networks are rejected with
//! the exact violations.

use std::sync::Arc;

use epinet_core::{Algorithm, MovementPolicy, ReactionBinding, ReactionFamily, ReactionId};
use epinet_model::{ReactionNetworkModel, Violation};
use epinet_test_utils::fixtures::{INFECTED, RECOVERED, SUSCEPTIBLE};
use epinet_test_utils::{
    chain_model, scenario_model, seir_config, sir_config, spatial_sir_config, CountingMovement,
};
use proptest::prelude::*;

// ── End-to-end scenario ──────────────────────────────────────────────

#[test]
fn scenario_validates_then_flips_when_retagged_spatial_leap() {
    let mut model = scenario_model();
    assert!(model.is_valid());
    assert_eq!(model.parameter(0), Some(0.5));

    model.set_algorithm(Algorithm::TauLeaping);
    model
        .set_binding(0, ReactionBinding::from_raw(&[2, 0]).unwrap())
        .unwrap();

    let report = model.validate().unwrap_err();
    assert_eq!(
        report.violations(),
        &[Violation::SpatialReactionInLeapModel {
            reaction: ReactionId(0)
        }]
    );
}

// ── Completeness ─────────────────────────────────────────────────────

#[test]
fn two_reactions_with_one_incomplete_fails() {
    let mut model = ReactionNetworkModel::new(3, 2, 1, None, Algorithm::Gillespie).unwrap();
    model.set_stoichiometry(0, 0, 1).unwrap();
    model
        .set_binding(0, ReactionBinding::new(ReactionFamily::FirstOrder, [0]))
        .unwrap();

    let report = model.validate().unwrap_err();
    assert!(!model.is_valid());
    assert!(report.contains(&Violation::MissingBinding {
        reaction: ReactionId(1)
    }));
    assert!(report.contains(&Violation::MissingStoichiometry {
        reaction: ReactionId(1)
    }));
}

#[test]
fn half_populated_reaction_fails_either_way() {
    let mut only_binding = ReactionNetworkModel::new(2, 1, 0, None, Algorithm::Gillespie).unwrap();
    only_binding
        .set_binding(0, ReactionBinding::new(ReactionFamily::FirstOrder, []))
        .unwrap();
    assert_eq!(
        only_binding.validate().unwrap_err().violations(),
        &[Violation::MissingStoichiometry {
            reaction: ReactionId(0)
        }]
    );

    let mut only_stoich = ReactionNetworkModel::new(2, 1, 0, None, Algorithm::Gillespie).unwrap();
    only_stoich.set_stoichiometry(0, 1, 0).unwrap();
    assert_eq!(
        only_stoich.validate().unwrap_err().violations(),
        &[Violation::MissingBinding {
            reaction: ReactionId(0)
        }]
    );
}

// ── Tau-leaping spatial exclusion ────────────────────────────────────

#[test]
fn spatial_network_rejected_for_leap_accepted_for_gillespie() {
    let leap = spatial_sir_config(Algorithm::TauLeaping, 4).build().unwrap();
    let report = leap.validate().unwrap_err();
    let spatial: Vec<_> = report
        .violations()
        .iter()
        .filter_map(|v| match v {
            Violation::SpatialReactionInLeapModel { reaction } => Some(*reaction),
            _ => None,
        })
        .collect();
    assert_eq!(spatial, vec![ReactionId(2), ReactionId(3), ReactionId(4)]);

    let mut exact = leap;
    exact.set_algorithm(Algorithm::Gillespie);
    assert!(exact.validate().is_ok());
}

#[test]
fn spatial_gillespie_needs_movement_policy() {
    let mut cfg = spatial_sir_config(Algorithm::SpatialGillespie, 4);
    assert!(cfg.clone().build().unwrap().is_valid());

    cfg.movement = None;
    let report = cfg.build().unwrap().validate().unwrap_err();
    assert_eq!(
        report.violations(),
        &[Violation::MissingMovementPolicy {
            algorithm: Algorithm::SpatialGillespie
        }]
    );
}

#[test]
fn validation_never_consults_movement_policy() {
    let policy = Arc::new(CountingMovement::new());
    let mut model = chain_model(Algorithm::SpatialGillespie);
    model.set_movement_policy(Some(Arc::clone(&policy) as Arc<dyn MovementPolicy>));
    assert!(model.is_valid());
    assert!(model.into_validated().is_ok());
    assert_eq!(policy.calls(), 0);
}

#[test]
fn non_spatial_networks_valid_under_every_algorithm() {
    for algorithm in [
        Algorithm::Deterministic,
        Algorithm::DeterministicWithJumps,
        Algorithm::TauLeaping,
        Algorithm::Gillespie,
    ] {
        assert!(sir_config(algorithm, 0.3, 0.1).build().unwrap().is_valid());
        assert!(seir_config(algorithm).build().unwrap().is_valid());
    }
}

// ── Highest reaction order ───────────────────────────────────────────

#[test]
fn highest_order_on_chain() {
    let model = chain_model(Algorithm::TauLeaping);
    assert_eq!(model.highest_reaction_order(1), 2);
    assert_eq!(model.highest_reaction_order(0), 1);
    assert_eq!(model.highest_reaction_order(2), 2);
    assert_eq!(model.highest_reaction_order(3), 0);
}

#[test]
fn highest_order_on_sir() {
    let model = sir_config(Algorithm::TauLeaping, 0.3, 0.1).build().unwrap();
    assert_eq!(model.highest_reaction_order(SUSCEPTIBLE as usize), 2);
    assert_eq!(model.highest_reaction_order(INFECTED as usize), 2);
    assert_eq!(model.highest_reaction_order(RECOVERED as usize), 1);
}

#[test]
fn highest_order_survives_freezing() {
    let frozen = chain_model(Algorithm::TauLeaping).into_validated().unwrap();
    assert_eq!(frozen.highest_reaction_order(1), 2);
    assert_eq!(frozen.empty_state().len(), frozen.compartment_count());
}

// ── Properties ───────────────────────────────────────────────────────

fn arb_family() -> impl Strategy<Value = ReactionFamily> {
    prop_oneof![
        Just(ReactionFamily::FirstOrder),
        Just(ReactionFamily::SecondOrder),
        Just(ReactionFamily::Spatial),
        Just(ReactionFamily::ThirdOrder),
    ]
}

fn arb_reactions(compartments: u32) -> impl Strategy<Value = Vec<(u32, u32, ReactionFamily)>> {
    prop::collection::vec((0..compartments, 0..compartments, arb_family()), 0..12)
}

fn build(
    algorithm: Algorithm,
    compartments: u32,
    reactions: &[(u32, u32, ReactionFamily)],
) -> ReactionNetworkModel {
    let mut model =
        ReactionNetworkModel::new(compartments as usize, reactions.len(), 1, None, algorithm)
            .unwrap();
    for (r, &(src, dst, family)) in reactions.iter().enumerate() {
        model.set_stoichiometry(r, src, dst).unwrap();
        model
            .set_binding(r, ReactionBinding::new(family, [0]))
            .unwrap();
    }
    model
}

proptest! {
    #[test]
    fn complete_networks_valid_for_gillespie(reactions in arb_reactions(5)) {
        prop_assert!(build(Algorithm::Gillespie, 5, &reactions).is_valid());
    }

    #[test]
    fn leap_verdict_matches_spatial_presence(reactions in arb_reactions(5)) {
        let model = build(Algorithm::TauLeaping, 5, &reactions);
        let has_spatial = reactions.iter().any(|&(_, _, f)| f.is_spatial());
        prop_assert_eq!(model.is_valid(), !has_spatial);
    }

    #[test]
    fn highest_order_is_max_over_touching(reactions in arb_reactions(5), c in 0u32..6) {
        let model = build(Algorithm::Gillespie, 5, &reactions);
        let expected = reactions
            .iter()
            .filter(|&&(src, dst, _)| src == c || dst == c)
            .map(|&(_, _, f)| f.order())
            .max()
            .unwrap_or(0);
        prop_assert_eq!(model.highest_reaction_order(c as usize), expected);
    }
}
