//! Reusable reaction networks.
//!
//! - [`sir_config`]: S → I → R with infection and recovery.
//! - [`seir_config`]: adds an exposed stage and waning immunity.
//! - [`spatial_sir_config`]: SIR plus per-compartment movement on a ring.
//! - [`chain_model`]: three compartments, `0→1` first order, `1→2` second order.
//! - [`scenario_model`]: the two-reaction network used by the end-to-end tests.

use std::sync::Arc;

use epinet_core::{Algorithm, ReactionBinding, ReactionFamily};
use epinet_model::{NetworkConfig, ReactionNetworkModel};

use crate::RingMovement;

/// Compartment indices of the SIR fixtures.
pub const SUSCEPTIBLE: u32 = 0;
pub const INFECTED: u32 = 1;
pub const RECOVERED: u32 = 2;

/// SIR with `beta` (parameter 0) and `gamma` (parameter 1).
pub fn sir_config(algorithm: Algorithm, beta: f64, gamma: f64) -> NetworkConfig {
    NetworkConfig::new(3, algorithm)
        .reaction(
            SUSCEPTIBLE,
            INFECTED,
            ReactionBinding::new(ReactionFamily::SecondOrder, [0]),
        )
        .reaction(
            INFECTED,
            RECOVERED,
            ReactionBinding::new(ReactionFamily::FirstOrder, [1]),
        )
        .parameter(beta)
        .parameter(gamma)
}

/// SEIR with waning immunity: S→E (beta), E→I (sigma), I→R (gamma), R→S (omega).
pub fn seir_config(algorithm: Algorithm) -> NetworkConfig {
    NetworkConfig::new(4, algorithm)
        .reaction(0, 1, ReactionBinding::new(ReactionFamily::SecondOrder, [0]))
        .reaction(1, 2, ReactionBinding::new(ReactionFamily::FirstOrder, [1]))
        .reaction(2, 3, ReactionBinding::new(ReactionFamily::FirstOrder, [2]))
        .reaction(3, 0, ReactionBinding::new(ReactionFamily::FirstOrder, [3]))
        .parameter(0.4)
        .parameter(0.2)
        .parameter(0.1)
        .parameter(0.01)
}

/// SIR where every compartment also diffuses across a ring of `cells`
/// cells. Reactions 2..5 are spatial, one per compartment, using
/// parameter 2 as the movement rate.
pub fn spatial_sir_config(algorithm: Algorithm, cells: usize) -> NetworkConfig {
    let mut cfg = sir_config(algorithm, 0.3, 0.1).parameter(0.05);
    for compartment in [SUSCEPTIBLE, INFECTED, RECOVERED] {
        cfg = cfg.reaction(
            compartment,
            compartment,
            ReactionBinding::new(ReactionFamily::Spatial, [2]),
        );
    }
    cfg.movement(Arc::new(RingMovement::new(cells, 0.05)))
}

/// Three compartments with reactions `0→1` (first order) and `1→2`
/// (second order), declared for `algorithm`.
pub fn chain_model(algorithm: Algorithm) -> ReactionNetworkModel {
    NetworkConfig::new(3, algorithm)
        .reaction(0, 1, ReactionBinding::new(ReactionFamily::FirstOrder, [0]))
        .reaction(1, 2, ReactionBinding::new(ReactionFamily::SecondOrder, [0]))
        .parameter(1.0)
        .build()
        .expect("chain fixture is well-formed")
}

/// `compartment_count = 3`, `reaction_count = 2`, `parameter_count = 1`,
/// Gillespie; stoichiometry `[(0,1), (1,2)]`, raw bindings `[[1,0], [1,0]]`,
/// `parameters[0] = 0.5`.
pub fn scenario_model() -> ReactionNetworkModel {
    let mut model = ReactionNetworkModel::new(3, 2, 1, None, Algorithm::Gillespie)
        .expect("scenario shape fits");
    model
        .set_stoichiometry(0, 0, 1)
        .expect("compartments in range");
    model
        .set_stoichiometry(1, 1, 2)
        .expect("compartments in range");
    for reaction in 0..2 {
        let binding = ReactionBinding::from_raw(&[1, 0]).expect("known family");
        model
            .set_binding(reaction, binding)
            .expect("reaction in range");
    }
    model.set_parameter(0, 0.5).expect("parameter in range");
    model
}
