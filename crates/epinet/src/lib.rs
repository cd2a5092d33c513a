//! epinet: compartmental reaction networks for epidemic simulation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the epinet sub-crates. One network definition is shared by deterministic,
//! exact stochastic, tau-leaping and spatial algorithms; this workspace
//! provides that definition and rejects networks that are unsafe for the
//! algorithm they declare.
//!
//! # Quick start
//!
//! ```rust
//! use epinet::prelude::*;
//!
//! // SIR: S -> I at rate beta (parameter 0), I -> R at rate gamma (parameter 1).
//! let model = NetworkConfig::new(3, Algorithm::TauLeaping)
//!     .reaction(0, 1, ReactionBinding::new(ReactionFamily::SecondOrder, [0]))
//!     .reaction(1, 2, ReactionBinding::new(ReactionFamily::FirstOrder, [1]))
//!     .parameter(0.3)
//!     .parameter(0.1)
//!     .build()
//!     .unwrap();
//!
//! let model = model.into_validated().unwrap();
//! assert_eq!(model.highest_reaction_order(1), 2);
//!
//! let mut state = model.empty_state();
//! state.set(0, 990).unwrap();
//! state.set(1, 10).unwrap();
//! assert_eq!(state.total_population(), 1000);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `epinet-core` | Ids, compartment state, families, bindings, errors |
//! | [`model`] | `epinet-model` | Reaction network model, config, validation, hot swap |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`epinet-core`).
///
/// Contains [`types::CompartmentState`], reaction families and bindings,
/// the [`types::Algorithm`] tag, the [`types::MovementPolicy`] trait, and
/// error types.
pub use epinet_core as types;

/// Reaction network model and validation (`epinet-model`).
///
/// Build with [`model::NetworkConfig`] or [`model::ReactionNetworkModel`],
/// freeze with [`model::ReactionNetworkModel::into_validated`], and share
/// through [`model::ModelSlot`].
pub use epinet_model as model;

/// Common imports for typical epinet usage.
///
/// ```rust
/// use epinet::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use epinet_core::{
        Algorithm, CompartmentId, CompartmentState, MovementPolicy, ReactionBinding,
        ReactionFamily, ReactionId, Stoichiometry,
    };

    // Errors
    pub use epinet_core::{ModelError, StateError};

    // Model
    pub use epinet_model::{
        ModelSlot, NetworkConfig, ReactionNetworkModel, RejectedModel, ValidatedModel,
        ValidationReport, Violation,
    };
}
