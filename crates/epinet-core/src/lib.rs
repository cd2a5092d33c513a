//! Core types and traits for the epinet reaction-network framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions shared by every simulation algorithm:
//! typed indices, the per-unit [`CompartmentState`], reaction families
//! and bindings, the [`Algorithm`] tag, the [`MovementPolicy`] seam, and
//! error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod movement;
pub mod reaction;
pub mod state;

pub use error::{ModelError, StateError};
pub use id::{CompartmentId, ParameterIndex, ReactionId};
pub use movement::MovementPolicy;
pub use reaction::{Algorithm, ReactionBinding, ReactionFamily, Stoichiometry};
pub use state::CompartmentState;
