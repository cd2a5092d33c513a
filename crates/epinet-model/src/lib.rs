//! Reaction network model and structural validation for epinet.
//!
//! A [`ReactionNetworkModel`] is built (directly or from a
//! [`NetworkConfig`]), checked with [`validate_network`], and frozen into a
//! [`ValidatedModel`] that algorithms share read-only. [`ModelSlot`] swaps
//! validated models atomically under running workers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod model;
pub mod slot;
pub mod validate;
pub mod validated;

pub use config::NetworkConfig;
pub use model::ReactionNetworkModel;
pub use slot::ModelSlot;
pub use validate::{validate_network, ValidationReport, Violation};
pub use validated::{RejectedModel, ValidatedModel};
