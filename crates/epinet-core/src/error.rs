//! Error types for the epinet framework.
//!
//! Organized by subsystem: per-unit state access and model construction.
//! Structural validation failures are not errors in this sense; they are
//! reported as a `ValidationReport` by the model crate.

use std::error::Error;
use std::fmt;

use crate::id::{CompartmentId, ParameterIndex, ReactionId};

/// Errors from [`CompartmentState`](crate::CompartmentState) access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StateError {
    /// A compartment index is outside `[0, len)`.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the state vector.
        len: usize,
    },
    /// Two states were required to have the same length.
    LengthMismatch {
        /// Length of the target state.
        expected: usize,
        /// Length of the source state.
        actual: usize,
    },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "compartment index {index} out of range for state of length {len}")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "state length mismatch: expected {expected}, got {actual}")
            }
        }
    }
}

impl Error for StateError {}

/// Errors from building or mutating a reaction network model.
#[derive(Clone, Debug, PartialEq)]
pub enum ModelError {
    /// A construction argument is unusable (count too large, non-finite
    /// coefficient, negative binding argument).
    InvalidArgument {
        /// Which argument.
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },
    /// A reaction index is outside `[0, reaction_count)`.
    ReactionOutOfRange {
        /// The offending reaction.
        reaction: ReactionId,
        /// Number of reactions in the model.
        reaction_count: usize,
    },
    /// A stoichiometry endpoint is outside `[0, compartment_count)`.
    CompartmentOutOfRange {
        /// The offending compartment.
        compartment: CompartmentId,
        /// Number of compartments in the model.
        compartment_count: usize,
    },
    /// A parameter index is outside `[0, parameter_count)`.
    ParameterOutOfRange {
        /// The offending parameter index.
        parameter: ParameterIndex,
        /// Number of parameters in the model.
        parameter_count: usize,
    },
    /// A raw binding names a reaction family that does not exist.
    UnknownFamily {
        /// The unrecognized family code.
        code: i64,
    },
    /// A raw binding has no family code at all.
    EmptyBinding,
    /// Declared counts disagree with the length of a supplied array.
    ShapeMismatch {
        /// Which array.
        what: &'static str,
        /// The length implied by the declared counts.
        declared: usize,
        /// The length actually supplied.
        actual: usize,
    },
    /// The operation is part of the contract but has no implementation.
    NotImplemented {
        /// Name of the missing operation.
        operation: &'static str,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { name, reason } => {
                write!(f, "invalid argument '{name}': {reason}")
            }
            Self::ReactionOutOfRange {
                reaction,
                reaction_count,
            } => write!(
                f,
                "reaction {reaction} out of range for model with {reaction_count} reactions"
            ),
            Self::CompartmentOutOfRange {
                compartment,
                compartment_count,
            } => write!(
                f,
                "compartment {compartment} out of range for model with \
                 {compartment_count} compartments"
            ),
            Self::ParameterOutOfRange {
                parameter,
                parameter_count,
            } => write!(
                f,
                "parameter {parameter} out of range for model with {parameter_count} parameters"
            ),
            Self::UnknownFamily { code } => write!(f, "unknown reaction family code {code}"),
            Self::EmptyBinding => write!(f, "reaction binding has no family code"),
            Self::ShapeMismatch {
                what,
                declared,
                actual,
            } => write!(f, "{what}: declared length {declared}, got {actual}"),
            Self::NotImplemented { operation } => {
                write!(f, "{operation} is not implemented")
            }
        }
    }
}

impl Error for ModelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_error_display_names_index_and_len() {
        let msg = StateError::IndexOutOfRange { index: 7, len: 3 }.to_string();
        assert!(msg.contains('7'));
        assert!(msg.contains('3'));
    }

    #[test]
    fn not_implemented_display() {
        let err = ModelError::NotImplemented {
            operation: "write_to_file",
        };
        assert_eq!(err.to_string(), "write_to_file is not implemented");
    }
}
