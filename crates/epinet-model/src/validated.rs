//! Frozen, validated models.

use std::error::Error;
use std::fmt;
use std::ops::Deref;

use crate::model::ReactionNetworkModel;
use crate::validate::ValidationReport;

/// A reaction network that passed validation and can no longer be edited.
///
/// Only obtainable through [`ReactionNetworkModel::into_validated`]. It
/// derefs to the model's read-only accessors; no setter is reachable, so
/// algorithms may share it as `Arc<ValidatedModel>` across workers without
/// the network changing underneath them.
#[derive(Clone, Debug)]
pub struct ValidatedModel {
    model: ReactionNetworkModel,
}

// Compile-time assertion: validated models are shared across workers.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<ValidatedModel>();
};

impl ValidatedModel {
    pub(crate) fn new(model: ReactionNetworkModel) -> Self {
        Self { model }
    }

    /// Unfreeze the model for editing. It must be validated again before
    /// any algorithm uses it.
    pub fn into_inner(self) -> ReactionNetworkModel {
        self.model
    }
}

impl Deref for ValidatedModel {
    type Target = ReactionNetworkModel;

    fn deref(&self) -> &ReactionNetworkModel {
        &self.model
    }
}

impl AsRef<ReactionNetworkModel> for ValidatedModel {
    fn as_ref(&self) -> &ReactionNetworkModel {
        &self.model
    }
}

/// A model that failed validation, returned unchanged with the reasons.
#[derive(Debug)]
pub struct RejectedModel {
    /// The model, exactly as it was passed in.
    pub model: ReactionNetworkModel,
    /// What is wrong with it.
    pub report: ValidationReport,
}

impl fmt::Display for RejectedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.report)
    }
}

impl Error for RejectedModel {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.report)
    }
}
