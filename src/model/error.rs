//! Model construction errors.

use crate::creator::CreatorKind;
use thiserror::Error;

/// Errors raised while building a model's creator registries.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelBuildError {
    /// The same key was registered twice within one creator family.
    #[error("Duplicate {kind} creator registered under '{key}'")]
    DuplicateCreator { kind: CreatorKind, key: String },

    /// A creator was registered under an empty key, which can never be a
    /// valid discriminant.
    #[error("Creator keys must be non-empty ({kind} creator)")]
    EmptyCreatorKey { kind: CreatorKind },
}
