//! Creator contract errors.

use crate::creator::CreatorKind;
use thiserror::Error;

/// Contract violations raised when invoking a creator.
///
/// Payload shape is only known once a creator runs, so these surface
/// synchronously at call time and propagate to the invoking caller; the
/// model never recovers from them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CreatorError {
    /// The creator returned a primitive or array instead of a field mapping.
    #[error("An {kind} creator must return an object (got {found})")]
    NotAnObject {
        kind: CreatorKind,
        key: String,
        found: &'static str,
    },

    /// The creator supplied its own discriminant; the tag is reserved for
    /// the registry key.
    #[error("An {kind} creator can't return an object with a type property")]
    ReservedTypeField { kind: CreatorKind, key: String },

    /// No creator is registered under the requested key.
    #[error("No {kind} creator is registered under '{key}'")]
    UnknownCreator { kind: CreatorKind, key: String },
}
