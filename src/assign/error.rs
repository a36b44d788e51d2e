//! Assign instruction errors.

use thiserror::Error;

/// Errors raised while applying a partial-update recipe.
///
/// Partial updates go through the context's serde representation, so they
/// can fail for contexts that do not serialize to an object. Only the
/// interpreter that calls [`resolve`](crate::AssignAction::resolve) ever
/// sees these.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssignError {
    /// The context could not be serialized.
    #[error("Context serialization failed: {0}")]
    Serialization(String),

    /// The context serializes to something other than an object, so there
    /// are no named fields to update.
    #[error("Partial updates require a struct-like context (got {found})")]
    ContextNotAnObject { found: &'static str },

    /// The updated representation no longer deserializes into the context
    /// type.
    #[error("Context deserialization failed: {0}")]
    Deserialization(String),
}
