//! Event and action creators.
//!
//! A creator builds the payload fields of an event or action; the model
//! injects the discriminant tag. This module enforces that contract:
//! - `validate_payload` checks a creator's raw return value at call time
//! - `WrappedCreator` invokes, validates, and tags in one step
//! - `CreatorRegistry` holds the wrapped creators for one kind, immutable
//!   after model construction

mod error;
mod registry;
mod validate;

pub use error::CreatorError;
pub use registry::{CreatorFn, CreatorRegistry, WrappedCreator};
pub use validate::validate_payload;

use std::fmt;

/// Which creator family a registry belongs to.
///
/// Used only to distinguish the two registries in diagnostics; the
/// creator contract is identical for both.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CreatorKind {
    Event,
    Action,
}

impl fmt::Display for CreatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Event => write!(f, "event"),
            Self::Action => write!(f, "action"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_displays_lowercase_family_name() {
        assert_eq!(CreatorKind::Event.to_string(), "event");
        assert_eq!(CreatorKind::Action.to_string(), "action");
    }
}
