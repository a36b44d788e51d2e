//! Context trait for machine context data.
//!
//! A context is the data payload a machine carries and mutates across
//! transitions. The model layer only ever holds the initial value; live
//! contexts are owned by the interpreter.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Marker trait for machine context types.
///
/// Any caller-defined type with the required traits is a valid context;
/// the implementation is blanket-provided.
///
/// # Required Traits
///
/// - `Clone`: the model hands the initial context out by value
/// - `PartialEq`: contexts must be comparable for reset/round-trip checks
/// - `Debug`: contexts must be debuggable for diagnostics
/// - `Serialize` + `DeserializeOwned`: per-field partial updates are applied
///   through the context's serde representation
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use statemodel::{Context, Model};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Counter {
///     count: i64,
/// }
///
/// fn define<C: Context>(initial: C) -> Model<C> {
///     Model::new(initial)
/// }
///
/// let model = define(Counter { count: 0 });
/// assert_eq!(model.initial_context(), Counter { count: 0 });
/// ```
pub trait Context:
    Clone + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

impl<T> Context for T where
    T: Clone + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
}
