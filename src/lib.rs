//! Statemodel: A typed model layer for state machine definitions
//!
//! Statemodel sits in front of a state-machine engine. It bundles a
//! machine's initial context, a validated registry of event and action
//! creators, and helpers that build context-mutation instructions, then
//! forwards machine configurations to the engine. It produces
//! descriptions (plain data) and never performs a transition itself.
//!
//! # Core Concepts
//!
//! - **Context**: caller-defined machine data via the `Context` trait
//! - **Creators**: functions building message payloads; the model injects
//!   the `type` discriminant and enforces that creators never supply it
//! - **Assign instructions**: opaque context-mutation recipes executed
//!   only by the machine interpreter
//!
//! # Example
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_json::json;
//! use statemodel::{EventObject, Model, PropertyMap};
//!
//! #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
//! struct Counter {
//!     count: i64,
//! }
//!
//! let model = Model::builder(Counter { count: 0 })
//!     .action("increment", |args| json!({ "by": args[0] }))
//!     .build()
//!     .unwrap();
//!
//! // Wrapped creators tag their payloads with the registry key.
//! let action = model.actions().create("increment", &[json!(5)]).unwrap();
//! assert_eq!(action.event_type(), "increment");
//! assert_eq!(action.get("by"), Some(&json!(5)));
//!
//! // Assign instructions describe mutations; only the interpreter
//! // applies them.
//! let add = model.assign_when("increment", PropertyMap::new().compute(
//!     "count",
//!     |ctx: &Counter, evt: &EventObject| {
//!         json!(ctx.count + evt.get("by").and_then(|v| v.as_i64()).unwrap_or(0))
//!     },
//! ));
//! let next = add.resolve(&model.initial_context(), &action).unwrap();
//! assert_eq!(next, Counter { count: 5 });
//! ```

pub mod assign;
pub mod core;
pub mod creator;
pub mod machine;
pub mod model;

// Re-export commonly used types
pub use assign::{AssignAction, AssignError, Assigner, PropertyMap, ASSIGN_ACTION_TYPE};
pub use core::{ActionObject, Context, EventObject};
pub use creator::{validate_payload, CreatorError, CreatorKind, CreatorRegistry, WrappedCreator};
pub use machine::{ActionImplementation, Engine, MachineConfig, MachineImplementations};
pub use model::{Model, ModelBuildError, ModelBuilder};
