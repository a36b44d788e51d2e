//! The assign instruction: an opaque context-mutation description.

use crate::assign::{AssignError, Assigner, PropertyRecipe};
use crate::core::{json_kind, Context, EventObject};
use serde_json::Value;

/// Action type tag carried by every assign instruction, letting an engine
/// executor distinguish it from other action kinds.
pub const ASSIGN_ACTION_TYPE: &str = "statemodel.assign";

/// An opaque context-mutation instruction.
///
/// The instruction holds a recipe and an optional event-type filter; it
/// never holds a context and never mutates anything itself. The machine
/// interpreter is the only component that applies it, by checking
/// [`applies_to`](Self::applies_to) and then calling
/// [`resolve`](Self::resolve) against its live context.
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use serde_json::json;
/// use statemodel::{EventObject, Model, PropertyMap};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Counter {
///     count: i64,
/// }
///
/// let model = Model::new(Counter { count: 0 });
/// let add = model.assign(PropertyMap::new().compute("count", |ctx: &Counter, evt| {
///     json!(ctx.count + evt.get("by").and_then(|v| v.as_i64()).unwrap_or(0))
/// }));
///
/// // What the interpreter does with the instruction:
/// let event: EventObject =
///     serde_json::from_value(json!({ "type": "increment", "by": 5 })).unwrap();
/// assert!(add.applies_to(&event));
/// let next = add.resolve(&Counter { count: 0 }, &event).unwrap();
/// assert_eq!(next, Counter { count: 5 });
/// ```
pub struct AssignAction<C: Context> {
    assigner: Assigner<C>,
    event_filter: Option<String>,
}

impl<C: Context> AssignAction<C> {
    pub(crate) fn new(assigner: Assigner<C>, event_filter: Option<String>) -> Self {
        Self {
            assigner,
            event_filter,
        }
    }

    /// The action-kind tag, always [`ASSIGN_ACTION_TYPE`].
    pub fn action_type(&self) -> &'static str {
        ASSIGN_ACTION_TYPE
    }

    /// The event-type filter, if one was attached.
    pub fn event_filter(&self) -> Option<&str> {
        self.event_filter.as_deref()
    }

    /// Whether the instruction is applicable under the given event.
    ///
    /// An unfiltered instruction applies to any event. The filter is
    /// descriptive: the interpreter must consult it and skip instructions
    /// whose filter does not match the current event's type. Building the
    /// instruction never filtered anything.
    pub fn applies_to(&self, event: &EventObject) -> bool {
        self.event_filter
            .as_deref()
            .is_none_or(|filter| filter == event.event_type())
    }

    /// Apply the recipe to a context, producing the next context value.
    ///
    /// This is the executor-facing entry point; the model layer itself
    /// never calls it. Replacement recipes run directly. Per-field recipes
    /// are evaluated against the context as it was before the instruction
    /// ran, then merged through the context's serde representation.
    ///
    /// `resolve` does not consult the event filter; gating on
    /// [`applies_to`](Self::applies_to) is the interpreter's job.
    ///
    /// # Errors
    ///
    /// Returns an [`AssignError`] when a partial update cannot be applied
    /// through the context's serde representation.
    pub fn resolve(&self, context: &C, event: &EventObject) -> Result<C, AssignError> {
        match &self.assigner {
            Assigner::Replace(f) => Ok(f(context, event)),
            Assigner::Properties(map) => {
                let mut repr = serde_json::to_value(context)
                    .map_err(|e| AssignError::Serialization(e.to_string()))?;
                let Value::Object(fields) = &mut repr else {
                    return Err(AssignError::ContextNotAnObject {
                        found: json_kind(&repr),
                    });
                };
                for (field, recipe) in map.entries() {
                    let value = match recipe {
                        PropertyRecipe::Literal(value) => value.clone(),
                        PropertyRecipe::Computed(f) => f(context, event),
                    };
                    fields.insert(field.clone(), value);
                }
                serde_json::from_value(repr)
                    .map_err(|e| AssignError::Deserialization(e.to_string()))
            }
        }
    }
}

impl<C: Context> Clone for AssignAction<C> {
    fn clone(&self) -> Self {
        Self {
            assigner: self.assigner.clone(),
            event_filter: self.event_filter.clone(),
        }
    }
}
