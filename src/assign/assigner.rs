//! Context-mutation recipes.

use crate::core::{Context, EventObject};
use serde_json::Value;
use std::sync::Arc;

/// Type alias for whole-context replacement functions.
pub type ReplaceFn<C> = Arc<dyn Fn(&C, &EventObject) -> C + Send + Sync>;

/// Type alias for per-field compute functions.
pub type ComputeFn<C> = Arc<dyn Fn(&C, &EventObject) -> Value + Send + Sync>;

/// Recipe for a single field of a partial update.
pub enum PropertyRecipe<C: Context> {
    /// A literal value stored as-is.
    Literal(Value),
    /// A function computing the field from context and event.
    Computed(ComputeFn<C>),
}

impl<C: Context> Clone for PropertyRecipe<C> {
    fn clone(&self) -> Self {
        match self {
            Self::Literal(value) => Self::Literal(value.clone()),
            Self::Computed(f) => Self::Computed(Arc::clone(f)),
        }
    }
}

/// Ordered per-field partial-update recipe.
///
/// Each entry names a context field and either a literal value or a
/// function computing it. Every function sees the context as it was before
/// the instruction ran; when the same field appears twice, the later entry
/// wins.
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use serde_json::json;
/// use statemodel::{EventObject, PropertyMap};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Counter {
///     count: i64,
///     dirty: bool,
/// }
///
/// let recipe: PropertyMap<Counter> = PropertyMap::new()
///     .set("dirty", true)
///     .compute("count", |ctx: &Counter, evt: &EventObject| {
///         json!(ctx.count + evt.get("by").and_then(|v| v.as_i64()).unwrap_or(0))
///     });
///
/// assert_eq!(recipe.len(), 2);
/// ```
pub struct PropertyMap<C: Context> {
    entries: Vec<(String, PropertyRecipe<C>)>,
}

impl<C: Context> PropertyMap<C> {
    /// Create an empty recipe.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Assign a literal value to a field.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries
            .push((field.into(), PropertyRecipe::Literal(value.into())));
        self
    }

    /// Compute a field from the context and the triggering event.
    pub fn compute<F>(mut self, field: impl Into<String>, f: F) -> Self
    where
        F: Fn(&C, &EventObject) -> Value + Send + Sync + 'static,
    {
        self.entries
            .push((field.into(), PropertyRecipe::Computed(Arc::new(f))));
        self
    }

    /// Number of field entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the recipe has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entries(&self) -> &[(String, PropertyRecipe<C>)] {
        &self.entries
    }
}

impl<C: Context> Default for PropertyMap<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Context> Clone for PropertyMap<C> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

/// A context-mutation recipe, polymorphic over its two shapes.
pub enum Assigner<C: Context> {
    /// Compute a full replacement context.
    Replace(ReplaceFn<C>),
    /// Update individual fields, leaving the rest of the context untouched.
    Properties(PropertyMap<C>),
}

impl<C: Context> Assigner<C> {
    /// Wrap a whole-context replacement function.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statemodel::{Assigner, EventObject};
    ///
    /// let double: Assigner<i64> = Assigner::replace(|ctx: &i64, _: &EventObject| ctx * 2);
    /// ```
    pub fn replace<F>(f: F) -> Self
    where
        F: Fn(&C, &EventObject) -> C + Send + Sync + 'static,
    {
        Self::Replace(Arc::new(f))
    }
}

impl<C: Context> From<PropertyMap<C>> for Assigner<C> {
    fn from(map: PropertyMap<C>) -> Self {
        Self::Properties(map)
    }
}

impl<C: Context> Clone for Assigner<C> {
    fn clone(&self) -> Self {
        match self {
            Self::Replace(f) => Self::Replace(Arc::clone(f)),
            Self::Properties(map) => Self::Properties(map.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Counter {
        count: i64,
    }

    #[test]
    fn property_map_preserves_entry_order() {
        let map: PropertyMap<Counter> = PropertyMap::new()
            .set("count", 1)
            .compute("count", |_, _| json!(2));

        let fields: Vec<&str> = map.entries().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(fields, vec!["count", "count"]);
        assert_eq!(map.len(), 2);
        assert!(!map.is_empty());
    }

    #[test]
    fn literal_entries_accept_anything_into_value() {
        let map: PropertyMap<Counter> = PropertyMap::new()
            .set("count", 7)
            .set("label", "seven")
            .set("flag", true);

        assert_eq!(map.len(), 3);
        match &map.entries()[0].1 {
            PropertyRecipe::Literal(value) => assert_eq!(value, &json!(7)),
            PropertyRecipe::Computed(_) => panic!("Expected literal recipe"),
        }
    }

    #[test]
    fn replace_wraps_a_function_recipe() {
        let assigner: Assigner<Counter> =
            Assigner::replace(|ctx: &Counter, _: &EventObject| Counter {
                count: ctx.count + 1,
            });

        assert!(matches!(assigner, Assigner::Replace(_)));
    }

    #[test]
    fn property_map_converts_into_assigner() {
        let assigner: Assigner<Counter> = PropertyMap::new().set("count", 0).into();

        match assigner {
            Assigner::Properties(map) => assert_eq!(map.len(), 1),
            Assigner::Replace(_) => panic!("Expected a properties assigner"),
        }
    }

    #[test]
    fn clones_share_the_underlying_functions() {
        let assigner: Assigner<Counter> =
            Assigner::replace(|ctx: &Counter, _: &EventObject| ctx.clone());
        let cloned = assigner.clone();

        match (&assigner, &cloned) {
            (Assigner::Replace(a), Assigner::Replace(b)) => {
                assert!(Arc::ptr_eq(a, b));
            }
            _ => panic!("Expected replace assigners"),
        }
    }
}
