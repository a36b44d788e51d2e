//! The model façade.
//!
//! A model bundles one machine definition's initial context, its wrapped
//! event/action creators, and the assign/reset helpers, and forwards
//! machine configurations to an external engine. It is created once and
//! never mutated afterwards, so it is safe to share by reference across
//! threads without locking.

mod builder;
mod error;

pub use builder::ModelBuilder;
pub use error::ModelBuildError;

use crate::assign::{AssignAction, Assigner};
use crate::core::Context;
use crate::creator::{CreatorKind, CreatorRegistry};
use crate::machine::{Engine, MachineConfig, MachineImplementations};

/// The façade bundling initial context, creators, and assign/reset helpers
/// for one machine definition.
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use serde_json::json;
/// use statemodel::Model;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Counter {
///     count: i64,
/// }
///
/// let model = Model::builder(Counter { count: 0 })
///     .action("increment", |args| json!({ "by": args[0] }))
///     .build()
///     .unwrap();
///
/// let action = model.actions().create("increment", &[json!(5)]).unwrap();
/// assert_eq!(action.event_type(), "increment");
/// assert_eq!(action.get("by"), Some(&json!(5)));
/// ```
pub struct Model<C: Context> {
    initial_context: C,
    events: CreatorRegistry,
    actions: CreatorRegistry,
}

impl<C: Context> Model<C> {
    /// Create a model with no creators.
    pub fn new(initial_context: C) -> Self {
        Self {
            initial_context,
            events: CreatorRegistry::new(CreatorKind::Event),
            actions: CreatorRegistry::new(CreatorKind::Action),
        }
    }

    /// Start a [`ModelBuilder`] for a model with creators.
    pub fn builder(initial_context: C) -> ModelBuilder<C> {
        ModelBuilder::new(initial_context)
    }

    pub(crate) fn from_parts(
        initial_context: C,
        events: CreatorRegistry,
        actions: CreatorRegistry,
    ) -> Self {
        Self {
            initial_context,
            events,
            actions,
        }
    }

    /// The machine's initial context, by value.
    ///
    /// Handing out a clone keeps the stored initial value out of reach:
    /// whatever a caller later does to the returned context cannot corrupt
    /// what [`reset`](Self::reset) restores.
    pub fn initial_context(&self) -> C {
        self.initial_context.clone()
    }

    /// The wrapped event creators. Empty when none were registered.
    pub fn events(&self) -> &CreatorRegistry {
        &self.events
    }

    /// The wrapped action creators. Empty when none were registered.
    pub fn actions(&self) -> &CreatorRegistry {
        &self.actions
    }

    /// Build an assign instruction applicable under any event.
    ///
    /// ```rust
    /// use serde::{Deserialize, Serialize};
    /// use serde_json::json;
    /// use statemodel::{Model, PropertyMap};
    ///
    /// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    /// struct Counter {
    ///     count: i64,
    /// }
    ///
    /// let model = Model::new(Counter { count: 0 });
    /// let clear = model.assign(PropertyMap::new().set("count", 0));
    /// assert_eq!(clear.event_filter(), None);
    /// ```
    pub fn assign(&self, recipe: impl Into<Assigner<C>>) -> AssignAction<C> {
        AssignAction::new(recipe.into(), None)
    }

    /// Build an assign instruction restricted to one event type.
    ///
    /// The filter is attached verbatim, whether or not any declared event
    /// ever carries that type; the interpreter resolves that. No runtime
    /// narrowing exists either: the recipe receives whatever event the
    /// interpreter passes and must tolerate or assume events matching the
    /// filter.
    pub fn assign_when(
        &self,
        event_type: impl Into<String>,
        recipe: impl Into<Assigner<C>>,
    ) -> AssignAction<C> {
        AssignAction::new(recipe.into(), Some(event_type.into()))
    }

    /// Build an instruction restoring the captured initial context.
    ///
    /// Equivalent to an unfiltered whole-context replacement returning the
    /// initial value, regardless of prior context state.
    pub fn reset(&self) -> AssignAction<C> {
        let initial = self.initial_context.clone();
        AssignAction::new(Assigner::replace(move |_, _| initial.clone()), None)
    }

    /// Forward a configuration to the engine's machine-construction entry
    /// point.
    ///
    /// The model merges in nothing of its own beyond defaulting the
    /// config's context to its initial context when the config does not
    /// specify one. Engine errors propagate verbatim.
    ///
    /// # Errors
    ///
    /// Whatever the engine reports for configurations it rejects.
    pub fn create_machine<E>(
        &self,
        engine: &E,
        mut config: MachineConfig<C>,
        implementations: Option<MachineImplementations<C>>,
    ) -> Result<E::Machine, E::Error>
    where
        E: Engine<C>,
    {
        if config.context.is_none() {
            config.context = Some(self.initial_context.clone());
        }
        engine.create_machine(config, implementations)
    }
}

impl<C: Context> Clone for Model<C> {
    fn clone(&self) -> Self {
        Self {
            initial_context: self.initial_context.clone(),
            events: self.events.clone(),
            actions: self.actions.clone(),
        }
    }
}
