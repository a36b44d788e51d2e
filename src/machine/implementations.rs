//! Named implementation bindings handed to the engine.

use crate::assign::AssignAction;
use crate::core::{Context, EventObject};
use std::collections::HashMap;
use std::sync::Arc;

/// Type alias for opaque side-effecting action implementations.
pub type EffectFn<C> = Arc<dyn Fn(&C, &EventObject) + Send + Sync>;

/// Type alias for guard predicates.
pub type GuardFn<C> = Arc<dyn Fn(&C, &EventObject) -> bool + Send + Sync>;

/// One named action binding.
///
/// An assign instruction is a first-class action implementation: the
/// engine's executor recognizes its tag and applies it to the live
/// context, while effects stay opaque to everyone but the engine.
pub enum ActionImplementation<C: Context> {
    /// A context-mutation instruction executed by the engine.
    Assign(AssignAction<C>),
    /// A side-effecting action run by the engine.
    Effect(EffectFn<C>),
}

impl<C: Context> Clone for ActionImplementation<C> {
    fn clone(&self) -> Self {
        match self {
            Self::Assign(action) => Self::Assign(action.clone()),
            Self::Effect(f) => Self::Effect(Arc::clone(f)),
        }
    }
}

/// Implementation bindings resolved by name when the engine walks a
/// machine configuration.
pub struct MachineImplementations<C: Context> {
    actions: HashMap<String, ActionImplementation<C>>,
    guards: HashMap<String, GuardFn<C>>,
}

impl<C: Context> MachineImplementations<C> {
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
            guards: HashMap::new(),
        }
    }

    /// Bind an action implementation to a name.
    pub fn action(mut self, name: impl Into<String>, implementation: ActionImplementation<C>) -> Self {
        self.actions.insert(name.into(), implementation);
        self
    }

    /// Bind an assign instruction to a name.
    pub fn assign(self, name: impl Into<String>, action: AssignAction<C>) -> Self {
        self.action(name, ActionImplementation::Assign(action))
    }

    /// Bind a side-effecting action to a name.
    pub fn effect<F>(self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&C, &EventObject) + Send + Sync + 'static,
    {
        self.action(name, ActionImplementation::Effect(Arc::new(f)))
    }

    /// Bind a guard predicate to a name.
    pub fn guard<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&C, &EventObject) -> bool + Send + Sync + 'static,
    {
        self.guards.insert(name.into(), Arc::new(f));
        self
    }

    /// Look up an action binding.
    pub fn get_action(&self, name: &str) -> Option<&ActionImplementation<C>> {
        self.actions.get(name)
    }

    /// Look up a guard binding.
    pub fn get_guard(&self, name: &str) -> Option<&GuardFn<C>> {
        self.guards.get(name)
    }

    /// Whether no bindings were supplied.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty() && self.guards.is_empty()
    }
}

impl<C: Context> Default for MachineImplementations<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Context> Clone for MachineImplementations<C> {
    fn clone(&self) -> Self {
        Self {
            actions: self.actions.clone(),
            guards: self.guards.clone(),
        }
    }
}
