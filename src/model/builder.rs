//! Builder for constructing models.

use crate::core::Context;
use crate::creator::{CreatorFn, CreatorKind, CreatorRegistry};
use crate::model::error::ModelBuildError;
use crate::model::Model;
use serde_json::Value;
use std::sync::Arc;

/// Builder for constructing a [`Model`] with a fluent API.
///
/// Creator maps are optional; a model built without any still exposes
/// empty registries. Registrations are validated at `build` time and
/// wrapped exactly once.
pub struct ModelBuilder<C: Context> {
    initial_context: C,
    events: Vec<(String, CreatorFn)>,
    actions: Vec<(String, CreatorFn)>,
}

impl<C: Context> ModelBuilder<C> {
    /// Create a builder around the machine's initial context.
    pub fn new(initial_context: C) -> Self {
        Self {
            initial_context,
            events: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Register an event creator under its type-key.
    pub fn event<F>(mut self, key: impl Into<String>, creator: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        self.events.push((key.into(), Arc::new(creator)));
        self
    }

    /// Register an action creator under its type-key.
    pub fn action<F>(mut self, key: impl Into<String>, creator: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        self.actions.push((key.into(), Arc::new(creator)));
        self
    }

    /// Build the model.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelBuildError`] when a key is empty or registered
    /// twice within one creator family.
    pub fn build(self) -> Result<Model<C>, ModelBuildError> {
        let Self {
            initial_context,
            events,
            actions,
        } = self;

        let events = into_registry(CreatorKind::Event, events)?;
        let actions = into_registry(CreatorKind::Action, actions)?;

        Ok(Model::from_parts(initial_context, events, actions))
    }
}

fn into_registry(
    kind: CreatorKind,
    entries: Vec<(String, CreatorFn)>,
) -> Result<CreatorRegistry, ModelBuildError> {
    let mut registry = CreatorRegistry::new(kind);
    for (key, creator) in entries {
        if key.is_empty() {
            return Err(ModelBuildError::EmptyCreatorKey { kind });
        }
        if registry.contains(&key) {
            return Err(ModelBuildError::DuplicateCreator { kind, key });
        }
        registry.insert(key, creator);
    }
    Ok(registry)
}
