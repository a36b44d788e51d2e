//! Machine configuration forwarded to the engine.

use crate::core::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Configuration for one machine definition.
///
/// The model layer reads exactly one field: `context`, which it defaults
/// to the model's initial context when absent. Everything else, including
/// the `states` graph, is forwarded to the engine untouched.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct MachineConfig<C: Context> {
    /// Machine identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Name of the initial state node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<String>,

    /// Starting context. Left empty, the model supplies its initial
    /// context when the config passes through `create_machine`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<C>,

    /// State and transition graph, opaque to the model layer.
    #[serde(default)]
    pub states: Value,
}

impl<C: Context> MachineConfig<C> {
    /// Create a configuration around a state graph.
    pub fn new(states: Value) -> Self {
        Self {
            states,
            ..Self::default()
        }
    }

    /// Set the machine identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the initial state node name.
    pub fn with_initial(mut self, initial: impl Into<String>) -> Self {
        self.initial = Some(initial.into());
        self
    }

    /// Set an explicit starting context, overriding the model's default.
    pub fn with_context(mut self, context: C) -> Self {
        self.context = Some(context);
        self
    }
}

impl<C: Context> Default for MachineConfig<C> {
    fn default() -> Self {
        Self {
            id: None,
            initial: None,
            context: None,
            states: Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Counter {
        count: i64,
    }

    #[test]
    fn fluent_setters_fill_the_config() {
        let config = MachineConfig::new(json!({ "idle": {} }))
            .with_id("counter")
            .with_initial("idle")
            .with_context(Counter { count: 1 });

        assert_eq!(config.id.as_deref(), Some("counter"));
        assert_eq!(config.initial.as_deref(), Some("idle"));
        assert_eq!(config.context, Some(Counter { count: 1 }));
        assert_eq!(config.states, json!({ "idle": {} }));
    }

    #[test]
    fn default_config_is_empty() {
        let config: MachineConfig<Counter> = MachineConfig::default();

        assert_eq!(config.id, None);
        assert_eq!(config.initial, None);
        assert_eq!(config.context, None);
        assert_eq!(config.states, Value::Null);
    }

    #[test]
    fn config_round_trips_through_serde() {
        let config = MachineConfig::new(json!({ "idle": { "on": { "START": "busy" } } }))
            .with_id("worker")
            .with_context(Counter { count: 0 });

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MachineConfig<Counter> = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }

    #[test]
    fn absent_optional_fields_are_not_serialized() {
        let config: MachineConfig<Counter> = MachineConfig::new(json!({}));

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value, json!({ "states": {} }));
    }
}
