//! The machine-construction seam implemented by the external engine.

use crate::core::Context;
use crate::machine::{MachineConfig, MachineImplementations};

/// Machine-construction entry point of an external state-machine engine.
///
/// The model layer forwards configurations through this trait and performs
/// no interpretation itself. Engine errors pass through `create_machine`
/// verbatim; the model neither inspects nor recovers from them.
pub trait Engine<C: Context> {
    /// Interpretable machine definition produced by the engine.
    type Machine;

    /// Error reported for configurations the engine rejects.
    type Error;

    /// Build an interpretable machine from a configuration and optional
    /// implementation bindings.
    fn create_machine(
        &self,
        config: MachineConfig<C>,
        implementations: Option<MachineImplementations<C>>,
    ) -> Result<Self::Machine, Self::Error>;
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

    // Minimal engine standing in for an interpreter: hands the config
    // back so tests can observe exactly what was forwarded.
    struct EchoEngine;

    impl Engine<Counter> for EchoEngine {
        type Machine = MachineConfig<Counter>;
        type Error = String;

        fn create_machine(
            &self,
            config: MachineConfig<Counter>,
            _implementations: Option<MachineImplementations<Counter>>,
        ) -> Result<Self::Machine, Self::Error> {
            if config.states == serde_json::Value::Null {
                return Err("machine has no states".to_string());
            }
            Ok(config)
        }
    }

    #[test]
    fn engine_receives_the_forwarded_config() {
        let config = MachineConfig::new(json!({ "idle": {} })).with_id("counter");

        let machine = EchoEngine.create_machine(config.clone(), None).unwrap();
        assert_eq!(machine, config);
    }

    #[test]
    fn engine_errors_surface_to_the_caller() {
        let config: MachineConfig<Counter> = MachineConfig::default();

        let result = EchoEngine.create_machine(config, None);
        assert_eq!(result, Err("machine has no states".to_string()));
    }
}
