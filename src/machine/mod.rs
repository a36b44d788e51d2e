//! The seam between the model layer and an external state-machine engine.
//!
//! Nothing here interprets anything. `MachineConfig` and
//! `MachineImplementations` are the values a model forwards, and `Engine`
//! is the construction entry point an engine implements to receive them.

mod config;
mod engine;
mod implementations;

pub use config::MachineConfig;
pub use engine::Engine;
pub use implementations::{ActionImplementation, EffectFn, GuardFn, MachineImplementations};
