//! Assign instructions: opaque context-mutation descriptions.
//!
//! Building an instruction never touches a context. The model hands these
//! to the machine engine, whose executor recognizes the
//! [`ASSIGN_ACTION_TYPE`] tag and applies the recipe to its live context.
//!
//! Two recipe shapes exist:
//! - [`Assigner::replace`] computes a full replacement context
//! - [`PropertyMap`] updates individual fields from literals or functions

mod action;
mod assigner;
mod error;

pub use action::{AssignAction, ASSIGN_ACTION_TYPE};
pub use assigner::{Assigner, ComputeFn, PropertyMap, PropertyRecipe, ReplaceFn};
pub use error::AssignError;
