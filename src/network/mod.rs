//! Network data model and input boundary.
//!
//! This module provides the records the engine computes over: variables
//! identified by stable ids, and directed signed interactions between them.
//! Records are produced by the importing/editing layer and treated as
//! immutable inputs; the engine never mutates them.

mod parse;
mod types;

pub use parse::{parse_cell, parse_decimal};
pub use types::{Interaction, Variable, VariableId};
