//! Result Model
//!
//! Small immutable value types produced by the reply parser and consumed
//! by the caller: dictionary databases, matching strategies, and word
//! definitions.

mod database;
mod definition;
mod strategy;

pub use database::Database;
pub use definition::Definition;
pub use strategy::MatchingStrategy;
