//! Runtime checker for executing compiled Reqplan validation plans.
//!
//! This crate provides the engine that executes plans against live
//! instance values, producing the ordered violation paths a caller can
//! surface as a single validation failure.

pub mod engine;

// Re-export commonly used items at crate root
pub use engine::{Checker, ValidationError};
