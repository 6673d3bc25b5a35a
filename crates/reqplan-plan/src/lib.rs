//! Validation plan format and runtime types for Reqplan.
//!
//! This crate contains:
//! - Check instruction definitions (the tagged variants of one unit of
//!   validation logic)
//! - The plan arena and per-run registry (`PlanSet`)
//! - A human-readable plan dump for debugging and CLI output

pub mod plan;

// Re-export commonly used items at crate root
pub use plan::{
    CheckInstruction, ElementTarget, PLAN_SUFFIX, PlanId, PlanSet, ValidationPlan, dump,
    plan_name,
};
