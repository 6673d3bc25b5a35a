//! Runtime engine for executing compiled validation plans.
//!
//! The checker walks a plan's ancestor chain and instruction list against
//! a live instance value, collecting every violation path in order. It
//! never short-circuits: the caller sees every problem in one pass.

mod checker;
mod error;

#[cfg(test)]
mod checker_tests;

pub use checker::Checker;
pub use error::ValidationError;
