//! Rust source rendering of compiled plan sets.
//!
//! The compiler's output stays a structured `PlanSet`; this module is a
//! swappable renderer that prints it as compilable source. Persisting the
//! artifact is the caller's concern.

mod emitter;
mod naming;

#[cfg(test)]
mod emitter_tests;

pub use emitter::{Config, Emitter, render};
