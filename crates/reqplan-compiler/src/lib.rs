//! Reqplan compiler: field classifier, plan compiler, and source renderer.
//!
//! This crate provides the compilation pipeline for validation plans:
//! - `classify` - field shape classification
//! - `compile` - recursive plan compilation over a type graph
//! - `codegen` - Rust source rendering of compiled plan sets

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod classify;
pub mod codegen;
pub mod compile;

pub use classify::{ElementKind, FieldShape, classify};
pub use compile::{CompileError, Compiler, compile_roots};

/// Result type for compilation operations.
pub type Result<T> = std::result::Result<T, CompileError>;
