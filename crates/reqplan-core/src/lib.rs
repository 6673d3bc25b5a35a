#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for Reqplan type information.
//!
//! Two layers:
//! - **Deserialization layer**: 1:1 mapping to a schema document
//!   (`TypeDescriptor`, `FieldDescriptor`, `FieldTy`)
//! - **Graph layer**: ordered name-indexed view the plan compiler walks
//!   (`TypeGraph`)
//!
//! Descriptors are owned by the schema loader and only borrowed by the
//! compiler; nothing here is mutated after loading.

pub mod descriptor;
pub mod graph;


pub use descriptor::{FieldDescriptor, FieldTy, TypeDescriptor};
pub use graph::{SchemaError, TypeGraph};
