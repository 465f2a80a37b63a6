//! modelgen - Compiles data-model schemas into typed query declarations
//!
//! This crate re-exports all layers of the modelgen system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: modelgen_runtime    — CLI, model-set loading, file output, logging
//! Layer 1: modelgen_compiler   — Declaration tree, resolvers, synthesizers, emitters
//! Layer 0: modelgen_foundation — Core types (Model, Field, FieldType, Error)
//! ```

pub use modelgen_compiler as compiler;
pub use modelgen_foundation as foundation;
pub use modelgen_runtime as runtime;
