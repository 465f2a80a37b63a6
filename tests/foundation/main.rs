//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Model, Field, FieldType, and Error.

mod errors;
mod models;
