//! Integration tests for Layer 2: Runtime
//!
//! Tests loading model sets from disk and writing generated files.

mod files;
