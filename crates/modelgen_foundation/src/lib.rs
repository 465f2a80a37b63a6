//! Model schemas, field types, and errors for modelgen.
//!
//! This crate provides:
//! - [`Model`] - A named schema unit with typed fields
//! - [`Field`] - A single typed attribute of a model
//! - [`FieldType`] - The closed set of supported field types
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod field;
pub mod model;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use field::{Field, FieldType, LinkKind};
pub use model::{Model, SYSTEM_FIELD_SLUGS};
