//! CLI support, model-set loading, and file output for modelgen.
//!
//! This crate provides:
//! - [`load_models`] / [`save_models`] - Model-set files (JSON or `MessagePack`)
//! - [`render`] / [`write_output`] - Compile a model set and write the results
//! - [`init_logging`] - `tracing` subscriber setup for the `modelgen` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod logging;
pub mod output;
pub mod serialize;


pub use logging::init_logging;
pub use output::{
    DECLARATIONS_FILE, GeneratedFile, OutputFormat, Rendered, ZOD_FILE, render, write_output,
};
pub use serialize::{InputFormat, from_bytes, from_json, load_models, save_models, to_bytes};
