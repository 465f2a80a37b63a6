//! Schema-to-declaration compiler for modelgen.
//!
//! A compilation pass turns an immutable model set into a declaration tree:
//!
//! ```text
//! models ──► resolve (field types, link targets)
//!        ──► types     (XSchema / X / Xs per model)
//!        ──► accessors (XAdder … XsSetter per model)
//!        ──► module    (declare module "ronin" { … } plus shared helpers)
//!        ──► emit      (TypeScript text)
//! ```
//!
//! This crate provides:
//! - [`compile()`] / [`generate`] - Run a full pass
//! - [`ast`] - The syntax-agnostic declaration tree
//! - [`TypeScriptEmitter`] - Renders the tree as `.d.ts` source
//! - [`generate_zod_schema`] - Renders a model set as Zod validators
//!
//! # Example
//!
//! ```
//! use modelgen_compiler::{CodegenConfig, generate};
//! use modelgen_foundation::{Field, Model};
//!
//! let models = vec![
//!     Model::new("account").with_field("email", Field::string().required()),
//!     Model::new("post").with_field("author", Field::link("account")),
//! ];
//! let source = generate(&models, &CodegenConfig::default()).unwrap();
//! assert!(source.contains("declare module \"ronin\""));
//! assert!(source.contains("author: ResolveSchema<Account, TUsing, \"author\"> | null;"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod accessors;
pub mod ast;
pub mod comment;
pub mod compile;
pub mod config;
pub mod context;
pub mod emit;
pub mod helpers;
pub mod identifiers;
pub mod module;
pub mod naming;
pub mod resolve;
pub mod types;
pub mod zod;


pub use ast::{Declaration, SourceFile, TypeExpr};
pub use compile::{Compilation, compile, compile_with, generate};
pub use config::{CodegenConfig, EmitConfig};
pub use context::Context;
pub use emit::{Emit, TypeScriptEmitter, emit_typescript};
pub use identifiers::{Identifiers, QueryKind};
pub use naming::{Naming, PascalNaming};
pub use resolve::Diagnostic;
pub use zod::{generate_zod_schema, generate_zod_schema_with_config};
