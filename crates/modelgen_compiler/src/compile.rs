//! Top-level compilation entry points.

use modelgen_foundation::{Model, Result};

use crate::ast::SourceFile;
use crate::config::CodegenConfig;
use crate::context::Context;
use crate::emit::{Emit, TypeScriptEmitter};
use crate::naming::{Naming, PascalNaming};
use crate::resolve::Diagnostic;
use crate::{accessors, module, types};

/// The result of one compilation pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Compilation {
    /// Declarations in output order.
    pub file: SourceFile,
    /// Degraded references, ordered by model and field slug.
    pub diagnostics: Vec<Diagnostic>,
}

impl Compilation {
    /// Renders the declarations with `emitter`.
    #[must_use]
    pub fn emit(&self, emitter: &dyn Emit) -> String {
        emitter.emit(&self.file)
    }

    /// Renders the declarations as TypeScript.
    #[must_use]
    pub fn to_typescript(&self) -> String {
        self.emit(&TypeScriptEmitter::default())
    }
}

/// Compiles `models` into a declaration tree using PascalCase naming.
///
/// # Errors
///
/// Fails with `UnsupportedFieldType` if any field declares an unknown type.
/// No partial output is returned in that case.
pub fn compile(models: &[Model], config: &CodegenConfig) -> Result<Compilation> {
    compile_with(models, config, &PascalNaming)
}

/// Compiles `models` with a custom identifier synthesizer.
///
/// # Errors
///
/// Fails with `UnsupportedFieldType` if any field declares an unknown type.
pub fn compile_with(
    models: &[Model],
    config: &CodegenConfig,
    naming: &dyn Naming,
) -> Result<Compilation> {
    let ctx = Context::new(models, config, naming);

    let model_decls = models
        .iter()
        .map(|model| types::synthesize(model, ctx))
        .collect::<Result<Vec<_>>>()?;

    let mut diagnostics: Vec<Diagnostic> = model_decls
        .iter()
        .flat_map(|decls| decls.diagnostics.iter().cloned())
        .collect();
    diagnostics.sort_by(|a, b| (&a.model, &a.field).cmp(&(&b.model, &b.field)));

    let accessor_decls = models
        .iter()
        .map(|model| accessors::synthesize(model, ctx))
        .collect();

    let file = module::assemble(ctx, model_decls, accessor_decls).into_source_file();
    Ok(Compilation { file, diagnostics })
}

/// Compiles `models` and renders the result as TypeScript declarations.
///
/// # Errors
///
/// Fails with `UnsupportedFieldType` if any field declares an unknown type.
pub fn generate(models: &[Model], config: &CodegenConfig) -> Result<String> {
    Ok(compile(models, config)?.to_typescript())
}
