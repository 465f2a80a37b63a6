//! Rendering model sets to output files.

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use modelgen_compiler::{CodegenConfig, Diagnostic, PascalNaming, compile, generate_zod_schema};
use modelgen_foundation::{Error, ErrorKind, Model, Result};
use tracing::{debug, info, warn};

/// File holding the TypeScript declarations.
pub const DECLARATIONS_FILE: &str = "index.d.ts";

/// File holding the Zod schemas.
pub const ZOD_FILE: &str = "index.ts";

/// Which artifacts to produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// TypeScript declarations only.
    #[default]
    Declarations,
    /// Zod schemas only.
    Zod,
    /// Both.
    All,
}

impl OutputFormat {
    /// Whether declarations are produced.
    #[must_use]
    pub const fn declarations(self) -> bool {
        matches!(self, Self::Declarations | Self::All)
    }

    /// Whether Zod schemas are produced.
    #[must_use]
    pub const fn zod(self) -> bool {
        matches!(self, Self::Zod | Self::All)
    }
}

/// A rendered file, not yet written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File name relative to the output directory.
    pub name: &'static str,
    /// File contents.
    pub contents: String,
}

/// The files produced from one model set, plus degraded references.
#[derive(Clone, Debug, PartialEq)]
pub struct Rendered {
    /// Rendered files, declarations first.
    pub files: Vec<GeneratedFile>,
    /// Links whose target was missing.
    pub diagnostics: Vec<Diagnostic>,
}

/// Renders `models` into the files selected by `format`.
///
/// Every unresolved link is logged as a warning.
///
/// # Errors
///
/// Fails with `UnsupportedFieldType` if any field declares an unknown type.
pub fn render(models: &[Model], format: OutputFormat, config: &CodegenConfig) -> Result<Rendered> {
    for model in models {
        debug!(
            model = %model.slug,
            fields = model.declared_fields().count(),
            "compiling model"
        );
    }

    let mut files = Vec::new();
    let mut diagnostics = Vec::new();

    if format.declarations() {
        let compilation = compile(models, config)?;
        for diagnostic in &compilation.diagnostics {
            warn!(
                model = %diagnostic.model,
                field = %diagnostic.field,
                target = %diagnostic.target,
                "unresolved reference, typed as unknown"
            );
        }
        debug!(
            declarations = compilation.file.declarations.len(),
            "compiled model set"
        );
        files.push(GeneratedFile {
            name: DECLARATIONS_FILE,
            contents: compilation.to_typescript(),
        });
        diagnostics = compilation.diagnostics;
    }

    if format.zod() {
        files.push(GeneratedFile {
            name: ZOD_FILE,
            contents: generate_zod_schema(models, &PascalNaming)?,
        });
    }

    Ok(Rendered { files, diagnostics })
}

/// Writes `files` into `dir`, creating it if needed.
///
/// Returns the written paths in order.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or a file cannot be written.
pub fn write_output<P: AsRef<Path>>(dir: P, files: &[GeneratedFile]) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "failed to create directory '{}': {e}",
            dir.display()
        )))
    })?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = dir.join(file.name);
        fs::write(&path, &file.contents).map_err(|e| {
            Error::new(ErrorKind::Io(format!(
                "failed to write file '{}': {e}",
                path.display()
            )))
        })?;
        info!(path = %path.display(), bytes = file.contents.len(), "wrote file");
        written.push(path);
    }
    Ok(written)
}
