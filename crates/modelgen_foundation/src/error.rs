//! Error types for modelgen.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout modelgen.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for modelgen operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unsupported field type error.
    #[must_use]
    pub fn unsupported_field_type(
        model: impl Into<String>,
        field: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::UnsupportedFieldType {
            model: model.into(),
            field: field.into(),
            type_name: type_name.into(),
        })
    }

    /// Creates an unresolved reference error.
    #[must_use]
    pub fn unresolved_reference(
        model: impl Into<String>,
        field: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::UnresolvedReference {
            model: model.into(),
            field: field.into(),
            target: target.into(),
        })
    }

    /// Creates an invalid model error.
    #[must_use]
    pub fn invalid_model(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidModel(message.into()))
    }

    /// Returns true if this error must abort a compilation pass.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(self.kind, ErrorKind::UnresolvedReference { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A field declares a type outside the supported set.
    #[error("unsupported field type '{type_name}' on field {model}.{field}")]
    UnsupportedFieldType {
        /// Slug of the model owning the field.
        model: String,
        /// Slug of the offending field.
        field: String,
        /// The declared type name.
        type_name: String,
    },

    /// A link field targets a model that is not part of the model set.
    #[error("unresolved reference: {model}.{field} links to unknown model '{target}'")]
    UnresolvedReference {
        /// Slug of the model owning the field.
        model: String,
        /// Slug of the link field.
        field: String,
        /// The target slug that could not be found.
        target: String,
    },

    /// The model set violates a structural invariant.
    #[error("invalid model: {0}")]
    InvalidModel(String),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Encoding or decoding a model set failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or model slug.
    pub source: Option<String>,
    /// Stack of compilation stages that were active.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
