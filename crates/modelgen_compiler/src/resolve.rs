//! Field type and cross-reference resolution.
//!
//! Maps one field declaration to a [`TypeExpr`]. Primitive types come from a
//! fixed table; link fields are looked up against the model set and degrade to
//! `unknown` when their target is missing.

use std::fmt;

use modelgen_foundation::{Error, ErrorContext, Field, FieldType, LinkKind, Model, Result};

use crate::ast::TypeExpr;
use crate::context::Context;

/// Outcome of looking up a link field's target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolvedReference<'a> {
    /// The target model.
    Model(&'a Model),
    /// No model with the target slug exists.
    Unresolved,
}

/// Looks up `field.target` in `models`.
///
/// Slugs are unique within a model set; if that ever does not hold, the first
/// match wins.
#[must_use]
pub fn resolve_target<'a>(field: &Field, models: &'a [Model]) -> ResolvedReference<'a> {
    let Some(target) = field.target.as_deref() else {
        return ResolvedReference::Unresolved;
    };
    models
        .iter()
        .find(|model| model.slug == target)
        .map_or(ResolvedReference::Unresolved, ResolvedReference::Model)
}

/// A link whose target could not be found.
///
/// Not an error: the field is typed as `unknown` and compilation continues.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Slug of the model owning the field.
    pub model: String,
    /// Slug of the link field.
    pub field: String,
    /// The target slug that was not found.
    pub target: String,
}

impl Diagnostic {
    /// Converts this diagnostic into a (non-fatal) error value for reporting.
    #[must_use]
    pub fn to_error(&self) -> Error {
        Error::unresolved_reference(&self.model, &self.field, &self.target)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} links to unknown model '{}'",
            self.model, self.field, self.target
        )
    }
}

/// How a link field was resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkResolution {
    /// The target exists.
    Resolved {
        /// Target model slug.
        target: String,
        /// Link cardinality.
        kind: LinkKind,
    },
    /// The target is missing; the field was typed as `unknown`.
    Unresolved(Diagnostic),
}

/// The resolved type of one field.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedField {
    /// Field slug.
    pub slug: String,
    /// Declared field type.
    pub field_type: FieldType,
    /// Property type, including the `null` alternative when applicable.
    pub ty: TypeExpr,
    /// Link details; `None` for primitive fields.
    pub link: Option<LinkResolution>,
}

impl ResolvedField {
    /// Returns true if this is a link whose target exists.
    #[must_use]
    pub fn is_resolved_link(&self) -> bool {
        matches!(self.link, Some(LinkResolution::Resolved { .. }))
    }

    /// The diagnostic raised for this field, if its target was missing.
    #[must_use]
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match &self.link {
            Some(LinkResolution::Unresolved(diagnostic)) => Some(diagnostic),
            _ => None,
        }
    }
}

/// Resolves fields of one model against the model set of a pass.
pub struct FieldResolver<'a> {
    ctx: Context<'a>,
}

impl<'a> FieldResolver<'a> {
    /// Creates a resolver.
    #[must_use]
    pub const fn new(ctx: Context<'a>) -> Self {
        Self { ctx }
    }

    /// Resolves the type of `field` (declared on `model` as `slug`).
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnsupportedFieldType`](modelgen_foundation::ErrorKind::UnsupportedFieldType)
    /// if the declared type is not one of the supported field types.
    pub fn resolve(&self, model: &Model, slug: &str, field: &Field) -> Result<ResolvedField> {
        let field_type = field.field_type().map_err(|type_name| {
            Error::unsupported_field_type(&model.slug, slug, type_name).with_context(
                ErrorContext::new()
                    .with_source(&model.slug)
                    .with_frame(format!("field {slug}")),
            )
        })?;

        let (base, link) = match field_type {
            FieldType::String => (TypeExpr::string(), None),
            FieldType::Number => (TypeExpr::number(), None),
            FieldType::Boolean => (TypeExpr::boolean(), None),
            FieldType::Date => (TypeExpr::named("Date"), None),
            FieldType::Json => (TypeExpr::named(&self.ctx.identifiers().json_value), None),
            FieldType::Blob => (
                TypeExpr::named(&self.ctx.identifiers().stored_object),
                None,
            ),
            FieldType::Link => {
                let (ty, resolution) = self.resolve_link(model, slug, field);
                (ty, Some(resolution))
            }
        };

        // Many-links represent absence with an empty collection.
        let ty = if field.required || field.is_many_link() {
            base
        } else {
            TypeExpr::union(vec![base, TypeExpr::null()])
        };

        Ok(ResolvedField {
            slug: slug.to_string(),
            field_type,
            ty,
            link,
        })
    }

    fn resolve_link(&self, model: &Model, slug: &str, field: &Field) -> (TypeExpr, LinkResolution) {
        let kind = field.link_kind();
        let target = match resolve_target(field, self.ctx.models) {
            ResolvedReference::Model(target) => target,
            ResolvedReference::Unresolved => {
                let diagnostic = Diagnostic {
                    model: model.slug.clone(),
                    field: slug.to_string(),
                    target: field.target.clone().unwrap_or_default(),
                };
                return (TypeExpr::unknown(), LinkResolution::Unresolved(diagnostic));
            }
        };

        let shape = TypeExpr::named(self.ctx.naming.type_name(&target.slug));
        let shape = match kind {
            LinkKind::One => shape,
            LinkKind::Many => TypeExpr::array(shape),
        };

        let ty = if self.ctx.config.field_selection {
            let ids = self.ctx.identifiers();
            TypeExpr::generic(
                &ids.resolve_schema,
                vec![
                    shape,
                    TypeExpr::named(&ids.generics.using),
                    TypeExpr::literal(slug),
                ],
            )
        } else {
            shape
        };

        let resolution = LinkResolution::Resolved {
            target: target.slug.clone(),
            kind,
        };
        (ty, resolution)
    }
}
