//! Model schemas.
//!
//! A [`Model`] is supplied wholesale by the caller and never mutated by the
//! compiler. Fields live in a persistent ordered map, so iteration order is
//! always slug order no matter how the schema document was written.

use std::borrow::Cow;
use std::collections::HashSet;

use im::OrdMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::field::{Field, FieldType};

/// Identity and audit fields present on every record.
///
/// These are implicit and never re-declared in generated field lists.
pub const SYSTEM_FIELD_SLUGS: [&str; 6] = [
    "id",
    "ronin.createdAt",
    "ronin.createdBy",
    "ronin.locked",
    "ronin.updatedAt",
    "ronin.updatedBy",
];

/// A named schema unit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Model {
    /// Unique, identifier-safe slug (e.g. "account").
    pub slug: String,
    /// Unique plural slug; derived from `slug` when absent.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub plural_slug: Option<String>,
    /// Human-readable name.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub name: Option<String>,
    /// Free-text description attached to generated declarations.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub summary: Option<String>,
    /// Fields keyed by slug.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fields: OrdMap<String, Field>,
}

impl Model {
    /// Creates a model with no fields.
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            plural_slug: None,
            name: None,
            summary: None,
            fields: OrdMap::new(),
        }
    }

    /// Sets the plural slug.
    #[must_use]
    pub fn with_plural(mut self, plural_slug: impl Into<String>) -> Self {
        self.plural_slug = Some(plural_slug.into());
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the summary.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Adds (or replaces) a field.
    #[must_use]
    pub fn with_field(mut self, slug: impl Into<String>, field: Field) -> Self {
        self.fields.insert(slug.into(), field);
        self
    }

    /// The plural slug, falling back to `slug` + "s".
    #[must_use]
    pub fn plural_slug(&self) -> Cow<'_, str> {
        match &self.plural_slug {
            Some(plural) => Cow::Borrowed(plural),
            None => Cow::Owned(format!("{}s", self.slug)),
        }
    }

    /// The display name, falling back to the slug.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.slug)
    }

    /// Fields that appear in generated declarations, sorted by slug.
    ///
    /// System fields are skipped.
    pub fn declared_fields(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields
            .iter()
            .filter(|(slug, _)| !is_system_field(slug))
            .map(|(slug, field)| (slug.as_str(), field))
    }

    /// Returns true if any declared field has the given type.
    #[must_use]
    pub fn has_field_of(&self, field_type: FieldType) -> bool {
        self.declared_fields()
            .any(|(_, field)| field.field_type() == Ok(field_type))
    }

    /// Checks slug uniqueness across a model set.
    ///
    /// Slugs and plural slugs share one namespace, since both become type
    /// names and entry-point keys.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidModel`](crate::ErrorKind::InvalidModel) for the
    /// first slug or plural slug already taken by any model, including its own.
    pub fn validate_set(models: &[Self]) -> Result<()> {
        let mut names: HashSet<Cow<'_, str>> = HashSet::new();
        for model in models {
            if !names.insert(Cow::Borrowed(model.slug.as_str())) {
                return Err(Error::invalid_model(format!(
                    "duplicate model slug '{}'",
                    model.slug
                )));
            }
            let plural = model.plural_slug();
            if names.contains(&plural) {
                return Err(Error::invalid_model(format!(
                    "duplicate plural slug '{plural}'"
                )));
            }
            names.insert(plural);
        }
        Ok(())
    }
}

/// Returns true for identity and audit fields.
#[must_use]
pub fn is_system_field(slug: &str) -> bool {
    SYSTEM_FIELD_SLUGS.contains(&slug)
}
