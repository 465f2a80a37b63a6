//! Field descriptors for model schemas.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The closed set of field types a model may declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldType {
    /// UTF-8 text.
    String,
    /// Numeric value.
    Number,
    /// Boolean flag.
    Boolean,
    /// Point in time.
    Date,
    /// Arbitrary JSON value.
    Json,
    /// Stored binary object.
    Blob,
    /// Reference to records of another model.
    Link,
}

impl FieldType {
    /// All supported field types.
    pub const ALL: [Self; 7] = [
        Self::String,
        Self::Number,
        Self::Boolean,
        Self::Date,
        Self::Json,
        Self::Blob,
        Self::Link,
    ];

    /// The name used for this type in schema documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Json => "json",
            Self::Blob => "blob",
            Self::Link => "link",
        }
    }

    /// Returns true for reference fields.
    #[must_use]
    pub const fn is_link(self) -> bool {
        matches!(self, Self::Link)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// How many records a link field refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LinkKind {
    /// A single record.
    #[default]
    One,
    /// A collection of records.
    Many,
}

/// A single typed attribute of a model.
///
/// The declared type is kept as written so that a schema using a type the
/// compiler does not know about can still be loaded and reported with the
/// offending field attached, instead of failing during decoding.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Field {
    /// Declared type name (e.g. "string", "link").
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub type_name: String,
    /// Whether a value must always be present.
    #[cfg_attr(feature = "serde", serde(default))]
    pub required: bool,
    /// Slug of the referenced model (links only).
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub target: Option<String>,
    /// Link cardinality (links only).
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub kind: Option<LinkKind>,
}

impl Field {
    /// Creates an optional field of the given type.
    #[must_use]
    pub fn new(field_type: FieldType) -> Self {
        Self::of_type(field_type.as_str())
    }

    /// Creates an optional field with a raw type name.
    #[must_use]
    pub fn of_type(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            required: false,
            target: None,
            kind: None,
        }
    }

    /// Creates an optional string field.
    #[must_use]
    pub fn string() -> Self {
        Self::new(FieldType::String)
    }

    /// Creates an optional number field.
    #[must_use]
    pub fn number() -> Self {
        Self::new(FieldType::Number)
    }

    /// Creates an optional boolean field.
    #[must_use]
    pub fn boolean() -> Self {
        Self::new(FieldType::Boolean)
    }

    /// Creates an optional date field.
    #[must_use]
    pub fn date() -> Self {
        Self::new(FieldType::Date)
    }

    /// Creates an optional JSON field.
    #[must_use]
    pub fn json() -> Self {
        Self::new(FieldType::Json)
    }

    /// Creates an optional blob field.
    #[must_use]
    pub fn blob() -> Self {
        Self::new(FieldType::Blob)
    }

    /// Creates an optional single-record link to `target`.
    #[must_use]
    pub fn link(target: impl Into<String>) -> Self {
        Self {
            target: Some(target.into()),
            kind: Some(LinkKind::One),
            ..Self::new(FieldType::Link)
        }
    }

    /// Marks this field as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Turns this link into a many-record link.
    #[must_use]
    pub fn many(mut self) -> Self {
        self.kind = Some(LinkKind::Many);
        self
    }

    /// Parses the declared type name.
    ///
    /// # Errors
    ///
    /// Returns the raw type name if it is not one of the supported types.
    pub fn field_type(&self) -> Result<FieldType, String> {
        self.type_name.parse()
    }

    /// Link cardinality, defaulting to a single record.
    #[must_use]
    pub fn link_kind(&self) -> LinkKind {
        self.kind.unwrap_or_default()
    }

    /// Returns true for many-record links.
    #[must_use]
    pub fn is_many_link(&self) -> bool {
        matches!(self.field_type(), Ok(FieldType::Link)) && self.link_kind() == LinkKind::Many
    }
}
