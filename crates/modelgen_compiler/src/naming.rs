//! Identifier synthesis from model slugs.
//!
//! Every name is a pure function of the slug, so compiling the same model set
//! twice yields the same identifiers.

use convert_case::{Case, Casing};

use crate::identifiers::QueryKind;

/// Derives type and accessor names from slugs.
pub trait Naming {
    /// Canonical type name for a slug (`blog_post` -> `BlogPost`).
    fn type_name(&self, slug: &str) -> String;

    /// Name of the base record shape (`AccountSchema`).
    fn schema_name(&self, slug: &str) -> String {
        format!("{}Schema", self.type_name(slug))
    }

    /// Name of the accessor interface for an operation (`AccountsGetter`).
    fn accessor_name(&self, slug: &str, query: QueryKind) -> String {
        format!("{}{}", self.type_name(slug), query.accessor_suffix())
    }
}

/// PascalCase naming.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PascalNaming;

impl Naming for PascalNaming {
    fn type_name(&self, slug: &str) -> String {
        slug.to_case(Case::Pascal)
    }
}
