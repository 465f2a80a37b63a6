//! Per-model record declarations.
//!
//! For every model three declarations are produced:
//!
//! ```ts
//! interface PostSchema<TUsing extends Array<"author"> | "all" = []> extends ResultRecord {
//!   author: ResolveSchema<Account, TUsing, "author"> | null;
//!   title: string | null;
//! }
//! export type Post<TUsing extends Array<"author"> | "all" = []> = PostSchema<TUsing>;
//! export type Posts<TUsing extends Array<"author"> | "all" = []> = Array<Post<TUsing>> & {
//!   moreBefore?: string;
//!   moreAfter?: string;
//! };
//! ```

use modelgen_foundation::{FieldType, Model, Result};

use crate::ast::{InterfaceDecl, Member, Property, TypeAliasDecl, TypeExpr, TypeParam, TypeRef};
use crate::context::Context;
use crate::resolve::{Diagnostic, FieldResolver, ResolvedField};

/// Helpers a model's declarations depend on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Requirements {
    /// The field-selection helper type is referenced.
    pub resolve_schema: bool,
    /// The JSON value helper type is referenced.
    pub json: bool,
    /// The stored-object type is referenced.
    pub stored_object: bool,
}

impl Requirements {
    /// Combines the requirements of two declaration sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            resolve_schema: self.resolve_schema || other.resolve_schema,
            json: self.json || other.json,
            stored_object: self.stored_object || other.stored_object,
        }
    }
}

/// The record declarations of one model.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelDeclarations {
    /// Slug of the model these declarations belong to.
    pub slug: String,
    /// Base record shape (`AccountSchema`).
    pub base: InterfaceDecl,
    /// Singular record type (`Account`).
    pub singular: TypeAliasDecl,
    /// Paginated collection type (`Accounts`).
    pub plural: TypeAliasDecl,
    /// Helpers referenced by these declarations.
    pub requires: Requirements,
    /// Links whose target was missing.
    pub diagnostics: Vec<Diagnostic>,
}

/// Synthesizes the base, singular, and plural declarations of `model`.
///
/// # Errors
///
/// Fails with `UnsupportedFieldType` if any field declares an unknown type.
pub fn synthesize(model: &Model, ctx: Context<'_>) -> Result<ModelDeclarations> {
    let resolver = FieldResolver::new(ctx);
    let ids = ctx.identifiers();

    // `declared_fields` skips system fields and yields slugs in sorted order.
    let fields = model
        .declared_fields()
        .map(|(slug, field)| resolver.resolve(model, slug, field))
        .collect::<Result<Vec<ResolvedField>>>()?;

    let selection_keys: Vec<&str> = fields
        .iter()
        .filter(|field| field.is_resolved_link())
        .map(|field| field.slug.as_str())
        .collect();
    let generic = ctx.config.field_selection && !selection_keys.is_empty();

    let type_params = if generic {
        vec![selection_param(ctx, &selection_keys)]
    } else {
        Vec::new()
    };
    let type_args = || {
        if generic {
            vec![TypeExpr::named(&ids.generics.using)]
        } else {
            Vec::new()
        }
    };

    let requires = Requirements {
        resolve_schema: generic,
        json: fields.iter().any(|f| f.field_type == FieldType::Json),
        stored_object: fields.iter().any(|f| f.field_type == FieldType::Blob),
    };
    let diagnostics = fields
        .iter()
        .filter_map(ResolvedField::diagnostic)
        .cloned()
        .collect();

    let schema_name = ctx.naming.schema_name(&model.slug);
    let singular_name = ctx.naming.type_name(&model.slug);
    let plural_name = ctx.naming.type_name(&model.plural_slug());
    let doc = model.summary.clone().filter(|summary| !summary.is_empty());

    let base = InterfaceDecl {
        name: schema_name.clone(),
        type_params: type_params.clone(),
        extends: vec![TypeRef::new(&ids.result_record)],
        members: fields
            .into_iter()
            .map(|field| Member::Property(Property::new(field.slug, field.ty)))
            .collect(),
        doc: doc.clone(),
    };

    let singular = TypeAliasDecl {
        name: singular_name.clone(),
        type_params: type_params.clone(),
        ty: TypeExpr::generic(schema_name, type_args()),
        exported: true,
        doc: doc.clone(),
    };

    let plural = TypeAliasDecl {
        name: plural_name,
        type_params,
        ty: TypeExpr::intersection(vec![
            TypeExpr::array(TypeExpr::generic(singular_name, type_args())),
            pagination_shape(),
        ]),
        exported: true,
        doc,
    };

    Ok(ModelDeclarations {
        slug: model.slug.clone(),
        base,
        singular,
        plural,
        requires,
        diagnostics,
    })
}

/// `TUsing extends Array<"a" | "b"> | "all" = []`
fn selection_param(ctx: Context<'_>, keys: &[&str]) -> TypeParam {
    let ids = ctx.identifiers();
    let keys = TypeExpr::union(keys.iter().map(|key| TypeExpr::literal(*key)).collect());
    TypeParam::new(&ids.generics.using)
        .extends(TypeExpr::Union(vec![
            TypeExpr::array(keys),
            TypeExpr::literal(&ids.all_sentinel),
        ]))
        .with_default(TypeExpr::Tuple(Vec::new()))
}

/// `{ moreBefore?: string; moreAfter?: string }`
fn pagination_shape() -> TypeExpr {
    TypeExpr::Object(vec![
        Property::new("moreBefore", TypeExpr::string())
            .optional()
            .into(),
        Property::new("moreAfter", TypeExpr::string())
            .optional()
            .into(),
    ])
}
