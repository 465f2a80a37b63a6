//! Per-model accessor interfaces.
//!
//! Each interface is empty and only extends a generic base interface, giving
//! every model a uniquely named type per operation:
//!
//! ```ts
//! interface AccountGetter extends RONIN.IGetterSingular<AccountSchema> {}
//! interface AccountsGetter extends RONIN.IGetterPlural<AccountSchema> {}
//! ```

use modelgen_foundation::Model;

use crate::ast::{InterfaceDecl, TypeExpr, TypeRef};
use crate::context::Context;
use crate::identifiers::QueryKind;

/// One accessor interface per operation.
#[derive(Clone, Debug, PartialEq)]
pub struct AccessorSet {
    /// `…Adder`
    pub add: InterfaceDecl,
    /// `…Counter`
    pub count: InterfaceDecl,
    /// `…Getter`
    pub get: InterfaceDecl,
    /// `…Remover`
    pub remove: InterfaceDecl,
    /// `…Setter`
    pub set: InterfaceDecl,
}

impl AccessorSet {
    /// The interface for `query`.
    #[must_use]
    pub const fn get(&self, query: QueryKind) -> &InterfaceDecl {
        match query {
            QueryKind::Add => &self.add,
            QueryKind::Count => &self.count,
            QueryKind::Get => &self.get,
            QueryKind::Remove => &self.remove,
            QueryKind::Set => &self.set,
        }
    }

    /// All interfaces in operation order.
    pub fn iter(&self) -> impl Iterator<Item = &InterfaceDecl> {
        QueryKind::ALL.into_iter().map(|query| self.get(query))
    }
}

/// Singular and plural accessor interfaces of one model.
#[derive(Clone, Debug, PartialEq)]
pub struct AccessorDeclarations {
    /// Slug of the model these accessors belong to.
    pub slug: String,
    /// Interfaces named after the singular slug.
    pub singular: AccessorSet,
    /// Interfaces named after the plural slug.
    pub plural: AccessorSet,
}

/// Synthesizes the accessor interfaces of `model`.
#[must_use]
pub fn synthesize(model: &Model, ctx: Context<'_>) -> AccessorDeclarations {
    let plural_slug = model.plural_slug();
    let record = ctx.naming.schema_name(&model.slug);

    let set_for = |slug: &str, plural: bool| {
        let make = |query: QueryKind| accessor(ctx, slug, &record, query, plural);
        AccessorSet {
            add: make(QueryKind::Add),
            count: make(QueryKind::Count),
            get: make(QueryKind::Get),
            remove: make(QueryKind::Remove),
            set: make(QueryKind::Set),
        }
    };

    AccessorDeclarations {
        slug: model.slug.clone(),
        singular: set_for(&model.slug, false),
        plural: set_for(plural_slug.as_ref(), true),
    }
}

fn accessor(
    ctx: Context<'_>,
    slug: &str,
    record: &str,
    query: QueryKind,
    plural: bool,
) -> InterfaceDecl {
    let base = ctx.identifiers().qualified(query.accessor_base(plural));
    InterfaceDecl {
        extends: vec![TypeRef::with_args(base, vec![TypeExpr::named(record)])],
        ..InterfaceDecl::new(ctx.naming.accessor_name(slug, query))
    }
}
