//! Module augmentation assembly.
//!
//! Merges every model's record declarations and accessor interfaces with the
//! query entry points into a single `declare module "ronin" { … }` block, and
//! collects the imports and helper types that block depends on.

use modelgen_foundation::Model;

use crate::accessors::AccessorDeclarations;
use crate::ast::{
    Declaration, FunctionDecl, InterfaceDecl, Member, ModuleDecl, Param, Property, SourceFile,
    TypeExpr, VariableDecl,
};
use crate::comment::query_comment;
use crate::context::Context;
use crate::helpers;
use crate::identifiers::{AUXILIARY_OPERATIONS, Identifiers, QueryKind};
use crate::types::{ModelDeclarations, Requirements};

/// The assembled output of a compilation pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ModuleAugmentation {
    /// Import statements.
    pub imports: Vec<Declaration>,
    /// Shared helper types, each included at most once and only when used.
    pub helpers: Vec<Declaration>,
    /// The augmentation block.
    pub module: ModuleDecl,
}

impl ModuleAugmentation {
    /// Flattens the augmentation into an ordered source file.
    #[must_use]
    pub fn into_source_file(self) -> SourceFile {
        let mut declarations = self.imports;
        declarations.extend(self.helpers);
        declarations.push(Declaration::Module(self.module));
        SourceFile { declarations }
    }
}

/// Assembles the module augmentation for a model set.
///
/// Models and their declarations are ordered by slug so the output never
/// depends on input order.
#[must_use]
pub fn assemble(
    ctx: Context<'_>,
    mut model_decls: Vec<ModelDeclarations>,
    mut accessor_decls: Vec<AccessorDeclarations>,
) -> ModuleAugmentation {
    let ids = ctx.identifiers();

    let mut models: Vec<&Model> = ctx.models.iter().collect();
    models.sort_by(|a, b| a.slug.cmp(&b.slug));
    model_decls.sort_by(|a, b| a.slug.cmp(&b.slug));
    accessor_decls.sort_by(|a, b| a.slug.cmp(&b.slug));

    let requires = model_decls
        .iter()
        .fold(Requirements::default(), |acc, decls| acc.union(decls.requires));

    let mut imports = helpers::base_imports(ids);
    if requires.stored_object {
        imports.push(helpers::stored_object_import(ids));
    }

    let mut shared = Vec::new();
    if requires.resolve_schema {
        shared.push(helpers::resolve_schema(ids));
    }
    if requires.json {
        shared.push(helpers::json_value(ids));
    }

    let mut body = Vec::new();
    for decls in model_decls {
        body.push(Declaration::Interface(decls.base));
        body.push(Declaration::TypeAlias(decls.singular));
        body.push(Declaration::TypeAlias(decls.plural));
    }

    for decls in &accessor_decls {
        for iface in decls.singular.iter().chain(decls.plural.iter()) {
            body.push(Declaration::Interface(iface.clone()));
        }
    }

    for query in QueryKind::ALL {
        body.push(Declaration::Interface(accessor_group(
            &models,
            &accessor_decls,
            query,
        )));
    }

    for query in QueryKind::ALL {
        body.push(Declaration::Variable(entry_point(ctx, &models, query)));
    }

    body.extend(syntax_factory(ids));

    ModuleAugmentation {
        imports,
        helpers: shared,
        module: ModuleDecl {
            name: ids.module.clone(),
            body,
        },
    }
}

/// `interface Getters { account: AccountGetter; accounts: AccountsGetter; }`
fn accessor_group(
    models: &[&Model],
    accessors: &[AccessorDeclarations],
    query: QueryKind,
) -> InterfaceDecl {
    let mut group = InterfaceDecl::new(query.group_name());
    for (model, decls) in models.iter().zip(accessors) {
        debug_assert_eq!(model.slug, decls.slug);
        group.members.push(
            Property::new(
                model.slug.clone(),
                TypeExpr::named(&decls.singular.get(query).name),
            )
            .into(),
        );
        group.members.push(
            Property::new(
                model.plural_slug().into_owned(),
                TypeExpr::named(&decls.plural.get(query).name),
            )
            .into(),
        );
    }
    group
}

/// `const get: { account: DeepCallable<GetQuery[keyof GetQuery], Account | null>; … };`
fn entry_point(ctx: Context<'_>, models: &[&Model], query: QueryKind) -> VariableDecl {
    let ids = ctx.identifiers();
    let query_value = |query_type: &str| {
        TypeExpr::indexed(
            TypeExpr::named(query_type),
            TypeExpr::key_of(TypeExpr::named(query_type)),
        )
    };
    let callable = |result: TypeExpr| {
        TypeExpr::generic(
            &ids.deep_callable,
            vec![query_value(query.query_type()), result],
        )
    };

    let mut members: Vec<Member> = Vec::new();
    for model in models {
        let type_name = ctx.naming.type_name(&model.slug);
        let plural_name = ctx.naming.type_name(&model.plural_slug());
        let display = model.name.clone().unwrap_or_else(|| type_name.clone());
        let comment = query_comment(&display, query);

        let singular = match query {
            QueryKind::Count => TypeExpr::number(),
            _ => TypeExpr::union(vec![TypeExpr::named(&type_name), TypeExpr::null()]),
        };
        members.push(
            Property::new(model.slug.clone(), callable(singular))
                .with_doc(comment.singular)
                .into(),
        );

        // Creating multiple records at once is not supported.
        if query == QueryKind::Add {
            continue;
        }

        let plural = match query {
            QueryKind::Count => TypeExpr::number(),
            _ => TypeExpr::named(plural_name),
        };
        members.push(
            Property::new(model.plural_slug().into_owned(), callable(plural))
                .with_doc(comment.plural)
                .into(),
        );
    }

    if query == QueryKind::Get {
        members.push(list_models_property(ids));
    }

    VariableDecl {
        name: query.as_str().to_string(),
        ty: TypeExpr::Object(members),
    }
}

/// `models: DeepCallable<ListQuery[keyof ListQuery], Array<Model>>;`
fn list_models_property(ids: &Identifiers) -> Member {
    let list_query = || TypeExpr::named(&ids.list_query);
    Property::new(
        ids.list_models_property.clone(),
        TypeExpr::generic(
            &ids.deep_callable,
            vec![
                TypeExpr::indexed(list_query(), TypeExpr::key_of(list_query())),
                TypeExpr::array(TypeExpr::named(&ids.model)),
            ],
        ),
    )
    .with_doc("List all model definitions")
    .into()
}

/// The syntax factory, declared both as a named constant and as the default export.
///
/// ```ts
/// const createSyntaxFactory: (options: QueryHandlerOptions | (() => QueryHandlerOptions)) => {
///   add: typeof add;
///   …
/// };
/// export default function (options: QueryHandlerOptions | (() => QueryHandlerOptions)): { … };
/// ```
fn syntax_factory(ids: &Identifiers) -> [Declaration; 2] {
    let options = || TypeExpr::named(&ids.query_handler_options);
    let params = vec![Param::new(
        "options",
        TypeExpr::Union(vec![options(), TypeExpr::function(Vec::new(), options())]),
    )];

    let operations = QueryKind::ALL
        .iter()
        .map(|query| query.as_str())
        .chain(AUXILIARY_OPERATIONS);
    let ret = TypeExpr::Object(
        operations
            .map(|name| Property::new(name, TypeExpr::TypeQuery(name.to_string())).into())
            .collect(),
    );

    [
        Declaration::Variable(VariableDecl {
            name: ids.create_syntax_factory.clone(),
            ty: TypeExpr::function(params.clone(), ret.clone()),
        }),
        Declaration::Function(FunctionDecl {
            name: None,
            params,
            ret,
            default_export: true,
        }),
    ]
}
