//! Imports and shared helper types emitted ahead of the module augmentation.

use crate::ast::{
    Declaration, ImportDecl, IndexSignature, Member, TypeAliasDecl, TypeExpr, TypeParam,
};
use crate::identifiers::{Identifiers, QueryKind};

/// Imports every generated file needs.
///
/// ```ts
/// import type { RONIN } from "ronin";
/// import type { AddQuery, CountQuery, GetQuery, ListQuery, Model, RemoveQuery, SetQuery } from "@ronin/compiler";
/// import type { DeepCallable, ResultRecord } from "@ronin/syntax/queries";
/// import type { QueryHandlerOptions } from "ronin/types";
/// ```
#[must_use]
pub fn base_imports(ids: &Identifiers) -> Vec<Declaration> {
    let mut compiler_types: Vec<String> = QueryKind::ALL
        .iter()
        .map(|query| query.query_type().to_string())
        .collect();
    compiler_types.push(ids.list_query.clone());
    compiler_types.push(ids.model.clone());
    compiler_types.sort();

    vec![
        Declaration::Import(ImportDecl::types([ids.namespace.as_str()], &ids.module)),
        Declaration::Import(ImportDecl::types(compiler_types, &ids.compiler_module)),
        Declaration::Import(ImportDecl::types(
            [ids.deep_callable.as_str(), ids.result_record.as_str()],
            &ids.syntax_module,
        )),
        Declaration::Import(ImportDecl::types(
            [ids.query_handler_options.as_str()],
            &ids.types_module,
        )),
    ]
}

/// `import type { StoredObject } from "@ronin/compiler";`
#[must_use]
pub fn stored_object_import(ids: &Identifiers) -> Declaration {
    Declaration::Import(ImportDecl::types(
        [ids.stored_object.as_str()],
        &ids.compiler_module,
    ))
}

/// The field-selection helper.
///
/// ```ts
/// type ResolveSchema<TSchema, TUsing extends Array<string> | "all", TKey extends string> =
///   TUsing extends "all"
///     ? TSchema
///     : TKey extends TUsing[number]
///       ? TSchema
///       : TSchema extends Array<unknown>
///         ? Array<string>
///         : string;
/// ```
#[must_use]
pub fn resolve_schema(ids: &Identifiers) -> Declaration {
    let g = &ids.generics;
    let schema = || TypeExpr::named(&g.schema);
    let using = || TypeExpr::named(&g.using);

    let collapse = TypeExpr::conditional(
        schema(),
        TypeExpr::array(TypeExpr::unknown()),
        TypeExpr::array(TypeExpr::string()),
        TypeExpr::string(),
    );
    let selected = TypeExpr::conditional(
        TypeExpr::named(&g.key),
        TypeExpr::indexed(using(), TypeExpr::number()),
        schema(),
        collapse,
    );
    let body = TypeExpr::conditional(
        using(),
        TypeExpr::literal(&ids.all_sentinel),
        schema(),
        selected,
    );

    Declaration::TypeAlias(TypeAliasDecl {
        name: ids.resolve_schema.clone(),
        type_params: vec![
            TypeParam::new(&g.schema),
            TypeParam::new(&g.using).extends(TypeExpr::Union(vec![
                TypeExpr::array(TypeExpr::string()),
                TypeExpr::literal(&ids.all_sentinel),
            ])),
            TypeParam::new(&g.key).extends(TypeExpr::string()),
        ],
        ty: body,
        exported: false,
        doc: None,
    })
}

/// The recursive JSON value union.
///
/// ```ts
/// type JsonValue = string | number | boolean | null | Array<JsonValue> | { [key: string]: JsonValue };
/// ```
#[must_use]
pub fn json_value(ids: &Identifiers) -> Declaration {
    let this = || TypeExpr::named(&ids.json_value);
    Declaration::TypeAlias(TypeAliasDecl {
        name: ids.json_value.clone(),
        type_params: Vec::new(),
        ty: TypeExpr::Union(vec![
            TypeExpr::string(),
            TypeExpr::number(),
            TypeExpr::boolean(),
            TypeExpr::null(),
            TypeExpr::array(this()),
            TypeExpr::Object(vec![Member::Index(IndexSignature {
                key_name: "key".to_string(),
                key: TypeExpr::string(),
                value: this(),
            })]),
        ]),
        exported: false,
        doc: None,
    })
}
