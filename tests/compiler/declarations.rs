//! Integration tests for per-model declarations
//!
//! Tests record shapes, field selection, nullability, and failure modes as
//! they appear in emitted TypeScript.

use modelgen_compiler::{CodegenConfig, compile, generate};
use modelgen_foundation::{ErrorKind, Field, Model};

fn account() -> Model {
    Model::new("account")
        .with_field("name", Field::string())
        .with_field("email", Field::string().required())
}

fn post() -> Model {
    Model::new("post")
        .with_field("title", Field::string())
        .with_field("author", Field::link("account"))
}

// =============================================================================
// Linked Models
// =============================================================================

#[test]
fn account_and_post() {
    let out = generate(&[account(), post()], &CodegenConfig::default()).unwrap();

    // One triple per model.
    for name in ["AccountSchema", "PostSchema"] {
        assert_eq!(out.matches(&format!("interface {name}")).count(), 1);
    }
    assert_eq!(out.matches("export type Account =").count(), 1);
    assert_eq!(out.matches("export type Accounts =").count(), 1);
    assert_eq!(out.matches("export type Post<").count(), 1);
    assert_eq!(out.matches("export type Posts<").count(), 1);

    assert!(out.contains(
        "  interface AccountSchema extends ResultRecord {\n    email: string;\n    name: string | null;\n  }\n"
    ));
    assert!(out.contains(
        "  interface PostSchema<TUsing extends Array<\"author\"> | \"all\" = []> extends ResultRecord {\n    author: ResolveSchema<Account, TUsing, \"author\"> | null;\n    title: string | null;\n  }\n"
    ));
    assert!(out.contains(
        "  export type Post<TUsing extends Array<\"author\"> | \"all\" = []> = PostSchema<TUsing>;\n"
    ));
    assert!(out.contains(
        "  export type Posts<TUsing extends Array<\"author\"> | \"all\" = []> = Array<Post<TUsing>> & {\n    moreBefore?: string;\n    moreAfter?: string;\n  };\n"
    ));

    // The field-selection helper is emitted exactly once, before the module.
    let helper = "type ResolveSchema<TSchema, TUsing extends Array<string> | \"all\", TKey extends string> = TUsing extends \"all\" ? TSchema : TKey extends TUsing[number] ? TSchema : TSchema extends Array<unknown> ? Array<string> : string;\n";
    assert_eq!(out.matches(helper).count(), 1);
    assert!(out.find(helper).unwrap() < out.find("declare module").unwrap());

    // `author` precedes `title`.
    assert!(out.find("    author:").unwrap() < out.find("    title:").unwrap());
}

#[test]
fn without_field_selection() {
    let out = generate(&[account(), post()], &CodegenConfig::minimal()).unwrap();
    assert!(out.contains("    author: Account | null;\n"));
    assert!(out.contains("  interface PostSchema extends ResultRecord {\n"));
    assert!(!out.contains("ResolveSchema"));
    assert!(!out.contains("TUsing"));
}

#[test]
fn many_link_is_array_and_never_null() {
    let models = vec![
        account(),
        Model::new("team").with_field("members", Field::link("account").many()),
    ];
    let out = generate(&models, &CodegenConfig::default()).unwrap();
    assert!(out.contains("    members: ResolveSchema<Array<Account>, TUsing, \"members\">;\n"));

    let out = generate(&models, &CodegenConfig::minimal()).unwrap();
    assert!(out.contains("    members: Array<Account>;\n"));
}

#[test]
fn self_reference() {
    let models = vec![Model::new("category").with_field("parent", Field::link("category"))];
    let out = generate(&models, &CodegenConfig::default()).unwrap();
    assert!(out.contains("    parent: ResolveSchema<Category, TUsing, \"parent\"> | null;\n"));
}

// =============================================================================
// Field Types
// =============================================================================

#[test]
fn primitive_and_helper_types() {
    let models = vec![
        Model::new("file")
            .with_field("size", Field::number().required())
            .with_field("public", Field::boolean())
            .with_field("uploadedAt", Field::date())
            .with_field("meta", Field::json())
            .with_field("data", Field::blob().required()),
    ];
    let out = generate(&models, &CodegenConfig::default()).unwrap();

    assert!(out.contains("    size: number;\n"));
    assert!(out.contains("    public: boolean | null;\n"));
    assert!(out.contains("    uploadedAt: Date | null;\n"));
    assert!(out.contains("    meta: JsonValue | null;\n"));
    assert!(out.contains("    data: StoredObject;\n"));

    assert!(out.contains("import type { StoredObject } from \"@ronin/compiler\";\n"));
    assert_eq!(
        out.matches("type JsonValue = string | number | boolean | null | Array<JsonValue> | {\n  [key: string]: JsonValue;\n};\n")
            .count(),
        1
    );
    assert!(!out.contains("ResolveSchema"));
}

#[test]
fn system_fields_are_not_redeclared() {
    let models = vec![
        Model::new("audit")
            .with_field("id", Field::string().required())
            .with_field("ronin.createdAt", Field::date().required())
            .with_field("ronin.locked", Field::boolean()),
    ];
    let out = generate(&models, &CodegenConfig::default()).unwrap();
    assert!(out.contains("  interface AuditSchema extends ResultRecord {}\n"));
    assert!(out.contains("  export type Audit = AuditSchema;\n"));
    assert!(!out.contains("ronin.locked"));
}

#[test]
fn dotted_field_slugs_are_quoted() {
    let models = vec![Model::new("page").with_field("seo.title", Field::string())];
    let out = generate(&models, &CodegenConfig::default()).unwrap();
    assert!(out.contains("    \"seo.title\": string | null;\n"));
}

#[test]
fn summary_is_documented_three_times() {
    let models = vec![account().with_summary("A user account.")];
    let out = generate(&models, &CodegenConfig::default()).unwrap();
    assert_eq!(out.matches("   * A user account.\n").count(), 3);
}

#[test]
fn empty_summary_matches_missing_summary() {
    let config = CodegenConfig::default();
    let with_empty = generate(&[account().with_summary("")], &config).unwrap();
    let without = generate(&[account()], &config).unwrap();
    assert_eq!(with_empty, without);
}

// =============================================================================
// Failure Modes
// =============================================================================

#[test]
fn unresolved_link_degrades_to_unknown() {
    let models = vec![Model::new("post").with_field("author", Field::link("does_not_exist"))];
    let compilation = compile(&models, &CodegenConfig::default()).unwrap();
    assert_eq!(compilation.diagnostics.len(), 1);
    assert_eq!(
        compilation.diagnostics[0].to_string(),
        "post.author links to unknown model 'does_not_exist'"
    );

    let out = compilation.to_typescript();
    assert!(out.contains("    author: unknown | null;\n"));
    assert!(out.contains("  interface PostSchema extends ResultRecord {\n"));
}

#[test]
fn unsupported_field_type_is_fatal() {
    let models = vec![
        account(),
        Model::new("broken").with_field("avatar", Field::of_type("unsupported_xyz")),
    ];
    let err = generate(&models, &CodegenConfig::default()).unwrap_err();
    match &err.kind {
        ErrorKind::UnsupportedFieldType {
            model,
            field,
            type_name,
        } => {
            assert_eq!(model, "broken");
            assert_eq!(field, "avatar");
            assert_eq!(type_name, "unsupported_xyz");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.is_fatal());
}

#[test]
fn output_is_byte_identical_across_runs_and_orders() {
    let first = generate(&[account(), post()], &CodegenConfig::default()).unwrap();
    let second = generate(&[post(), account()], &CodegenConfig::default()).unwrap();
    let third = generate(&[account(), post()], &CodegenConfig::default()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, third);
}
