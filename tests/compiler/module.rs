//! Integration tests for the module augmentation
//!
//! Tests the query entry points, accessor interfaces, and the syntax factory.

use modelgen_compiler::{CodegenConfig, Identifiers, generate};
use modelgen_foundation::{Field, Model};

const FACTORY_RETURN: &str = "{
    add: typeof add;
    count: typeof count;
    get: typeof get;
    remove: typeof remove;
    set: typeof set;
    alter: typeof alter;
    batch: typeof batch;
    create: typeof create;
    drop: typeof drop;
    sql: typeof sql;
    sqlBatch: typeof sqlBatch;
  }";

// =============================================================================
// Empty Model Set
// =============================================================================

#[test]
fn empty_model_set_is_complete() {
    let expected = format!(
        "\
import type {{ RONIN }} from \"ronin\";
import type {{ AddQuery, CountQuery, GetQuery, ListQuery, Model, RemoveQuery, SetQuery }} from \"@ronin/compiler\";
import type {{ DeepCallable, ResultRecord }} from \"@ronin/syntax/queries\";
import type {{ QueryHandlerOptions }} from \"ronin/types\";

declare module \"ronin\" {{
  interface Adders {{}}

  interface Counters {{}}

  interface Getters {{}}

  interface Removers {{}}

  interface Setters {{}}

  const add: {{}};

  const count: {{}};

  const get: {{
    /**
     * List all model definitions
     */
    models: DeepCallable<ListQuery[keyof ListQuery], Array<Model>>;
  }};

  const remove: {{}};

  const set: {{}};

  const createSyntaxFactory: (options: QueryHandlerOptions | (() => QueryHandlerOptions)) => {FACTORY_RETURN};

  export default function (options: QueryHandlerOptions | (() => QueryHandlerOptions)): {FACTORY_RETURN};
}}
"
    );
    assert_eq!(generate(&[], &CodegenConfig::default()).unwrap(), expected);
}

// =============================================================================
// Entry Points
// =============================================================================

#[test]
fn entry_points_per_operation() {
    let models = vec![Model::new("account").with_field("email", Field::string().required())];
    let out = generate(&models, &CodegenConfig::default()).unwrap();

    assert!(out.contains(
        "    /**\n     * Get a single record of the Account model\n     */\n    account: DeepCallable<GetQuery[keyof GetQuery], Account | null>;\n"
    ));
    assert!(out.contains(
        "    /**\n     * Get multiple records of the Account model\n     */\n    accounts: DeepCallable<GetQuery[keyof GetQuery], Accounts>;\n"
    ));
    assert!(out.contains("    account: DeepCallable<AddQuery[keyof AddQuery], Account | null>;\n"));
    assert!(!out.contains("    accounts: DeepCallable<AddQuery[keyof AddQuery]"));
    assert!(out.contains("    account: DeepCallable<CountQuery[keyof CountQuery], number>;\n"));
    assert!(out.contains("    accounts: DeepCallable<CountQuery[keyof CountQuery], number>;\n"));
    assert!(out.contains("    accounts: DeepCallable<RemoveQuery[keyof RemoveQuery], Accounts>;\n"));
    assert!(out.contains("    accounts: DeepCallable<SetQuery[keyof SetQuery], Accounts>;\n"));
    assert!(out.contains("    account: DeepCallable<RemoveQuery[keyof RemoveQuery], Account | null>;\n"));
    assert!(out.contains("    account: DeepCallable<SetQuery[keyof SetQuery], Account | null>;\n"));
    assert!(out.contains("    models: DeepCallable<ListQuery[keyof ListQuery], Array<Model>>;\n"));
}

#[test]
fn model_name_is_used_in_comments() {
    let models = vec![Model::new("blog_post").with_name("Blog Post")];
    let out = generate(&models, &CodegenConfig::default()).unwrap();
    assert!(out.contains("     * Count multiple records of the Blog Post model\n"));
    assert!(out.contains("    blog_posts: DeepCallable<CountQuery[keyof CountQuery], number>;\n"));
    assert!(out.contains("  export type BlogPosts = "));
}

// =============================================================================
// Accessor Interfaces
// =============================================================================

#[test]
fn accessor_interfaces_and_groups() {
    let models = vec![Model::new("person").with_plural("people")];
    let out = generate(&models, &CodegenConfig::default()).unwrap();

    assert!(out.contains("  interface PersonAdder extends RONIN.IAdder<PersonSchema> {}\n"));
    assert!(out.contains("  interface PeopleAdder extends RONIN.IAdder<PersonSchema> {}\n"));
    assert!(out.contains("  interface PersonGetter extends RONIN.IGetterSingular<PersonSchema> {}\n"));
    assert!(out.contains("  interface PeopleGetter extends RONIN.IGetterPlural<PersonSchema> {}\n"));
    assert!(out.contains("  interface PeopleSetter extends RONIN.ISetter<PersonSchema> {}\n"));
    assert!(out.contains(
        "  interface Getters {\n    person: PersonGetter;\n    people: PeopleGetter;\n  }\n"
    ));
    assert!(out.contains(
        "  interface Removers {\n    person: PersonRemover;\n    people: PeopleRemover;\n  }\n"
    ));
}

#[test]
fn models_are_emitted_in_slug_order() {
    let models = vec![Model::new("zebra"), Model::new("apple"), Model::new("mango")];
    let out = generate(&models, &CodegenConfig::default()).unwrap();
    let apple = out.find("interface AppleSchema").unwrap();
    let mango = out.find("interface MangoSchema").unwrap();
    let zebra = out.find("interface ZebraSchema").unwrap();
    assert!(apple < mango && mango < zebra);
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn custom_module_name() {
    let config = CodegenConfig::default().with_module("@acme/db");
    let out = generate(&[], &config).unwrap();
    assert!(out.contains("declare module \"@acme/db\" {\n"));
    assert!(out.contains("import type { RONIN } from \"@acme/db\";\n"));
}

#[test]
fn custom_identifiers() {
    let identifiers = Identifiers {
        namespace: "DB".to_string(),
        ..Identifiers::default()
    };
    let config = CodegenConfig::default().with_identifiers(identifiers);
    let out = generate(&[Model::new("account")], &config).unwrap();
    assert!(out.contains("  interface AccountAdder extends DB.IAdder<AccountSchema> {}\n"));
}
