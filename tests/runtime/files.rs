//! Integration tests for the load, render, and write pipeline

use std::fs;

use modelgen_compiler::CodegenConfig;
use modelgen_foundation::{ErrorKind, Field, Model};
use modelgen_runtime::{
    DECLARATIONS_FILE, OutputFormat, ZOD_FILE, load_models, render, save_models, write_output,
};

const SCHEMA: &str = r#"{
  "models": [
    {
      "slug": "post",
      "fields": {
        "title": { "type": "string", "required": true },
        "author": { "type": "link", "target": "account" },
        "tags": { "type": "link", "target": "tag", "kind": "many" }
      }
    },
    {
      "slug": "account",
      "name": "Account",
      "summary": "A registered user.",
      "fields": {
        "email": { "type": "string", "required": true },
        "ronin.createdAt": { "type": "date" }
      }
    }
  ]
}"#;

// =============================================================================
// End to End
// =============================================================================

#[test]
fn json_schema_to_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("schema.json");
    fs::write(&input, SCHEMA).unwrap();

    let models = load_models(&input).unwrap();
    assert_eq!(models.len(), 2);

    let rendered = render(&models, OutputFormat::All, &CodegenConfig::default()).unwrap();
    assert_eq!(rendered.diagnostics.len(), 1);
    assert_eq!(rendered.diagnostics[0].field, "tags");

    let out_dir = dir.path().join("out");
    let written = write_output(&out_dir, &rendered.files).unwrap();
    assert_eq!(
        written,
        vec![out_dir.join(DECLARATIONS_FILE), out_dir.join(ZOD_FILE)]
    );

    let declarations = fs::read_to_string(out_dir.join(DECLARATIONS_FILE)).unwrap();
    assert!(declarations.contains("    author: ResolveSchema<Account, TUsing, \"author\"> | null;\n"));
    assert!(declarations.contains("    tags: unknown;\n"));
    assert!(!declarations.contains("createdAt"));

    let zod = fs::read_to_string(out_dir.join(ZOD_FILE)).unwrap();
    assert!(zod.contains(
        "export const AccountSchema = z.object({\n  email: z.string(),\n  \"ronin.createdAt\": z.date().optional(),\n});\n"
    ));
}

#[test]
fn msgpack_roundtrip_compiles_identically() {
    let models = vec![
        Model::new("account").with_field("email", Field::string().required()),
        Model::new("post").with_field("author", Field::link("account")),
    ];
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("models.msgpack");
    save_models(&path, &models).unwrap();

    let loaded = load_models(&path).unwrap();
    let config = CodegenConfig::default();
    let before = render(&models, OutputFormat::Declarations, &config).unwrap();
    let after = render(&loaded, OutputFormat::Declarations, &config).unwrap();
    assert_eq!(before.files, after.files);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn unsupported_type_in_file_is_reported_with_field() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("schema.json");
    fs::write(
        &input,
        r#"[{"slug": "account", "fields": {"avatar": {"type": "unsupported_xyz"}}}]"#,
    )
    .unwrap();

    let models = load_models(&input).unwrap();
    let err = render(&models, OutputFormat::Declarations, &CodegenConfig::default()).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::UnsupportedFieldType { ref field, .. } if field == "avatar"
    ));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("schema.json");
    fs::write(&input, "{ not json").unwrap();
    let err = load_models(&input).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Serialization(_)));
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("schema.yaml");
    fs::write(&input, "models: []").unwrap();
    assert!(load_models(&input).is_err());
}

#[test]
fn colliding_type_names_are_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("schema.json");
    fs::write(&input, r#"[{"slug": "news", "pluralSlug": "news"}]"#).unwrap();
    let err = load_models(&input).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidModel(_)));
}
