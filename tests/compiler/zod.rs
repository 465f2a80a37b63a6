//! Integration tests for the Zod schema emitter

use modelgen_compiler::{PascalNaming, generate_zod_schema};
use modelgen_foundation::{ErrorKind, Field, Model};

#[test]
fn empty_model_set() {
    assert_eq!(
        generate_zod_schema(&[], &PascalNaming).unwrap(),
        "import { z } from \"zod\";\n\nexport {};\n"
    );
}

#[test]
fn every_field_type() {
    let models = vec![
        Model::new("record")
            .with_field("a", Field::string().required())
            .with_field("b", Field::number().required())
            .with_field("c", Field::boolean().required())
            .with_field("d", Field::date().required())
            .with_field("e", Field::json())
            .with_field("f", Field::blob())
            .with_field("g", Field::link("record").many()),
    ];
    let expected = "\
import { z } from \"zod\";

export const RecordSchema = z.object({
  a: z.string(),
  b: z.number(),
  c: z.boolean(),
  d: z.date(),
  e: z.any().optional(),
  f: z.any().optional(),
  g: z.any().optional(),
});
";
    assert_eq!(generate_zod_schema(&models, &PascalNaming).unwrap(), expected);
}

#[test]
fn model_without_fields() {
    let out = generate_zod_schema(&[Model::new("empty")], &PascalNaming).unwrap();
    assert!(out.ends_with("export const EmptySchema = z.object({\n});\n"));
}

#[test]
fn unsupported_type_is_rejected() {
    let models = vec![Model::new("a").with_field("x", Field::of_type("geo"))];
    let err = generate_zod_schema(&models, &PascalNaming).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnsupportedFieldType { .. }));
}

#[test]
fn system_fields_are_validated() {
    let models = vec![
        Model::new("account")
            .with_field("id", Field::string().required())
            .with_field("ronin.createdAt", Field::date())
            .with_field("email", Field::string().required()),
    ];
    let out = generate_zod_schema(&models, &PascalNaming).unwrap();
    assert!(out.contains("  id: z.string(),\n"));
    assert!(out.contains("  \"ronin.createdAt\": z.date().optional(),\n"));
    assert!(out.contains("  email: z.string(),\n"));
}
