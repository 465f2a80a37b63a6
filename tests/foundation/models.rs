//! Integration tests for Model and Field
//!
//! Tests builders, field type parsing, system field exclusion, and set validation.

use std::str::FromStr;

use modelgen_foundation::{ErrorKind, Field, FieldType, LinkKind, Model, SYSTEM_FIELD_SLUGS};

// =============================================================================
// Field Types
// =============================================================================

#[test]
fn field_type_parsing() {
    for field_type in FieldType::ALL {
        assert_eq!(FieldType::from_str(field_type.as_str()), Ok(field_type));
    }
    assert_eq!(
        FieldType::from_str("unsupported_xyz"),
        Err("unsupported_xyz".to_string())
    );
}

#[test]
fn raw_type_is_kept_until_resolved() {
    let field = Field::of_type("unsupported_xyz");
    assert_eq!(field.type_name, "unsupported_xyz");
    assert!(field.field_type().is_err());
}

#[test]
fn link_builders() {
    let one = Field::link("account");
    assert_eq!(one.field_type(), Ok(FieldType::Link));
    assert_eq!(one.link_kind(), LinkKind::One);
    assert!(!one.is_many_link());

    let many = Field::link("account").many().required();
    assert_eq!(many.link_kind(), LinkKind::Many);
    assert!(many.is_many_link());
    assert!(many.required);
    assert_eq!(many.target.as_deref(), Some("account"));
}

// =============================================================================
// Models
// =============================================================================

#[test]
fn declared_fields_skip_system_fields_and_sort() {
    let mut model = Model::new("account");
    for slug in SYSTEM_FIELD_SLUGS {
        model = model.with_field(slug, Field::string());
    }
    model = model
        .with_field("name", Field::string())
        .with_field("email", Field::string().required());

    let slugs: Vec<_> = model.declared_fields().map(|(slug, _)| slug).collect();
    assert_eq!(slugs, vec!["email", "name"]);
}

#[test]
fn model_metadata() {
    let model = Model::new("person")
        .with_plural("people")
        .with_name("Person")
        .with_summary("Someone we know.");
    assert_eq!(model.plural_slug(), "people");
    assert_eq!(model.display_name(), "Person");
    assert_eq!(model.summary.as_deref(), Some("Someone we know."));
    assert_eq!(Model::new("account").display_name(), "account");
}

#[test]
fn has_field_of_type() {
    let model = Model::new("file")
        .with_field("data", Field::blob())
        .with_field("id", Field::json());
    assert!(model.has_field_of(FieldType::Blob));
    // `id` is a system field and does not count.
    assert!(!model.has_field_of(FieldType::Json));
}

// =============================================================================
// Set Validation
// =============================================================================

#[test]
fn validate_set_accepts_unique_slugs() {
    let models = vec![Model::new("account"), Model::new("post")];
    assert!(Model::validate_set(&models).is_ok());
    assert!(Model::validate_set(&[]).is_ok());
}

#[test]
fn validate_set_rejects_duplicates() {
    let dup_slug = vec![Model::new("account"), Model::new("account")];
    let err = Model::validate_set(&dup_slug).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidModel(_)));

    let dup_plural = vec![
        Model::new("person").with_plural("people"),
        Model::new("human").with_plural("people"),
    ];
    assert!(Model::validate_set(&dup_plural).is_err());
}

#[test]
fn validate_set_rejects_slug_plural_collisions() {
    let own_plural = vec![Model::new("news").with_plural("news")];
    assert!(Model::validate_set(&own_plural).is_err());

    let derived_plural = vec![Model::new("a"), Model::new("as")];
    let err = Model::validate_set(&derived_plural).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidModel(_)));
}
