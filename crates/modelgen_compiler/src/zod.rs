//! Validation-schema emitter.
//!
//! Renders a model set to a module of Zod object schemas:
//!
//! ```ts
//! import { z } from "zod";
//!
//! export const AccountSchema = z.object({
//!   email: z.string(),
//!   name: z.string().optional(),
//! });
//! ```

use std::fmt::Write;

use modelgen_foundation::{Error, ErrorContext, FieldType, Model, Result};

use crate::config::EmitConfig;
use crate::emit::{is_identifier, write_string_literal};
use crate::naming::Naming;

/// Validator call for a field type.
#[must_use]
pub const fn validator(field_type: FieldType) -> &'static str {
    match field_type {
        FieldType::String => "z.string()",
        FieldType::Number => "z.number()",
        FieldType::Boolean => "z.boolean()",
        FieldType::Date => "z.date()",
        FieldType::Json | FieldType::Blob | FieldType::Link => "z.any()",
    }
}

/// Renders `models` to a Zod schema module.
///
/// Models are ordered by slug and fields by field slug. System fields are
/// included so parsed records keep their identity and audit values. An empty
/// model set yields the import followed by `export {};`.
///
/// # Errors
///
/// Fails with `UnsupportedFieldType` if any field declares an unknown type.
pub fn generate_zod_schema(models: &[Model], naming: &dyn Naming) -> Result<String> {
    generate_zod_schema_with_config(models, naming, &EmitConfig::default())
}

/// Renders `models` to a Zod schema module with custom formatting.
///
/// # Errors
///
/// Fails with `UnsupportedFieldType` if any field declares an unknown type.
pub fn generate_zod_schema_with_config(
    models: &[Model],
    naming: &dyn Naming,
    config: &EmitConfig,
) -> Result<String> {
    let mut out = String::from("import { z } from \"zod\";\n");
    if models.is_empty() {
        out.push_str("\nexport {};\n");
        return Ok(out);
    }

    let mut sorted: Vec<&Model> = models.iter().collect();
    sorted.sort_by(|a, b| a.slug.cmp(&b.slug));

    let indent = " ".repeat(config.indent_width);

    for model in sorted {
        out.push('\n');
        let _ = writeln!(
            out,
            "export const {} = z.object({{",
            naming.schema_name(&model.slug)
        );
        for (slug, field) in &model.fields {
            let field_type = field.field_type().map_err(|type_name| {
                Error::unsupported_field_type(&model.slug, slug, type_name)
                    .with_context(ErrorContext::new().with_source(&model.slug))
            })?;

            out.push_str(&indent);
            if is_identifier(slug) {
                out.push_str(slug);
            } else {
                write_string_literal(&mut out, slug);
            }
            out.push_str(": ");
            out.push_str(validator(field_type));
            if !field.required {
                out.push_str(".optional()");
            }
            out.push_str(",\n");
        }
        out.push_str("});\n");
    }

    Ok(out)
}
