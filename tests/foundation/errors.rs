//! Integration tests for Error types
//!
//! Tests error construction, display, context, and fatality.

use modelgen_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_unsupported_field_type() {
    let err = Error::unsupported_field_type("account", "avatar", "unsupported_xyz");
    assert!(matches!(err.kind, ErrorKind::UnsupportedFieldType { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("account.avatar"));
    assert!(msg.contains("unsupported_xyz"));
}

#[test]
fn error_unresolved_reference() {
    let err = Error::unresolved_reference("post", "author", "ghost");
    assert!(matches!(err.kind, ErrorKind::UnresolvedReference { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("post.author"));
    assert!(msg.contains("ghost"));
}

#[test]
fn error_invalid_model() {
    let err = Error::invalid_model("duplicate model slug 'a'");
    assert!(matches!(err.kind, ErrorKind::InvalidModel(_)));
    assert!(format!("{err}").contains("duplicate model slug"));
}

// =============================================================================
// Fatality
// =============================================================================

#[test]
fn only_unresolved_references_are_recoverable() {
    assert!(!Error::unresolved_reference("a", "b", "c").is_fatal());
    assert!(Error::unsupported_field_type("a", "b", "c").is_fatal());
    assert!(Error::invalid_model("x").is_fatal());
    assert!(Error::new(ErrorKind::Io("x".to_string())).is_fatal());
    assert!(Error::new(ErrorKind::Serialization("x".to_string())).is_fatal());
    assert!(Error::new(ErrorKind::Internal("x".to_string())).is_fatal());
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_context_display() {
    let ctx = ErrorContext::new()
        .with_source("models.json")
        .with_frame("model account")
        .with_frame("field avatar");
    let rendered = format!("{ctx}");
    assert!(rendered.starts_with("at models.json"));
    assert!(rendered.contains("  in model account\n"));
    assert!(rendered.contains("  in field avatar\n"));
}

#[test]
fn error_context_is_attached() {
    let err = Error::invalid_model("bad").with_context(ErrorContext::new().with_source("x.json"));
    assert_eq!(
        err.context.and_then(|ctx| ctx.source),
        Some("x.json".to_string())
    );
}
