// crates/fieldframe-core/tests/registry.rs
// ============================================================================
// Module: Field Type Registry Tests
// Description: Validate the builtin field type catalog and group checks.
// Purpose: Ensure catalog lookups and unknown-type rejection behave.
// Dependencies: fieldframe-core
// ============================================================================

//! Field type registry behavior tests over the builtin catalog.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    reason = "Test-only assertions and helpers are permitted."
)]

use fieldframe_core::Field;
use fieldframe_core::FieldGroup;
use fieldframe_core::FieldTypeKey;
use fieldframe_core::FieldTypeRegistry;
use fieldframe_core::GroupError;

#[test]
fn builtin_catalog_registers_every_shipped_type() {
    let registry = FieldTypeRegistry::builtin();
    let expected = [
        "text",
        "textarea",
        "number",
        "email",
        "url",
        "wysiwyg",
        "image",
        "file",
        "select",
        "checkbox",
        "radio",
        "true_false",
        "date_picker",
        "time_picker",
        "repeater",
        "group",
        "flexible_content",
    ];
    for key in expected {
        assert!(registry.contains(&FieldTypeKey::new(key)), "missing {key}");
    }
    assert_eq!(registry.keys().len(), expected.len());
}

#[test]
fn specs_carry_defaults_and_summaries_group_by_category() {
    let registry = FieldTypeRegistry::builtin();
    let text = registry.get(&FieldTypeKey::new("text")).expect("text registered");
    assert_eq!(text.label, "Text");
    assert!(text.defaults.get("maxlength").is_some());

    let grouped = registry.by_category();
    let basic = grouped.get("basic").expect("basic category present");
    assert!(basic.iter().any(|summary| summary.field_type.as_str() == "number"));
}

#[test]
fn unknown_type_lookups_return_none() {
    let registry = FieldTypeRegistry::builtin();
    assert!(registry.get(&FieldTypeKey::new("hologram")).is_none());
    assert!(!registry.contains(&FieldTypeKey::new("hologram")));
}

#[test]
fn validate_against_rejects_unregistered_field_types() {
    let registry = FieldTypeRegistry::builtin();
    let valid = FieldGroup::new("Meta", "group_meta")
        .with_field(Field::new("field_title", "Title", "title", "text"));
    assert!(valid.validate_against(&registry).is_ok());

    let invalid = FieldGroup::new("Meta", "group_meta_bad")
        .with_field(Field::new("field_odd", "Odd", "odd", "hologram"));
    let error = invalid.validate_against(&registry).expect_err("unknown type must fail");
    assert!(matches!(error, GroupError::UnknownFieldType(_)), "got {error:?}");
}
