// crates/fieldframe-core/tests/validation.rs
// ============================================================================
// Module: Field Content Validation Tests
// Description: Validate derived rule sets and submission checking.
// Purpose: Ensure type, requirement, and config constraints are enforced.
// Dependencies: fieldframe-core, serde_json
// ============================================================================

//! Field content validation tests over derived validation plans.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use fieldframe_core::Constraint;
use fieldframe_core::Field;
use fieldframe_core::FieldConfig;
use fieldframe_core::FieldGroup;
use fieldframe_core::SubmittedValues;
use fieldframe_core::ValidationPlan;
use fieldframe_core::derive_validation_rules;
use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn plan_for(fields: Vec<Field>) -> ValidationPlan {
    let mut group = FieldGroup::new("Test", "group_test");
    for field in fields {
        group = group.with_field(field);
    }
    derive_validation_rules(&[group])
}

fn submission(pairs: &[(&str, Value)]) -> SubmittedValues {
    pairs.iter().map(|(name, value)| ((*name).to_string(), value.clone())).collect()
}

// ============================================================================
// SECTION: Rule Derivation
// ============================================================================

#[test]
fn required_text_field_derives_required_and_string_rules() {
    let plan = plan_for(vec![Field::new("field_title", "Title", "title", "text")
        .required()
        .with_config(FieldConfig::new().with("maxlength", json!(10)))]);
    let rules = plan.rules().get("title").expect("rules derived");
    assert_eq!(rules.label, "Title");
    assert!(rules.constraints.contains(&Constraint::Required));
    assert!(rules.constraints.contains(&Constraint::TypeString));
    assert!(rules.constraints.contains(&Constraint::MaxLength(10)));
}

#[test]
fn optional_field_derives_nullable() {
    let plan = plan_for(vec![Field::new("field_note", "Note", "note", "textarea")]);
    let rules = plan.rules().get("note").expect("rules derived");
    assert!(rules.constraints.contains(&Constraint::Nullable));
    assert!(!rules.constraints.contains(&Constraint::Required));
}

#[test]
fn select_field_derives_choice_membership() {
    let config = FieldConfig::new().with(
        "choices",
        json!({"red": "Red", "green": "Green"}),
    );
    let plan =
        plan_for(vec![Field::new("field_color", "Color", "color", "select").with_config(config)]);
    let rules = plan.rules().get("color").expect("rules derived");
    let one_of = rules.constraints.iter().find_map(|constraint| match constraint {
        Constraint::OneOf(keys) => Some(keys.clone()),
        _ => None,
    });
    let mut keys = one_of.expect("one_of derived");
    keys.sort();
    assert_eq!(keys, vec!["green".to_string(), "red".to_string()]);
}

#[test]
fn unknown_field_type_only_checks_requiredness() {
    let plan = plan_for(vec![Field::new("field_custom", "Custom", "custom", "hologram")]);
    let rules = plan.rules().get("custom").expect("rules derived");
    assert_eq!(rules.constraints, vec![Constraint::Nullable]);
}

// ============================================================================
// SECTION: Submission Checking
// ============================================================================

#[test]
fn required_with_maxlength_accepts_and_rejects_boundaries() {
    let plan = plan_for(vec![Field::new("field_title", "Title", "title", "text")
        .required()
        .with_config(FieldConfig::new().with("maxlength", json!(10)))]);

    let ok = plan.apply(&submission(&[("title", json!("short"))]));
    assert!(ok.is_ok());

    let too_long = plan.apply(&submission(&[("title", json!("elevenchars"))]));
    assert!(too_long.is_err());

    let empty = plan.apply(&submission(&[("title", json!(""))]));
    let errors = empty.expect_err("empty required value must fail");
    let messages = errors.errors.get("title").expect("title failed");
    assert!(messages.iter().any(|message| message.contains("Title is required")));
}

#[test]
fn missing_required_field_fails_and_missing_optional_passes() {
    let plan = plan_for(vec![
        Field::new("field_title", "Title", "title", "text").required(),
        Field::new("field_note", "Note", "note", "text"),
    ]);
    let errors = plan.apply(&SubmittedValues::new()).expect_err("missing required");
    assert!(errors.errors.contains_key("title"));
    assert!(!errors.errors.contains_key("note"));
}

#[test]
fn apply_collects_every_failure() {
    let plan = plan_for(vec![
        Field::new("field_email", "Email", "email", "email").required(),
        Field::new("field_count", "Count", "count", "number")
            .required()
            .with_config(FieldConfig::new().with("min", json!(1)).with("max", json!(10))),
    ]);
    let errors = plan
        .apply(&submission(&[("email", json!("nope")), ("count", json!(99))]))
        .expect_err("both fields must fail");
    assert_eq!(errors.errors.len(), 2);
}

#[test]
fn success_returns_planned_values_only() {
    let plan = plan_for(vec![Field::new("field_title", "Title", "title", "text")]);
    let validated = plan
        .apply(&submission(&[("title", json!("hello")), ("stray", json!("ignored"))]))
        .expect("valid submission");
    assert_eq!(validated.len(), 1);
    assert_eq!(validated.get("title"), Some(&json!("hello")));
}

// ============================================================================
// SECTION: Type Checks
// ============================================================================

#[test]
fn email_url_and_date_types_are_structurally_checked() {
    let plan = plan_for(vec![
        Field::new("field_email", "Email", "email", "email"),
        Field::new("field_link", "Link", "link", "url"),
        Field::new("field_day", "Day", "day", "date_picker"),
    ]);

    assert!(plan
        .apply(&submission(&[
            ("email", json!("user@example.com")),
            ("link", json!("https://example.com/page")),
            ("day", json!("2026-08-30")),
        ]))
        .is_ok());

    let errors = plan
        .apply(&submission(&[
            ("email", json!("not-an-email")),
            ("link", json!("not a url")),
            ("day", json!("yesterday")),
        ]))
        .expect_err("all three must fail");
    assert_eq!(errors.errors.len(), 3);
}

#[test]
fn numeric_strings_satisfy_numeric_constraints() {
    let plan = plan_for(vec![Field::new("field_count", "Count", "count", "number")
        .with_config(FieldConfig::new().with("min", json!(1)).with("max", json!(10)))]);
    assert!(plan.apply(&submission(&[("count", json!("5"))])).is_ok());
    assert!(plan.apply(&submission(&[("count", json!("0"))])).is_err());
    assert!(plan.apply(&submission(&[("count", json!("abc"))])).is_err());
}

#[test]
fn true_false_accepts_bool_and_bit_values() {
    let plan = plan_for(vec![Field::new("field_flag", "Flag", "flag", "true_false")]);
    assert!(plan.apply(&submission(&[("flag", json!(true))])).is_ok());
    assert!(plan.apply(&submission(&[("flag", json!(1))])).is_ok());
    assert!(plan.apply(&submission(&[("flag", json!("0"))])).is_ok());
    assert!(plan.apply(&submission(&[("flag", json!("maybe"))])).is_err());
}

#[test]
fn checkbox_values_must_be_subsets_of_choices() {
    let config = FieldConfig::new().with("choices", json!({"a": "A", "b": "B"}));
    let plan = plan_for(vec![
        Field::new("field_tags", "Tags", "tags", "checkbox").with_config(config),
    ]);
    assert!(plan.apply(&submission(&[("tags", json!(["a", "b"]))])).is_ok());
    assert!(plan.apply(&submission(&[("tags", json!(["a", "z"]))])).is_err());
    assert!(plan.apply(&submission(&[("tags", json!("a"))])).is_err());
}
