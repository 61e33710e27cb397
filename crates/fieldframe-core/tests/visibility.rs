// crates/fieldframe-core/tests/visibility.rs
// ============================================================================
// Module: Conditional Visibility Tests
// Description: Validate conditional field visibility over form values.
// Purpose: Ensure AND/OR combination and loose comparison semantics.
// Dependencies: fieldframe-core, serde_json
// ============================================================================

//! Conditional visibility behavior tests against submitted form values.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only assertions and helpers are permitted."
)]

use fieldframe_core::ConditionRule;
use fieldframe_core::ConditionalLogic;
use fieldframe_core::Field;
use fieldframe_core::FormValues;
use fieldframe_core::is_field_visible;
use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn field_with_logic(logic: ConditionalLogic) -> Field {
    Field::new("field_detail", "Detail", "detail", "text").with_conditional_logic(logic)
}

fn values(pairs: &[(&str, Value)]) -> FormValues {
    pairs.iter().map(|(name, value)| ((*name).to_string(), value.clone())).collect()
}

// ============================================================================
// SECTION: Defaults
// ============================================================================

#[test]
fn field_without_logic_is_always_visible() {
    let field = Field::new("field_plain", "Plain", "plain", "text");
    assert!(is_field_visible(&field, &FormValues::new()));
}

#[test]
fn field_with_empty_rule_list_is_visible() {
    let field = field_with_logic(ConditionalLogic::all(Vec::new()));
    assert!(is_field_visible(&field, &FormValues::new()));
}

#[test]
fn rule_without_field_name_hides_the_field() {
    let mut rule = ConditionRule::new("other", "==", json!("x"));
    rule.field = None;
    let field = field_with_logic(ConditionalLogic::all(vec![rule]));
    assert!(!is_field_visible(&field, &values(&[("other", json!("x"))])));
}

// ============================================================================
// SECTION: Combinators
// ============================================================================

#[test]
fn and_logic_requires_every_rule() {
    let logic = ConditionalLogic::all(vec![
        ConditionRule::new("kind", "==", json!("video")),
        ConditionRule::new("duration", ">", json!(60)),
    ]);
    let field = field_with_logic(logic);

    assert!(is_field_visible(
        &field,
        &values(&[("kind", json!("video")), ("duration", json!(90))])
    ));
    assert!(!is_field_visible(
        &field,
        &values(&[("kind", json!("video")), ("duration", json!(30))])
    ));
    assert!(!is_field_visible(&field, &values(&[("kind", json!("video"))])));
}

#[test]
fn or_logic_requires_any_rule() {
    let logic = ConditionalLogic::any(vec![
        ConditionRule::new("kind", "==", json!("video")),
        ConditionRule::new("kind", "==", json!("audio")),
    ]);
    let field = field_with_logic(logic);

    assert!(is_field_visible(&field, &values(&[("kind", json!("audio"))])));
    assert!(!is_field_visible(&field, &values(&[("kind", json!("text"))])));
    assert!(!is_field_visible(&field, &FormValues::new()));
}

// ============================================================================
// SECTION: Loose Comparison
// ============================================================================

#[test]
fn numeric_strings_compare_equal_to_numbers() {
    let logic =
        ConditionalLogic::all(vec![ConditionRule::new("count", "==", json!(5))]);
    let field = field_with_logic(logic);
    assert!(is_field_visible(&field, &values(&[("count", json!("5"))])));
    assert!(is_field_visible(&field, &values(&[("count", json!("5.0"))])));
    assert!(!is_field_visible(&field, &values(&[("count", json!("6"))])));
}

#[test]
fn not_empty_distinguishes_content_from_blank_values() {
    let logic =
        ConditionalLogic::all(vec![ConditionRule::new("subtitle", "not_empty", Value::Null)]);
    let field = field_with_logic(logic);

    assert!(is_field_visible(&field, &values(&[("subtitle", json!("x"))])));
    assert!(!is_field_visible(&field, &values(&[("subtitle", json!(""))])));
    assert!(!is_field_visible(&field, &values(&[("subtitle", Value::Null)])));
    // Absent values also count as empty.
    assert!(!is_field_visible(&field, &FormValues::new()));
    // PHP-style emptiness: "0", 0, and false are all empty.
    assert!(!is_field_visible(&field, &values(&[("subtitle", json!("0"))])));
    assert!(!is_field_visible(&field, &values(&[("subtitle", json!(0))])));
    assert!(!is_field_visible(&field, &values(&[("subtitle", json!(false))])));
}

#[test]
fn substring_operators_coerce_values_to_text() {
    let logic = ConditionalLogic::all(vec![ConditionRule::new(
        "slug",
        "starts_with",
        json!("intro"),
    )]);
    let field = field_with_logic(logic);
    assert!(is_field_visible(&field, &values(&[("slug", json!("intro-to-rust"))])));
    assert!(!is_field_visible(&field, &values(&[("slug", json!("advanced-intro"))])));
}

#[test]
fn unknown_operator_hides_the_field() {
    let logic =
        ConditionalLogic::all(vec![ConditionRule::new("kind", "resembles", json!("video"))]);
    let field = field_with_logic(logic);
    assert!(!is_field_visible(&field, &values(&[("kind", json!("video"))])));
}
