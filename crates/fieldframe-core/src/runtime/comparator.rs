// crates/fieldframe-core/src/runtime/comparator.rs
// ============================================================================
// Module: Fieldframe Comparator Logic
// Description: Loose-coercion operator evaluation shared by both engines.
// Purpose: Reproduce numeric-string equality and text substring semantics.
// Dependencies: crate::core::location, bigdecimal, serde_json
// ============================================================================

//! ## Overview
//! Rule values arrive as untrusted strings while entity attributes and form
//! values are JSON; equality must treat numeric strings and numbers as
//! interchangeable. The coercion ladder tries decimal-aware comparison first
//! and falls back to text forms, with a deliberate fail-closed default:
//! unknown operators evaluate to non-match, never an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::str::FromStr;

use bigdecimal::BigDecimal;
use bigdecimal::Zero;
use serde_json::Value;

use crate::core::location::RuleOperator;

// ============================================================================
// SECTION: Operator Evaluation
// ============================================================================

/// Evaluates an operator against an actual and an expected value.
///
/// Both engines share this table; placement rejects `empty`/`not_empty`
/// before reaching it, so those arms only serve conditional logic. They
/// ignore the expected side entirely.
#[must_use]
pub fn loose_compare(actual: &Value, operator: &RuleOperator, expected: &Value) -> bool {
    match operator {
        RuleOperator::Equals => loose_eq(actual, expected),
        RuleOperator::NotEquals => !loose_eq(actual, expected),
        RuleOperator::GreaterThan
        | RuleOperator::LessThan
        | RuleOperator::GreaterThanOrEqual
        | RuleOperator::LessThanOrEqual => loose_ordering(actual, operator, expected),
        RuleOperator::Contains => coerce_text(actual).contains(&coerce_text(expected)),
        RuleOperator::NotContains => !coerce_text(actual).contains(&coerce_text(expected)),
        RuleOperator::StartsWith => coerce_text(actual).starts_with(&coerce_text(expected)),
        RuleOperator::EndsWith => coerce_text(actual).ends_with(&coerce_text(expected)),
        RuleOperator::Empty => is_empty_value(actual),
        RuleOperator::NotEmpty => !is_empty_value(actual),
        RuleOperator::Other(_) => false,
    }
}

/// Convenience wrapper comparing against a rule's string literal.
#[must_use]
pub fn loose_compare_literal(actual: &Value, operator: &RuleOperator, expected: &str) -> bool {
    loose_compare(actual, operator, &Value::String(expected.to_string()))
}

// ============================================================================
// SECTION: Coercion Ladder
// ============================================================================

/// Compares two values for loose equality.
///
/// Numeric strings equal numeric values; everything else falls back to the
/// text forms, which makes `true == "1"` and `null == ""` hold.
#[must_use]
pub fn loose_eq(left: &Value, right: &Value) -> bool {
    if let (Some(left_num), Some(right_num)) = (coerce_decimal(left), coerce_decimal(right)) {
        return left_num == right_num;
    }
    coerce_text(left) == coerce_text(right)
}

/// Applies an ordering operator with decimal-then-text coercion.
fn loose_ordering(left: &Value, operator: &RuleOperator, right: &Value) -> bool {
    let ordering = if let (Some(left_num), Some(right_num)) =
        (coerce_decimal(left), coerce_decimal(right))
    {
        left_num.cmp(&right_num)
    } else {
        coerce_text(left).cmp(&coerce_text(right))
    };
    match operator {
        RuleOperator::GreaterThan => ordering.is_gt(),
        RuleOperator::LessThan => ordering.is_lt(),
        RuleOperator::GreaterThanOrEqual => ordering.is_ge(),
        RuleOperator::LessThanOrEqual => ordering.is_le(),
        _ => false,
    }
}

/// Coerces a value to a decimal when it is a number or numeric string.
#[must_use]
pub fn coerce_decimal(value: &Value) -> Option<BigDecimal> {
    match value {
        Value::Number(number) => BigDecimal::from_str(&number.to_string()).ok(),
        Value::String(text) => BigDecimal::from_str(text.trim()).ok(),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Coerces a value to its text form.
///
/// Null renders as the empty string and booleans as `"1"`/`""`, matching
/// loose string casts so rule literals authored as text keep matching.
#[must_use]
pub fn coerce_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => {
            if *flag {
                "1".to_string()
            } else {
                String::new()
            }
        }
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string(value).unwrap_or_default()
        }
    }
}

/// Returns whether a value is empty-equivalent.
///
/// Empty means null, `false`, the empty string, the string `"0"`, numeric
/// zero, or an empty collection.
#[must_use]
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => {
            BigDecimal::from_str(&number.to_string()).is_ok_and(|decimal| decimal.is_zero())
        }
        Value::String(text) => text.is_empty() || text == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
    }
}
