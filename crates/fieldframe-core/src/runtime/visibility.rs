// crates/fieldframe-core/src/runtime/visibility.rs
// ============================================================================
// Module: Fieldframe Conditional Visibility
// Description: Per-field visibility evaluation over form value snapshots.
// Purpose: Decide field visibility from sibling values, fail closed per rule.
// Dependencies: crate::core, crate::runtime::comparator
// ============================================================================

//! ## Overview
//! Visibility is a pure function over the field's conditional logic and an
//! immutable snapshot of the current form values. Absent logic or an empty
//! rule list means visible. Each rule compares one sibling value with the
//! shared operator table plus `empty`/`not_empty`; an unresolvable rule
//! (missing field name, unknown operator) evaluates to false, which fails
//! the AND combinator and contributes nothing under OR.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde_json::Value;

use crate::core::ConditionRule;
use crate::core::Field;
use crate::core::LogicCombinator;
use crate::runtime::comparator::loose_compare;

// ============================================================================
// SECTION: Visibility Evaluation
// ============================================================================

/// Snapshot of current form values keyed by field name.
pub type FormValues = BTreeMap<String, Value>;

/// Returns whether a field should currently be shown.
#[must_use]
pub fn is_field_visible(field: &Field, form_values: &FormValues) -> bool {
    let Some(logic) = &field.conditional_logic else {
        return true;
    };
    if logic.rules.is_empty() {
        return true;
    }

    let results: Vec<bool> =
        logic.rules.iter().map(|rule| evaluate_rule(rule, form_values)).collect();

    match logic.operator {
        LogicCombinator::Or => results.contains(&true),
        LogicCombinator::And => !results.contains(&false),
    }
}

/// Evaluates one conditional rule against the form values.
///
/// A rule without a field name is unresolvable and evaluates to false. A
/// missing sibling value is treated as null.
fn evaluate_rule(rule: &ConditionRule, form_values: &FormValues) -> bool {
    let Some(field_name) = &rule.field else {
        return false;
    };
    let actual = form_values.get(field_name).unwrap_or(&Value::Null);
    loose_compare(actual, &rule.operator, &rule.value)
}
