// crates/fieldframe-core/tests/proptest_comparator.rs
// ============================================================================
// Module: Comparator Property-Based Tests
// Description: Property tests for loose comparison correctness and stability.
// Purpose: Detect panics and invariants across wide input ranges.
// ============================================================================

//! Property-based tests for loose comparison invariants.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use fieldframe_core::RuleOperator;
use fieldframe_core::loose_compare;
use fieldframe_core::loose_eq;
use proptest::prelude::*;
use serde_json::Value;
use serde_json::json;

fn json_value_strategy(max_depth: u32) -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|v| Value::Number(v.into())),
        any::<f64>()
            .prop_filter("finite", |v| v.is_finite())
            .prop_map(|v| { serde_json::Number::from_f64(v).map_or(Value::Null, Value::Number) }),
        ".*".prop_map(Value::String),
    ];

    leaf.prop_recursive(max_depth, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0 .. 4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0 .. 4).prop_map(|map| {
                let mut object = serde_json::Map::new();
                for (key, value) in map {
                    object.insert(key, value);
                }
                Value::Object(object)
            }),
        ]
    })
}

fn operator_strategy() -> impl Strategy<Value = RuleOperator> {
    prop_oneof![
        Just(RuleOperator::Equals),
        Just(RuleOperator::NotEquals),
        Just(RuleOperator::GreaterThan),
        Just(RuleOperator::LessThan),
        Just(RuleOperator::GreaterThanOrEqual),
        Just(RuleOperator::LessThanOrEqual),
        Just(RuleOperator::Contains),
        Just(RuleOperator::NotContains),
        Just(RuleOperator::StartsWith),
        Just(RuleOperator::EndsWith),
        Just(RuleOperator::Empty),
        Just(RuleOperator::NotEmpty),
        "[a-z_]{1,12}".prop_map(RuleOperator::Other),
    ]
}

proptest! {
    #[test]
    fn loose_compare_never_panics(
        actual in json_value_strategy(3),
        operator in operator_strategy(),
        expected in json_value_strategy(3),
    ) {
        let _ = loose_compare(&actual, &operator, &expected);
    }

    #[test]
    fn numeric_equality_is_correct(a in any::<i64>(), b in any::<i64>()) {
        let result = loose_compare(&json!(a), &RuleOperator::Equals, &json!(b));
        prop_assert_eq!(result, a == b);
    }

    #[test]
    fn numeric_strings_equal_their_numbers(a in any::<i64>()) {
        prop_assert!(loose_eq(&json!(a.to_string()), &json!(a)));
    }

    #[test]
    fn equality_is_symmetric(
        left in json_value_strategy(2),
        right in json_value_strategy(2),
    ) {
        prop_assert_eq!(loose_eq(&left, &right), loose_eq(&right, &left));
    }

    #[test]
    fn not_equals_negates_equals(
        left in json_value_strategy(2),
        right in json_value_strategy(2),
    ) {
        let equals = loose_compare(&left, &RuleOperator::Equals, &right);
        let not_equals = loose_compare(&left, &RuleOperator::NotEquals, &right);
        prop_assert_ne!(equals, not_equals);
    }

    #[test]
    fn numeric_ordering_is_correct(a in any::<i64>(), b in any::<i64>()) {
        let gt = loose_compare(&json!(a), &RuleOperator::GreaterThan, &json!(b));
        let lt = loose_compare(&json!(a), &RuleOperator::LessThan, &json!(b));
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => {
                prop_assert!(gt);
                prop_assert!(!lt);
            }
            std::cmp::Ordering::Less => {
                prop_assert!(!gt);
                prop_assert!(lt);
            }
            std::cmp::Ordering::Equal => {
                prop_assert!(!gt);
                prop_assert!(!lt);
            }
        }
    }

    #[test]
    fn empty_and_not_empty_are_complements(value in json_value_strategy(2)) {
        let empty = loose_compare(&value, &RuleOperator::Empty, &Value::Null);
        let not_empty = loose_compare(&value, &RuleOperator::NotEmpty, &Value::Null);
        prop_assert_ne!(empty, not_empty);
    }

    #[test]
    fn unknown_operators_fail_closed(
        actual in json_value_strategy(2),
        raw in "[a-z_]{1,12}",
        expected in json_value_strategy(2),
    ) {
        let operator = RuleOperator::from(raw.as_str());
        if matches!(operator, RuleOperator::Other(_)) {
            prop_assert!(!loose_compare(&actual, &operator, &expected));
        }
    }
}
