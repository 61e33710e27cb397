// crates/fieldframe-core/src/core/logic.rs
// ============================================================================
// Module: Fieldframe Conditional Logic
// Description: Per-field visibility rule specifications.
// Purpose: Define the conditional-logic payload attached to fields.
// Dependencies: crate::core::location, serde, serde_json
// ============================================================================

//! ## Overview
//! Conditional logic decides whether a field is shown given sibling form
//! values. A spec combines an ordered rule list with an `and`/`or`
//! combinator; an absent spec or an empty rule list means always visible.
//! Rules missing their `field` key stay representable and evaluate to false.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::core::location::RuleOperator;

// ============================================================================
// SECTION: Combinator
// ============================================================================

/// How conditional rules combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicCombinator {
    /// All rules must pass (strictly: no rule may evaluate false).
    #[default]
    And,
    /// At least one rule must evaluate true.
    Or,
}

// ============================================================================
// SECTION: Conditional Rules
// ============================================================================

/// One visibility rule comparing a sibling field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionRule {
    /// Sibling field name; a missing name makes the rule unresolvable.
    #[serde(default)]
    pub field: Option<String>,
    /// Comparison operator; defaults to loose equality.
    #[serde(default = "default_condition_operator")]
    pub operator: RuleOperator,
    /// Expected value; defaults to null.
    #[serde(default)]
    pub value: Value,
}

impl ConditionRule {
    /// Creates a rule against a sibling field.
    #[must_use]
    pub fn new(field: impl Into<String>, operator: impl Into<RuleOperator>, value: Value) -> Self {
        Self {
            field: Some(field.into()),
            operator: operator.into(),
            value,
        }
    }
}

/// Returns the default operator for conditional rules.
fn default_condition_operator() -> RuleOperator {
    RuleOperator::Equals
}

/// Conditional visibility specification attached to a field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionalLogic {
    /// Rule combinator; defaults to `and`.
    #[serde(default)]
    pub operator: LogicCombinator,
    /// Ordered visibility rules; empty means always visible.
    #[serde(default)]
    pub rules: Vec<ConditionRule>,
}

impl ConditionalLogic {
    /// Creates a spec that ANDs the given rules.
    #[must_use]
    pub const fn all(rules: Vec<ConditionRule>) -> Self {
        Self {
            operator: LogicCombinator::And,
            rules,
        }
    }

    /// Creates a spec that ORs the given rules.
    #[must_use]
    pub const fn any(rules: Vec<ConditionRule>) -> Self {
        Self {
            operator: LogicCombinator::Or,
            rules,
        }
    }
}
