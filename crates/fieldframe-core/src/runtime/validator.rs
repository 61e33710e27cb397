// crates/fieldframe-core/src/runtime/validator.rs
// ============================================================================
// Module: Fieldframe Content Validation
// Description: Validation rule derivation and application for resolved groups.
// Purpose: Derive per-field constraints and collect structured field errors.
// Dependencies: crate::core, crate::runtime::comparator, bigdecimal, time, url
// ============================================================================

//! ## Overview
//! Validation runs in two steps. Rule derivation walks the resolved field
//! groups and builds a constraint list per field from the `required` flag,
//! the field type, and the type-specific configuration. Application checks
//! submitted values against every constraint, collecting all failures keyed
//! by field name with the field label as the human-readable subject; there
//! is no early abort.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use bigdecimal::BigDecimal;
use serde::Serialize;
use serde_json::Value;
use time::Date;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::core::Field;
use crate::core::FieldGroup;
use crate::runtime::comparator::coerce_decimal;
use crate::runtime::comparator::coerce_text;

// ============================================================================
// SECTION: Constraints
// ============================================================================

/// One validation constraint derived for a field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "rule", content = "arg")]
pub enum Constraint {
    /// Value must be present and non-empty.
    Required,
    /// Absent or empty values skip the remaining constraints.
    Nullable,
    /// Value must be a string.
    TypeString,
    /// Value must be a string with a plausible email shape.
    TypeEmail,
    /// Value must be a string parsing as a URL with a host.
    TypeUrl,
    /// Value must be a number or numeric string.
    TypeNumeric,
    /// Value must be a parseable date.
    TypeDate,
    /// Value must be boolean-equivalent.
    TypeBoolean,
    /// Value must be a list.
    TypeArray,
    /// String length must not exceed the limit.
    MaxLength(u64),
    /// Numeric value must not fall below the bound.
    MinValue(f64),
    /// Numeric value must not exceed the bound.
    MaxValue(f64),
    /// Value must be one of the configured choice keys.
    OneOf(Vec<String>),
    /// Every list element must be one of the configured choice keys.
    SubsetOf(Vec<String>),
}

/// Derived rule set for one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldRules {
    /// Field label used as the error message subject.
    pub label: String,
    /// Ordered constraints.
    pub constraints: Vec<Constraint>,
}

// ============================================================================
// SECTION: Validation Plan
// ============================================================================

/// Submitted form values keyed by field name.
pub type SubmittedValues = BTreeMap<String, Value>;

/// Validated subset of the submitted values.
pub type ValidatedValues = BTreeMap<String, Value>;

/// Structured per-field validation failures.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationErrors {
    /// Failure messages keyed by field name.
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Returns whether any field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Records a failure for a field.
    pub fn push(&mut self, field_name: &str, message: String) {
        self.errors.entry(field_name.to_string()).or_default().push(message);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let failed: Vec<&str> = self.errors.keys().map(String::as_str).collect();
        write!(f, "validation failed for fields: {}", failed.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Per-field validation rules derived from resolved field groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationPlan {
    /// Rule sets keyed by field name, in derivation order.
    rules: BTreeMap<String, FieldRules>,
}

impl ValidationPlan {
    /// Returns the derived rule sets keyed by field name.
    #[must_use]
    pub const fn rules(&self) -> &BTreeMap<String, FieldRules> {
        &self.rules
    }

    /// Applies the plan to submitted values.
    ///
    /// On success returns the validated subset of the submission: the values
    /// for every planned field present in the input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] with every failure collected, keyed by
    /// field name.
    pub fn apply(&self, values: &SubmittedValues) -> Result<ValidatedValues, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        for (field_name, rules) in &self.rules {
            let value = values.get(field_name).unwrap_or(&Value::Null);
            check_field(field_name, rules, value, &mut errors);
        }
        if errors.is_empty() {
            Ok(self
                .rules
                .keys()
                .filter_map(|name| values.get(name).map(|value| (name.clone(), value.clone())))
                .collect())
        } else {
            Err(errors)
        }
    }
}

/// Derives validation rules for every field of the resolved groups.
#[must_use]
pub fn derive_validation_rules(field_groups: &[FieldGroup]) -> ValidationPlan {
    let mut rules = BTreeMap::new();
    for group in field_groups {
        for field in group.fields_in_order() {
            rules.insert(field.name.as_str().to_string(), build_field_rules(&field));
        }
    }
    ValidationPlan {
        rules,
    }
}

// ============================================================================
// SECTION: Rule Derivation
// ============================================================================

/// Builds the constraint list for one field.
fn build_field_rules(field: &Field) -> FieldRules {
    let mut constraints = Vec::new();

    if field.required {
        constraints.push(Constraint::Required);
    } else {
        constraints.push(Constraint::Nullable);
    }

    constraints.extend(type_constraints(field));
    constraints.extend(config_constraints(field));

    FieldRules {
        label: field.label.clone(),
        constraints,
    }
}

/// Returns the base constraint for the field's type.
fn type_constraints(field: &Field) -> Vec<Constraint> {
    match field.field_type.as_str() {
        "text" | "textarea" | "wysiwyg" | "time_picker" | "select" | "radio" | "image" | "file" => {
            vec![Constraint::TypeString]
        }
        "email" => vec![Constraint::TypeString, Constraint::TypeEmail],
        "url" => vec![Constraint::TypeString, Constraint::TypeUrl],
        "number" => vec![Constraint::TypeNumeric],
        "date_picker" => vec![Constraint::TypeDate],
        "true_false" => vec![Constraint::TypeBoolean],
        "checkbox" | "repeater" | "flexible_content" => vec![Constraint::TypeArray],
        _ => Vec::new(),
    }
}

/// Returns the config-derived constraints for the field.
fn config_constraints(field: &Field) -> Vec<Constraint> {
    let mut constraints = Vec::new();

    if let Some(maxlength) = field.config.maxlength() {
        constraints.push(Constraint::MaxLength(maxlength));
    }

    if field.field_type.as_str() == "number" {
        if let Some(min) = field.config.min() {
            constraints.push(Constraint::MinValue(min));
        }
        if let Some(max) = field.config.max() {
            constraints.push(Constraint::MaxValue(max));
        }
    }

    if matches!(field.field_type.as_str(), "select" | "radio" | "checkbox")
        && let Some(choices) = field.config.choice_keys()
    {
        if field.field_type.as_str() == "checkbox" {
            constraints.push(Constraint::SubsetOf(choices));
        } else {
            constraints.push(Constraint::OneOf(choices));
        }
    }

    constraints
}

// ============================================================================
// SECTION: Constraint Application
// ============================================================================

/// Checks one field's value against its rule set.
fn check_field(field_name: &str, rules: &FieldRules, value: &Value, errors: &mut ValidationErrors) {
    let label = rules.label.as_str();

    if is_missing(value) {
        if rules.constraints.contains(&Constraint::Required) {
            errors.push(field_name, format!("{label} is required"));
        }
        // Nullable: absent or empty values skip the remaining constraints.
        return;
    }

    for constraint in &rules.constraints {
        if let Some(message) = constraint_failure(constraint, label, value) {
            errors.push(field_name, message);
        }
    }
}

/// Returns whether a submitted value counts as missing for required checks.
fn is_missing(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Bool(_) | Value::Number(_) | Value::Object(_) => false,
    }
}

/// Evaluates one constraint; returns the failure message if violated.
fn constraint_failure(constraint: &Constraint, label: &str, value: &Value) -> Option<String> {
    match constraint {
        Constraint::Required | Constraint::Nullable => None,
        Constraint::TypeString => {
            (!value.is_string()).then(|| format!("{label} must be a string"))
        }
        Constraint::TypeEmail => {
            (!is_email(value)).then(|| format!("{label} must be a valid email address"))
        }
        Constraint::TypeUrl => (!is_url(value)).then(|| format!("{label} must be a valid URL")),
        Constraint::TypeNumeric => {
            coerce_decimal(value).is_none().then(|| format!("{label} must be a number"))
        }
        Constraint::TypeDate => (!is_date(value)).then(|| format!("{label} must be a valid date")),
        Constraint::TypeBoolean => {
            (!is_boolean(value)).then(|| format!("{label} must be true or false"))
        }
        Constraint::TypeArray => (!value.is_array()).then(|| format!("{label} must be a list")),
        Constraint::MaxLength(limit) => (!within_max_length(value, *limit))
            .then(|| format!("{label} must not be greater than {limit} characters")),
        Constraint::MinValue(bound) => ((!satisfies_bound(value, *bound, false))
            .then(|| format!("{label} must be at least {bound}"))),
        Constraint::MaxValue(bound) => ((!satisfies_bound(value, *bound, true))
            .then(|| format!("{label} must not be greater than {bound}"))),
        Constraint::OneOf(choices) => (!is_choice(value, choices))
            .then(|| format!("{label} must be one of the configured choices")),
        Constraint::SubsetOf(choices) => (!is_choice_subset(value, choices))
            .then(|| format!("{label} must only contain configured choices")),
    }
}

/// Checks a plausible email shape: one `@`, non-empty sides, dotted domain.
fn is_email(value: &Value) -> bool {
    let Value::String(text) = value else {
        return false;
    };
    let mut parts = text.splitn(2, '@');
    let Some(local) = parts.next() else {
        return false;
    };
    let Some(domain) = parts.next() else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !text.contains(char::is_whitespace)
}

/// Checks that the value parses as a URL with a host.
fn is_url(value: &Value) -> bool {
    let Value::String(text) = value else {
        return false;
    };
    url::Url::parse(text).is_ok_and(|parsed| parsed.has_host())
}

/// Checks that the value parses as an RFC3339 date-time or date-only string.
fn is_date(value: &Value) -> bool {
    let Value::String(text) = value else {
        return false;
    };
    if OffsetDateTime::parse(text, &Rfc3339).is_ok() {
        return true;
    }
    parse_calendar_date(text).is_some()
}

/// Parses a date-only value (YYYY-MM-DD).
fn parse_calendar_date(value: &str) -> Option<Date> {
    let mut parts = value.split('-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u8 = parts.next()?.parse().ok()?;
    let day: u8 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    let month = time::Month::try_from(month).ok()?;
    Date::from_calendar_date(year, month, day).ok()
}

/// Checks boolean-equivalence: booleans, 0/1, and their string forms.
fn is_boolean(value: &Value) -> bool {
    match value {
        Value::Bool(_) => true,
        Value::Number(number) => number.as_i64().is_some_and(|raw| raw == 0 || raw == 1),
        Value::String(text) => matches!(text.as_str(), "0" | "1" | "true" | "false"),
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

/// Checks the max-length constraint on strings, numbers, and lists.
fn within_max_length(value: &Value, limit: u64) -> bool {
    match value {
        Value::String(text) => {
            u64::try_from(text.chars().count()).is_ok_and(|length| length <= limit)
        }
        Value::Number(_) => satisfies_bound(value, bound_from_u64(limit), true),
        Value::Array(items) => u64::try_from(items.len()).is_ok_and(|length| length <= limit),
        Value::Null | Value::Bool(_) | Value::Object(_) => false,
    }
}

/// Converts a length limit into a numeric bound.
#[allow(clippy::cast_precision_loss, reason = "Length limits fit comfortably in f64.")]
const fn bound_from_u64(limit: u64) -> f64 {
    limit as f64
}

/// Checks a numeric bound; `upper` selects max versus min semantics.
fn satisfies_bound(value: &Value, bound: f64, upper: bool) -> bool {
    let Some(actual) = coerce_decimal(value) else {
        return false;
    };
    let Some(bound) = decimal_from_f64(bound) else {
        return false;
    };
    if upper { actual <= bound } else { actual >= bound }
}

/// Converts an `f64` bound into a decimal for exact comparison.
fn decimal_from_f64(bound: f64) -> Option<BigDecimal> {
    BigDecimal::try_from(bound).ok()
}

/// Checks membership of a scalar value in the configured choices.
fn is_choice(value: &Value, choices: &[String]) -> bool {
    let text = coerce_text(value);
    choices.iter().any(|choice| choice == &text)
}

/// Checks that every list element is a configured choice.
fn is_choice_subset(value: &Value, choices: &[String]) -> bool {
    let Value::Array(items) = value else {
        return false;
    };
    items.iter().all(|item| is_choice(item, choices))
}
