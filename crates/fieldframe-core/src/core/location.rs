// crates/fieldframe-core/src/core/location.rs
// ============================================================================
// Module: Fieldframe Location Rules
// Description: Placement rule rows and the UI-facing selection shape.
// Purpose: Define typed rule params/operators and bidirectional conversion.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! A location rule is one atomic placement condition belonging to a numbered
//! rule group within a field group. Rules sharing a `rule_group` are ANDed;
//! distinct groups are ORed. Params and operators are parsed into tagged
//! variants with an explicit catch-all arm so corrupt or legacy rows stay
//! representable and simply never match (fail closed, never an error).
//!
//! The UI-facing shape groups rules into `{target, entity_id}` selections;
//! the conversion here round-trips for all supported targets.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::EntityId;

// ============================================================================
// SECTION: Rule Operators
// ============================================================================

/// Prefix marking entity attribute params.
const ENTITY_ATTRIBUTE_PREFIX: &str = "entity.";

/// Comparison operator declared on a location or conditional rule.
///
/// # Invariants
/// - Unknown operator strings are preserved in [`RuleOperator::Other`] and
///   evaluate to non-match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RuleOperator {
    /// Loose equality.
    Equals,
    /// Loose inequality.
    NotEquals,
    /// Greater-than ordering.
    GreaterThan,
    /// Less-than ordering.
    LessThan,
    /// Greater-than-or-equal ordering.
    GreaterThanOrEqual,
    /// Less-than-or-equal ordering.
    LessThanOrEqual,
    /// Substring containment.
    Contains,
    /// Negated substring containment.
    NotContains,
    /// Prefix match.
    StartsWith,
    /// Suffix match.
    EndsWith,
    /// True when the actual value is empty-equivalent.
    Empty,
    /// True when the actual value is not empty-equivalent.
    NotEmpty,
    /// Unrecognized operator preserved for round-tripping.
    Other(String),
}

impl RuleOperator {
    /// Returns the stable string form of the operator.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Equals => "==",
            Self::NotEquals => "!=",
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThanOrEqual => "<=",
            Self::Contains => "contains",
            Self::NotContains => "not_contains",
            Self::StartsWith => "starts_with",
            Self::EndsWith => "ends_with",
            Self::Empty => "empty",
            Self::NotEmpty => "not_empty",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for RuleOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for RuleOperator {
    fn from(value: String) -> Self {
        match value.as_str() {
            "==" => Self::Equals,
            "!=" => Self::NotEquals,
            ">" => Self::GreaterThan,
            "<" => Self::LessThan,
            ">=" => Self::GreaterThanOrEqual,
            "<=" => Self::LessThanOrEqual,
            "contains" => Self::Contains,
            "not_contains" => Self::NotContains,
            "starts_with" => Self::StartsWith,
            "ends_with" => Self::EndsWith,
            "empty" => Self::Empty,
            "not_empty" => Self::NotEmpty,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for RuleOperator {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<RuleOperator> for String {
    fn from(operator: RuleOperator) -> Self {
        operator.as_str().to_string()
    }
}

// ============================================================================
// SECTION: Rule Params
// ============================================================================

/// Subject of a location rule comparison.
///
/// # Invariants
/// - Unknown param strings are preserved in [`LocationParam::Other`] and
///   evaluate to non-match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LocationParam {
    /// Post-type matching with reserved literals for page/post/category.
    PostType,
    /// Specific page identifier.
    Page,
    /// Specific post identifier.
    Post,
    /// Specific category identifier.
    Category,
    /// Entity kind discriminator string.
    EntityType,
    /// Entity identifier.
    EntityId,
    /// Named entity attribute (`entity.<attribute>`).
    EntityAttribute(String),
    /// Unrecognized param preserved for round-tripping.
    Other(String),
}

impl LocationParam {
    /// Returns the stable string form of the param.
    #[must_use]
    pub fn to_param_string(&self) -> String {
        match self {
            Self::PostType => "post_type".to_string(),
            Self::Page => "page".to_string(),
            Self::Post => "post".to_string(),
            Self::Category => "category".to_string(),
            Self::EntityType => "entity_type".to_string(),
            Self::EntityId => "entity_id".to_string(),
            Self::EntityAttribute(attribute) => format!("{ENTITY_ATTRIBUTE_PREFIX}{attribute}"),
            Self::Other(raw) => raw.clone(),
        }
    }
}

impl fmt::Display for LocationParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_param_string())
    }
}

impl From<String> for LocationParam {
    fn from(value: String) -> Self {
        match value.as_str() {
            "post_type" => Self::PostType,
            "page" => Self::Page,
            "post" => Self::Post,
            "category" => Self::Category,
            "entity_type" => Self::EntityType,
            "entity_id" => Self::EntityId,
            _ => value.strip_prefix(ENTITY_ATTRIBUTE_PREFIX).map_or_else(
                || Self::Other(value.clone()),
                |attribute| Self::EntityAttribute(attribute.to_string()),
            ),
        }
    }
}

impl From<&str> for LocationParam {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<LocationParam> for String {
    fn from(param: LocationParam) -> Self {
        param.to_param_string()
    }
}

// ============================================================================
// SECTION: Location Rule
// ============================================================================

/// One atomic placement condition within a field group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRule {
    /// Rule group number; rules sharing a group are ANDed, groups are ORed.
    #[serde(default)]
    pub rule_group: i64,
    /// Subject of the comparison.
    pub param: LocationParam,
    /// Declared comparison operator.
    pub operator: RuleOperator,
    /// Comparison literal.
    pub value: String,
}

impl LocationRule {
    /// Creates a location rule.
    #[must_use]
    pub fn new(
        rule_group: i64,
        param: impl Into<LocationParam>,
        operator: impl Into<RuleOperator>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            rule_group,
            param: param.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Placement Selections
// ============================================================================

/// Target of a UI-facing placement selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionTarget {
    /// Pages, optionally narrowed to one page.
    Page,
    /// Posts of the builtin kind, optionally narrowed to one post.
    Post,
    /// Categories, optionally narrowed to one category.
    Category,
    /// A custom post type identified by numeric id.
    PostType,
}

impl SelectionTarget {
    /// Returns the stable string form of the target.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Post => "post",
            Self::Category => "category",
            Self::PostType => "post_type",
        }
    }
}

/// UI-facing placement selection, grouped per rule group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementSelection {
    /// Selection target.
    pub target: SelectionTarget,
    /// Optional narrowing entity identifier.
    #[serde(default)]
    pub entity_id: Option<EntityId>,
}

impl PlacementSelection {
    /// Creates a selection without a narrowing identifier.
    #[must_use]
    pub const fn new(target: SelectionTarget) -> Self {
        Self {
            target,
            entity_id: None,
        }
    }

    /// Creates a selection narrowed to a specific entity.
    #[must_use]
    pub fn for_entity(target: SelectionTarget, entity_id: impl Into<EntityId>) -> Self {
        Self {
            target,
            entity_id: Some(entity_id.into()),
        }
    }
}

// ============================================================================
// SECTION: Selection Conversion
// ============================================================================

/// Converts one placement selection into its flat rules (without group ids).
fn selection_rules(selection: &PlacementSelection) -> Vec<(LocationParam, String)> {
    let mut rules = Vec::new();
    match selection.target {
        SelectionTarget::PostType => {
            let value =
                selection.entity_id.map_or_else(String::new, |entity_id| entity_id.to_string());
            rules.push((LocationParam::PostType, value));
        }
        SelectionTarget::Page => {
            rules.push((LocationParam::PostType, "page".to_string()));
            if let Some(entity_id) = selection.entity_id {
                rules.push((LocationParam::Page, entity_id.to_string()));
            }
        }
        SelectionTarget::Post => {
            rules.push((LocationParam::PostType, "post".to_string()));
            if let Some(entity_id) = selection.entity_id {
                rules.push((LocationParam::Post, entity_id.to_string()));
            }
        }
        SelectionTarget::Category => {
            rules.push((LocationParam::PostType, "category".to_string()));
            if let Some(entity_id) = selection.entity_id {
                rules.push((LocationParam::Category, entity_id.to_string()));
            }
        }
    }
    rules
}

/// Converts UI placement selections into flat location rule rows.
///
/// Each selection becomes one rule group, numbered by its position in the
/// input sequence. All generated rules use loose equality.
#[must_use]
pub fn selections_to_locations(selections: &[PlacementSelection]) -> Vec<LocationRule> {
    let mut locations = Vec::new();
    for (index, selection) in selections.iter().enumerate() {
        let rule_group = i64::try_from(index).unwrap_or(i64::MAX);
        for (param, value) in selection_rules(selection) {
            locations.push(LocationRule {
                rule_group,
                param,
                operator: RuleOperator::Equals,
                value,
            });
        }
    }
    locations
}

/// Converts flat location rule rows back into UI placement selections.
///
/// Rules are grouped by ascending `rule_group`; rows that do not fit the
/// selection shape fall back to an un-narrowed page selection, mirroring the
/// edit-form default.
#[must_use]
pub fn locations_to_selections(locations: &[LocationRule]) -> Vec<PlacementSelection> {
    let mut grouped: BTreeMap<i64, Vec<&LocationRule>> = BTreeMap::new();
    for rule in locations {
        grouped.entry(rule.rule_group).or_default().push(rule);
    }

    let mut selections = Vec::new();
    for rules in grouped.values() {
        let mut selection = PlacementSelection::new(SelectionTarget::Page);
        for rule in rules {
            match &rule.param {
                LocationParam::PostType => match rule.value.as_str() {
                    "page" => selection.target = SelectionTarget::Page,
                    "post" => selection.target = SelectionTarget::Post,
                    "category" => selection.target = SelectionTarget::Category,
                    raw => {
                        selection.target = SelectionTarget::PostType;
                        selection.entity_id = raw.parse::<i64>().ok().map(EntityId::new);
                    }
                },
                LocationParam::Page | LocationParam::Post | LocationParam::Category => {
                    selection.entity_id = rule.value.parse::<i64>().ok().map(EntityId::new);
                }
                LocationParam::EntityType
                | LocationParam::EntityId
                | LocationParam::EntityAttribute(_)
                | LocationParam::Other(_) => {}
            }
        }
        selections.push(selection);
    }
    selections
}
