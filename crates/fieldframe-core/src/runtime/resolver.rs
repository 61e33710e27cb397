// crates/fieldframe-core/src/runtime/resolver.rs
// ============================================================================
// Module: Fieldframe Placement Resolution
// Description: Resolves field groups applicable to a content entity.
// Purpose: Evaluate location rule groups deterministically and fail closed.
// Dependencies: crate::core, crate::interfaces, crate::runtime::comparator
// ============================================================================

//! ## Overview
//! Placement resolution loads every active field group, evaluates its
//! location rules against the entity, and returns the matching groups with
//! fields pre-sorted by order. Rule groups are ORed against each other and
//! ANDed within, evaluated in ascending `rule_group` order with
//! short-circuiting in both directions. A group with zero locations matches
//! nothing, and malformed rules are non-matches rather than errors.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde_json::Value;

use crate::core::EntityInstance;
use crate::core::EntityKind;
use crate::core::FieldGroup;
use crate::core::LocationParam;
use crate::core::LocationRule;
use crate::core::RuleOperator;
use crate::interfaces::FieldGroupStore;
use crate::interfaces::StoreError;
use crate::runtime::comparator::loose_compare_literal;

// ============================================================================
// SECTION: Resolver
// ============================================================================

/// Ordering applied to resolved field groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GroupOrder {
    /// Ascending title, ties broken by key.
    #[default]
    Title,
    /// Store insertion order, untouched.
    Insertion,
}

/// Placement resolution engine over a field group store.
pub struct PlacementResolver<S> {
    /// Backing field group store.
    store: S,
    /// Ordering applied to resolved groups.
    order: GroupOrder,
}

impl<S: FieldGroupStore> PlacementResolver<S> {
    /// Creates a resolver with the default title ordering.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            order: GroupOrder::Title,
        }
    }

    /// Creates a resolver with an explicit group ordering.
    #[must_use]
    pub const fn with_order(store: S, order: GroupOrder) -> Self {
        Self {
            store,
            order,
        }
    }

    /// Returns a reference to the backing store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Resolves the field groups applicable to an entity.
    ///
    /// Returned groups carry their fields pre-sorted ascending by `order`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when active groups cannot be loaded.
    pub fn resolve(
        &self,
        kind: EntityKind,
        entity: Option<&EntityInstance>,
    ) -> Result<Vec<FieldGroup>, StoreError> {
        let groups = self.store.load_active()?;
        let mut matched: Vec<FieldGroup> = groups
            .into_iter()
            .filter(|group| group_matches(group, kind, entity))
            .map(|mut group| {
                group.fields.sort_by_key(|field| field.order);
                group
            })
            .collect();
        match self.order {
            GroupOrder::Title => {
                matched.sort_by(|a, b| match a.title.cmp(&b.title) {
                    Ordering::Equal => a.key.cmp(&b.key),
                    other => other,
                });
            }
            GroupOrder::Insertion => {}
        }
        tracing::debug!(
            kind = kind.as_str(),
            matched = matched.len(),
            "resolved field group placements"
        );
        Ok(matched)
    }
}

// ============================================================================
// SECTION: Rule Group Evaluation
// ============================================================================

/// Returns whether a field group's locations match the entity.
///
/// A group with no locations matches nothing.
#[must_use]
pub fn group_matches(
    group: &FieldGroup,
    kind: EntityKind,
    entity: Option<&EntityInstance>,
) -> bool {
    if group.locations.is_empty() {
        return false;
    }

    let mut rule_groups: BTreeMap<i64, Vec<&LocationRule>> = BTreeMap::new();
    for rule in &group.locations {
        rule_groups.entry(rule.rule_group).or_default().push(rule);
    }

    rule_groups
        .values()
        .any(|rules| rules.iter().all(|rule| rule_matches(rule, kind, entity)))
}

/// Evaluates one location rule against the entity.
///
/// Unknown params and operators are non-matches, never errors. The
/// `empty`/`not_empty` operators belong to conditional logic only and are
/// rejected here.
#[must_use]
pub fn rule_matches(rule: &LocationRule, kind: EntityKind, entity: Option<&EntityInstance>) -> bool {
    if matches!(rule.operator, RuleOperator::Empty | RuleOperator::NotEmpty) {
        return false;
    }
    match &rule.param {
        LocationParam::PostType => post_type_rule_matches(rule, kind, entity),
        LocationParam::Page => {
            id_rule_matches(rule, kind, entity, EntityKind::Page)
        }
        LocationParam::Post => {
            id_rule_matches(rule, kind, entity, EntityKind::Post)
        }
        LocationParam::Category => {
            id_rule_matches(rule, kind, entity, EntityKind::Category)
        }
        LocationParam::EntityType => loose_compare_literal(
            &Value::String(kind.as_str().to_string()),
            &rule.operator,
            &rule.value,
        ),
        LocationParam::EntityId => entity.is_some_and(|entity| {
            loose_compare_literal(
                &Value::from(entity.id.value()),
                &rule.operator,
                &rule.value,
            )
        }),
        LocationParam::EntityAttribute(attribute) => entity
            .and_then(|entity| entity.attribute(attribute))
            .is_some_and(|actual| loose_compare_literal(actual, &rule.operator, &rule.value)),
        LocationParam::Other(_) => false,
    }
}

/// Evaluates a `post_type` rule.
///
/// The reserved literals `page`/`post`/`category` match on kind equality
/// alone, regardless of the rule's declared operator. Any other value is a
/// post type identifier compared against the entity's `post_type_id`, only
/// when the entity is a post exposing that attribute.
fn post_type_rule_matches(
    rule: &LocationRule,
    kind: EntityKind,
    entity: Option<&EntityInstance>,
) -> bool {
    match rule.value.as_str() {
        "page" => kind == EntityKind::Page,
        "post" => kind == EntityKind::Post,
        "category" => kind == EntityKind::Category,
        _ => {
            if kind != EntityKind::Post {
                return false;
            }
            entity
                .and_then(EntityInstance::post_type_id)
                .is_some_and(|actual| loose_compare_literal(actual, &rule.operator, &rule.value))
        }
    }
}

/// Evaluates a `page`/`post`/`category` identifier rule.
fn id_rule_matches(
    rule: &LocationRule,
    kind: EntityKind,
    entity: Option<&EntityInstance>,
    required: EntityKind,
) -> bool {
    if kind != required {
        return false;
    }
    entity.is_some_and(|entity| {
        loose_compare_literal(&Value::from(entity.id.value()), &rule.operator, &rule.value)
    })
}
