// crates/fieldframe-core/src/core/entity.rs
// ============================================================================
// Module: Fieldframe Entities
// Description: Content entity abstraction used by placement resolution.
// Purpose: Expose entity kind, identifier, and attributes to the rule engine.
// Dependencies: crate::core::identifiers, serde, serde_json
// ============================================================================

//! ## Overview
//! Entities abstract over pages, posts, categories, and post types. The
//! resolution engine only needs the kind discriminator, the numeric
//! identifier, and an attribute map; posts additionally carry a
//! `post_type_id` attribute. Attribute values are JSON so arbitrary columns
//! can feed `entity.<attribute>` location rules.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::core::identifiers::EntityId;

// ============================================================================
// SECTION: Entity Kind
// ============================================================================

/// Attribute name carrying a post's post type identifier.
pub const POST_TYPE_ID_ATTRIBUTE: &str = "post_type_id";

/// Kind discriminator for content entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A standalone page.
    Page,
    /// A post belonging to a post type.
    Post,
    /// A hierarchical category.
    Category,
    /// A custom post type definition.
    PostType,
}

impl EntityKind {
    /// Returns the stable string form of the kind.
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

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Entity Instance
// ============================================================================

/// A concrete entity instance presented to the resolution engine.
///
/// # Invariants
/// - Attributes are a snapshot; the engine never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityInstance {
    /// Entity identifier.
    pub id: EntityId,
    /// Attribute map exposed to `entity.<attribute>` rules.
    #[serde(default)]
    pub attributes: BTreeMap<String, Value>,
}

impl EntityInstance {
    /// Creates an entity instance with no attributes.
    #[must_use]
    pub fn new(id: impl Into<EntityId>) -> Self {
        Self {
            id: id.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Adds an attribute and returns the instance for chaining.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Returns the attribute value for the given name, if exposed.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Returns the `post_type_id` attribute, if exposed.
    #[must_use]
    pub fn post_type_id(&self) -> Option<&Value> {
        self.attribute(POST_TYPE_ID_ATTRIBUTE)
    }
}
