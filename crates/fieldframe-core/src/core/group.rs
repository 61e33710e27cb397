// crates/fieldframe-core/src/core/group.rs
// ============================================================================
// Module: Fieldframe Field Groups
// Description: Field group and field definitions with validation helpers.
// Purpose: Define the canonical field group model owned by the store.
// Dependencies: crate::core::{identifiers, location, logic, registry}, serde, thiserror
// ============================================================================

//! ## Overview
//! A field group is a named, reusable bundle of typed fields plus the
//! location rules deciding where it appears. Groups are validated at store
//! boundaries to enforce invariants such as unique field keys and resolvable
//! field types. A group with zero locations is valid data but matches no
//! entity.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use thiserror::Error;

use crate::core::identifiers::FieldGroupKey;
use crate::core::identifiers::FieldKey;
use crate::core::identifiers::FieldName;
use crate::core::identifiers::FieldTypeKey;
use crate::core::location::LocationRule;
use crate::core::logic::ConditionalLogic;
use crate::core::registry::FieldTypeRegistry;

// ============================================================================
// SECTION: Group Enums
// ============================================================================

/// Edit-form placement position for a group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupPosition {
    /// Main column.
    #[default]
    Normal,
    /// Sidebar column.
    Side,
}

/// Rendering style for a group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupStyle {
    /// Boxed rendering.
    #[default]
    Default,
    /// Borderless rendering.
    Seamless,
}

// ============================================================================
// SECTION: Field Config
// ============================================================================

/// Type-specific field configuration map with typed accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldConfig(Map<String, Value>);

impl FieldConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Wraps a raw configuration map.
    #[must_use]
    pub const fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Returns the raw configuration map.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Returns a raw configuration entry.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Sets a configuration entry and returns the config for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    /// Returns the positive `maxlength` constraint, if configured.
    #[must_use]
    pub fn maxlength(&self) -> Option<u64> {
        self.get("maxlength").and_then(Value::as_u64).filter(|length| *length > 0)
    }

    /// Returns the numeric `min` bound, if configured and non-null.
    #[must_use]
    pub fn min(&self) -> Option<f64> {
        self.get("min").and_then(Value::as_f64)
    }

    /// Returns the numeric `max` bound, if configured and non-null.
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.get("max").and_then(Value::as_f64)
    }

    /// Returns the choice keys for select/radio/checkbox fields.
    #[must_use]
    pub fn choice_keys(&self) -> Option<Vec<String>> {
        let choices = self.get("choices")?.as_object()?;
        if choices.is_empty() {
            return None;
        }
        Some(choices.keys().cloned().collect())
    }
}

// ============================================================================
// SECTION: Fields
// ============================================================================

/// One custom field belonging to a field group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Globally unique field key.
    pub key: FieldKey,
    /// Human-readable label used in error messages.
    pub label: String,
    /// Form input name, unique within the group.
    pub name: FieldName,
    /// Field type key resolved against the registry.
    #[serde(rename = "type")]
    pub field_type: FieldTypeKey,
    /// Optional author instructions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Whether a non-empty value is required on submit.
    #[serde(default)]
    pub required: bool,
    /// Optional conditional visibility specification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditional_logic: Option<ConditionalLogic>,
    /// Type-specific configuration.
    #[serde(default)]
    pub config: FieldConfig,
    /// Display and validation order within the group.
    #[serde(default)]
    pub order: i64,
}

impl Field {
    /// Creates a field with defaults for the optional attributes.
    #[must_use]
    pub fn new(
        key: impl Into<FieldKey>,
        label: impl Into<String>,
        name: impl Into<FieldName>,
        field_type: impl Into<FieldTypeKey>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            name: name.into(),
            field_type: field_type.into(),
            instructions: None,
            required: false,
            conditional_logic: None,
            config: FieldConfig::new(),
            order: 0,
        }
    }

    /// Marks the field required and returns it for chaining.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attaches conditional logic and returns the field for chaining.
    #[must_use]
    pub fn with_conditional_logic(mut self, logic: ConditionalLogic) -> Self {
        self.conditional_logic = Some(logic);
        self
    }

    /// Replaces the configuration and returns the field for chaining.
    #[must_use]
    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the order and returns the field for chaining.
    #[must_use]
    pub const fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }
}

// ============================================================================
// SECTION: Field Group
// ============================================================================

/// A named, reusable bundle of custom fields with placement rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldGroup {
    /// Group title shown to administrators; default resolution order key.
    pub title: String,
    /// Unique group key.
    pub key: FieldGroupKey,
    /// Edit-form placement position.
    #[serde(default)]
    pub position: GroupPosition,
    /// Rendering style.
    #[serde(default)]
    pub style: GroupStyle,
    /// Whether the group participates in resolution.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Ordered fields owned by the group.
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Placement rules owned by the group.
    #[serde(default)]
    pub locations: Vec<LocationRule>,
}

/// Returns the default `active` flag for new groups.
const fn default_active() -> bool {
    true
}

impl FieldGroup {
    /// Creates an active, empty group with default position and style.
    #[must_use]
    pub fn new(title: impl Into<String>, key: impl Into<FieldGroupKey>) -> Self {
        Self {
            title: title.into(),
            key: key.into(),
            position: GroupPosition::Normal,
            style: GroupStyle::Default,
            active: true,
            fields: Vec::new(),
            locations: Vec::new(),
        }
    }

    /// Adds a field and returns the group for chaining.
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds a location rule and returns the group for chaining.
    #[must_use]
    pub fn with_location(mut self, rule: LocationRule) -> Self {
        self.locations.push(rule);
        self
    }

    /// Deactivates the group and returns it for chaining.
    #[must_use]
    pub const fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Returns the fields sorted ascending by `order`, preserving ties.
    #[must_use]
    pub fn fields_in_order(&self) -> Vec<Field> {
        let mut fields = self.fields.clone();
        fields.sort_by_key(|field| field.order);
        fields
    }

    /// Validates the group invariants.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError`] when validation fails.
    pub fn validate(&self) -> Result<(), GroupError> {
        if self.title.trim().is_empty() {
            return Err(GroupError::MissingTitle);
        }
        if self.key.as_str().trim().is_empty() {
            return Err(GroupError::MissingKey);
        }
        ensure_unique_field_keys(&self.fields)?;
        ensure_unique_field_names(&self.fields)?;
        Ok(())
    }

    /// Validates the group including field type resolution.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError`] when validation fails or a field type is not
    /// registered.
    pub fn validate_against(&self, registry: &FieldTypeRegistry) -> Result<(), GroupError> {
        self.validate()?;
        for field in &self.fields {
            if !registry.contains(&field.field_type) {
                return Err(GroupError::UnknownFieldType(field.field_type.to_string()));
            }
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Field group validation errors.
#[derive(Debug, Error)]
pub enum GroupError {
    /// Group title is empty.
    #[error("field group title must not be empty")]
    MissingTitle,
    /// Group key is empty.
    #[error("field group key must not be empty")]
    MissingKey,
    /// Duplicate field keys detected.
    #[error("duplicate field key: {0}")]
    DuplicateFieldKey(String),
    /// Duplicate field names detected within the group.
    #[error("duplicate field name: {0}")]
    DuplicateFieldName(String),
    /// Field references a type missing from the registry.
    #[error("unknown field type: {0}")]
    UnknownFieldType(String),
}

// ============================================================================
// SECTION: Validation Helpers
// ============================================================================

/// Ensures field keys are unique within the group.
fn ensure_unique_field_keys(fields: &[Field]) -> Result<(), GroupError> {
    for (index, field) in fields.iter().enumerate() {
        if fields.iter().skip(index + 1).any(|other| other.key == field.key) {
            return Err(GroupError::DuplicateFieldKey(field.key.to_string()));
        }
    }
    Ok(())
}

/// Ensures field names are unique within the group.
fn ensure_unique_field_names(fields: &[Field]) -> Result<(), GroupError> {
    for (index, field) in fields.iter().enumerate() {
        if fields.iter().skip(index + 1).any(|other| other.name == field.name) {
            return Err(GroupError::DuplicateFieldName(field.name.to_string()));
        }
    }
    Ok(())
}
