// crates/fieldframe-core/src/core/mod.rs
// ============================================================================
// Module: Fieldframe Core Types
// Description: Canonical field group, rule, and entity structures.
// Purpose: Provide stable, serializable types for the placement engines.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Fieldframe core types define field groups, fields, location rules,
//! conditional logic, entities, and the field type registry. These types are
//! the canonical source of truth for any derived API surfaces.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod entity;
pub mod group;
pub mod identifiers;
pub mod location;
pub mod logic;
pub mod registry;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use entity::EntityInstance;
pub use entity::EntityKind;
pub use entity::POST_TYPE_ID_ATTRIBUTE;
pub use group::Field;
pub use group::FieldConfig;
pub use group::FieldGroup;
pub use group::GroupError;
pub use group::GroupPosition;
pub use group::GroupStyle;
pub use identifiers::EntityId;
pub use identifiers::FieldGroupKey;
pub use identifiers::FieldKey;
pub use identifiers::FieldName;
pub use identifiers::FieldTypeKey;
pub use location::LocationParam;
pub use location::LocationRule;
pub use location::PlacementSelection;
pub use location::RuleOperator;
pub use location::SelectionTarget;
pub use location::locations_to_selections;
pub use location::selections_to_locations;
pub use logic::ConditionRule;
pub use logic::ConditionalLogic;
pub use logic::LogicCombinator;
pub use registry::FieldTypeRegistry;
pub use registry::FieldTypeSpec;
pub use registry::FieldTypeSummary;
