// crates/fieldframe-core/src/runtime/mod.rs
// ============================================================================
// Module: Fieldframe Runtime
// Description: Placement resolution, visibility, and validation engines.
// Purpose: Expose the engine entry points over the core model.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Runtime engines are pure, synchronous computations over data loaded for
//! the current request. Resolution decides which groups apply to an entity,
//! visibility decides which fields are shown, and validation derives and
//! applies per-field rule sets.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod comparator;
pub mod resolver;
pub mod store;
pub mod validator;
pub mod visibility;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use comparator::loose_compare;
pub use comparator::loose_compare_literal;
pub use comparator::loose_eq;
pub use resolver::GroupOrder;
pub use resolver::PlacementResolver;
pub use resolver::group_matches;
pub use resolver::rule_matches;
pub use store::InMemoryFieldGroupStore;
pub use store::SharedFieldGroupStore;
pub use validator::Constraint;
pub use validator::FieldRules;
pub use validator::SubmittedValues;
pub use validator::ValidatedValues;
pub use validator::ValidationErrors;
pub use validator::ValidationPlan;
pub use validator::derive_validation_rules;
pub use visibility::FormValues;
pub use visibility::is_field_visible;
