// crates/fieldframe-core/src/lib.rs
// ============================================================================
// Module: Fieldframe Core Library
// Description: Public API surface for the Fieldframe placement engines.
// Purpose: Expose core types, interfaces, and runtime engines.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Fieldframe core provides the field group placement resolution engine,
//! the conditional field visibility engine, and the field content validator
//! for a content-management backend with dynamic custom fields. It is
//! backend-agnostic and integrates through explicit interfaces rather than
//! embedding into a web framework.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use interfaces::FieldGroupStore;
pub use interfaces::StoreError;
pub use runtime::Constraint;
pub use runtime::FieldRules;
pub use runtime::FormValues;
pub use runtime::GroupOrder;
pub use runtime::InMemoryFieldGroupStore;
pub use runtime::PlacementResolver;
pub use runtime::SharedFieldGroupStore;
pub use runtime::SubmittedValues;
pub use runtime::ValidatedValues;
pub use runtime::ValidationErrors;
pub use runtime::ValidationPlan;
pub use runtime::derive_validation_rules;
pub use runtime::group_matches;
pub use runtime::is_field_visible;
pub use runtime::loose_compare;
pub use runtime::loose_compare_literal;
pub use runtime::loose_eq;
pub use runtime::rule_matches;
