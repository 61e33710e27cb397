// crates/fieldframe-core/src/interfaces/mod.rs
// ============================================================================
// Module: Fieldframe Interfaces
// Description: Backend-agnostic storage contract for field group definitions.
// Purpose: Define the seam between the engines and the persistent store.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! The engines consume field group definitions through [`FieldGroupStore`]
//! without embedding backend details. Reads must be consistent within one
//! request; writes replacing a group's fields and locations must be atomic.
//! Persistence failures propagate untouched as [`StoreError`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::FieldGroup;
use crate::core::FieldGroupKey;

// ============================================================================
// SECTION: Store Errors
// ============================================================================

/// Field group store errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Store I/O error.
    #[error("store io error: {0}")]
    Io(String),
    /// Store backend error.
    #[error("store error: {0}")]
    Store(String),
    /// Unique key collision.
    #[error("store conflict: {0}")]
    Conflict(String),
    /// Invalid store data.
    #[error("store invalid data: {0}")]
    Invalid(String),
    /// Store corruption detected.
    #[error("store corruption: {0}")]
    Corrupt(String),
}

// ============================================================================
// SECTION: Field Group Store
// ============================================================================

/// Backend-agnostic field group definition store.
pub trait FieldGroupStore {
    /// Loads every active field group with fields and locations.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store cannot be read.
    fn load_active(&self) -> Result<Vec<FieldGroup>, StoreError>;

    /// Loads every field group regardless of the active flag.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store cannot be read.
    fn load_all(&self) -> Result<Vec<FieldGroup>, StoreError>;

    /// Loads one field group by key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store cannot be read.
    fn get(&self, key: &FieldGroupKey) -> Result<Option<FieldGroup>, StoreError>;

    /// Saves a field group, atomically replacing its fields and locations.
    ///
    /// Fields are persisted with `order` equal to their position in the
    /// submitted sequence.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] on unique key collisions and other
    /// [`StoreError`] variants when persistence fails; a failed save leaves
    /// the previous definition intact.
    fn save(&self, group: &FieldGroup) -> Result<(), StoreError>;

    /// Deletes a field group by key, cascading to fields and locations.
    ///
    /// Returns whether a group was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store cannot be written.
    fn delete(&self, key: &FieldGroupKey) -> Result<bool, StoreError>;
}
