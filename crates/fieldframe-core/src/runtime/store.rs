// crates/fieldframe-core/src/runtime/store.rs
// ============================================================================
// Module: Fieldframe In-Memory Store
// Description: Simple in-memory field group store for tests and examples.
// Purpose: Provide a deterministic store implementation without external deps.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! This module provides a simple in-memory implementation of
//! [`FieldGroupStore`] for tests and local demos. It is not intended for
//! production use.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;

use crate::core::FieldGroup;
use crate::core::FieldGroupKey;
use crate::interfaces::FieldGroupStore;
use crate::interfaces::StoreError;

// ============================================================================
// SECTION: In-Memory Store
// ============================================================================

/// In-memory field group store for tests and examples.
#[derive(Debug, Default, Clone)]
pub struct InMemoryFieldGroupStore {
    /// Group map protected by a mutex, keyed by group key.
    groups: Arc<Mutex<BTreeMap<FieldGroupKey, FieldGroup>>>,
}

impl InMemoryFieldGroupStore {
    /// Creates a new in-memory field group store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            groups: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }

    /// Creates a store seeded with the given groups.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when a seed group fails validation.
    pub fn with_groups(groups: Vec<FieldGroup>) -> Result<Self, StoreError> {
        let store = Self::new();
        for group in groups {
            store.save(&group)?;
        }
        Ok(store)
    }
}

impl FieldGroupStore for InMemoryFieldGroupStore {
    fn load_active(&self) -> Result<Vec<FieldGroup>, StoreError> {
        let guard = self
            .groups
            .lock()
            .map_err(|_| StoreError::Store("field group store mutex poisoned".to_string()))?;
        Ok(guard.values().filter(|group| group.active).cloned().collect())
    }

    fn load_all(&self) -> Result<Vec<FieldGroup>, StoreError> {
        let guard = self
            .groups
            .lock()
            .map_err(|_| StoreError::Store("field group store mutex poisoned".to_string()))?;
        Ok(guard.values().cloned().collect())
    }

    fn get(&self, key: &FieldGroupKey) -> Result<Option<FieldGroup>, StoreError> {
        let guard = self
            .groups
            .lock()
            .map_err(|_| StoreError::Store("field group store mutex poisoned".to_string()))?;
        Ok(guard.get(key).cloned())
    }

    fn save(&self, group: &FieldGroup) -> Result<(), StoreError> {
        group.validate().map_err(|err| StoreError::Invalid(err.to_string()))?;
        let mut stored = group.clone();
        for (index, field) in stored.fields.iter_mut().enumerate() {
            field.order = i64::try_from(index).unwrap_or(i64::MAX);
        }
        self.groups
            .lock()
            .map_err(|_| StoreError::Store("field group store mutex poisoned".to_string()))?
            .insert(stored.key.clone(), stored);
        Ok(())
    }

    fn delete(&self, key: &FieldGroupKey) -> Result<bool, StoreError> {
        let mut guard = self
            .groups
            .lock()
            .map_err(|_| StoreError::Store("field group store mutex poisoned".to_string()))?;
        Ok(guard.remove(key).is_some())
    }
}

// ============================================================================
// SECTION: Shared Store Wrapper
// ============================================================================

/// Shared field group store backed by an `Arc` trait object.
#[derive(Clone)]
pub struct SharedFieldGroupStore {
    /// Inner store implementation.
    inner: Arc<dyn FieldGroupStore + Send + Sync>,
}

impl SharedFieldGroupStore {
    /// Wraps a field group store in a shared, clonable wrapper.
    #[must_use]
    pub fn from_store(store: impl FieldGroupStore + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(store),
        }
    }

    /// Wraps an existing shared store.
    #[must_use]
    pub const fn new(store: Arc<dyn FieldGroupStore + Send + Sync>) -> Self {
        Self {
            inner: store,
        }
    }
}

impl FieldGroupStore for SharedFieldGroupStore {
    fn load_active(&self) -> Result<Vec<FieldGroup>, StoreError> {
        self.inner.load_active()
    }

    fn load_all(&self) -> Result<Vec<FieldGroup>, StoreError> {
        self.inner.load_all()
    }

    fn get(&self, key: &FieldGroupKey) -> Result<Option<FieldGroup>, StoreError> {
        self.inner.get(key)
    }

    fn save(&self, group: &FieldGroup) -> Result<(), StoreError> {
        self.inner.save(group)
    }

    fn delete(&self, key: &FieldGroupKey) -> Result<bool, StoreError> {
        self.inner.delete(key)
    }
}
