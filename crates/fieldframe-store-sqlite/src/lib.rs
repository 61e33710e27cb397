// crates/fieldframe-store-sqlite/src/lib.rs
// ============================================================================
// Module: Fieldframe SQLite Store Library
// Description: Durable FieldGroupStore backed by SQLite.
// Purpose: Expose the SQLite-backed store and its configuration types.
// Dependencies: crate::store
// ============================================================================

//! ## Overview
//! This crate implements a durable [`fieldframe_core::FieldGroupStore`] on
//! top of `SQLite`. Field groups, fields, and location rules live in
//! normalized tables; each save replaces a group's fields and locations in
//! one transaction so readers never observe a half-written definition.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use store::SqliteFieldGroupStore;
pub use store::SqliteStoreConfig;
pub use store::SqliteStoreError;
pub use store::SqliteStoreMode;
pub use store::SqliteSyncMode;
