// crates/fieldframe-config/src/lib.rs
// ============================================================================
// Module: Fieldframe Config Library
// Description: Configuration model, validation, and store wiring.
// Purpose: Expose the canonical TOML configuration surface.
// Dependencies: crate::config
// ============================================================================

//! ## Overview
//! This crate defines the TOML configuration file for a Fieldframe
//! deployment: which store backend holds field group definitions and how
//! resolved groups are ordered. Loading is strict and fail-closed: unknown
//! keys, oversized files, and non-UTF-8 content are rejected.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::ConfigError;
pub use config::FieldframeConfig;
pub use config::ResolverConfig;
pub use config::ResolverOrder;
pub use config::StoreBackend;
pub use config::StoreConfig;
