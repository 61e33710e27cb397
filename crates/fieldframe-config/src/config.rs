// crates/fieldframe-config/src/config.rs
// ============================================================================
// Module: Fieldframe Config
// Description: Config loader + wiring for field group storage and resolution.
// Purpose: Provide config-driven wiring for the SQLite and in-memory stores.
// Dependencies: fieldframe-core, fieldframe-store-sqlite, serde, thiserror, toml
// ============================================================================

//! ## Overview
//! Loads and validates the Fieldframe TOML configuration. The file selects
//! a store backend (in-memory for tests, `SQLite` for durable deployments)
//! and the ordering applied to resolved field groups. Input handling is
//! strict: oversized files, non-UTF-8 content, overlong paths, and unknown
//! keys all fail the load.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use fieldframe_core::GroupOrder;
use fieldframe_core::InMemoryFieldGroupStore;
use fieldframe_core::SharedFieldGroupStore;
use fieldframe_store_sqlite::SqliteFieldGroupStore;
use fieldframe_store_sqlite::SqliteStoreConfig;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default config filename.
const DEFAULT_CONFIG_NAME: &str = "fieldframe.toml";
/// Environment variable override for config path.
const CONFIG_ENV_VAR: &str = "FIELDFRAME_CONFIG";
/// Maximum allowed config file size in bytes.
const MAX_CONFIG_FILE_SIZE: usize = 512 * 1024;
/// Maximum total path length for config-related paths.
const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of a single path component.
const MAX_PATH_COMPONENT_LENGTH: usize = 255;

// ============================================================================
// SECTION: Config Model
// ============================================================================

/// Fieldframe configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldframeConfig {
    /// Store configuration.
    #[serde(default)]
    pub store: StoreConfig,
    /// Resolver configuration.
    #[serde(default)]
    pub resolver: ResolverConfig,
}

impl FieldframeConfig {
    /// Loads configuration from disk.
    ///
    /// Falls back to the `FIELDFRAME_CONFIG` environment variable and then
    /// to `fieldframe.toml` when no explicit path is given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.store.sqlite_path {
            validate_path(path)?;
        }
        if self.store.backend == StoreBackend::Sqlite && self.store.sqlite_path.is_none() {
            return Err(ConfigError::Invalid(
                "sqlite store requires sqlite_path".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds the configured field group store.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Storage`] when the backend cannot be opened.
    pub fn build_store(&self) -> Result<SharedFieldGroupStore, ConfigError> {
        match self.store.backend {
            StoreBackend::Memory => {
                Ok(SharedFieldGroupStore::from_store(InMemoryFieldGroupStore::new()))
            }
            StoreBackend::Sqlite => {
                let path = self.store.sqlite_path.as_ref().ok_or_else(|| {
                    ConfigError::Invalid("sqlite_path is required".to_string())
                })?;
                let mut sqlite = SqliteStoreConfig::new(path.clone());
                if let Some(busy_timeout_ms) = self.store.busy_timeout_ms {
                    sqlite.busy_timeout_ms = busy_timeout_ms;
                }
                let store = SqliteFieldGroupStore::open(sqlite)
                    .map_err(|err| ConfigError::Storage(err.to_string()))?;
                Ok(SharedFieldGroupStore::from_store(store))
            }
        }
    }
}

/// Store backend selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    /// In-memory store (dev/test only).
    Memory,
    /// `SQLite`-backed store.
    #[default]
    Sqlite,
}

/// Store configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Store backend type.
    #[serde(default)]
    pub backend: StoreBackend,
    /// `SQLite` database path.
    #[serde(default)]
    pub sqlite_path: Option<PathBuf>,
    /// Optional `SQLite` busy timeout override in milliseconds.
    #[serde(default)]
    pub busy_timeout_ms: Option<u64>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Sqlite,
            sqlite_path: None,
            busy_timeout_ms: None,
        }
    }
}

/// Ordering applied to resolved field groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolverOrder {
    /// Ascending title, ties broken by key.
    #[default]
    Title,
    /// Store insertion order, untouched.
    Insertion,
}

impl ResolverOrder {
    /// Returns the engine-level ordering value.
    #[must_use]
    pub const fn group_order(self) -> GroupOrder {
        match self {
            Self::Title => GroupOrder::Title,
            Self::Insertion => GroupOrder::Insertion,
        }
    }
}

/// Resolver configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
    /// Ordering applied to resolved groups.
    #[serde(default)]
    pub order: ResolverOrder,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Config errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error.
    #[error("config io error: {0}")]
    Io(String),
    /// Parse error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration.
    #[error("config invalid: {0}")]
    Invalid(String),
    /// Storage wiring error.
    #[error("config storage error: {0}")]
    Storage(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from explicit input or environment.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates path length and components.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}
