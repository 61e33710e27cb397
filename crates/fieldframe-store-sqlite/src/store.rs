// crates/fieldframe-store-sqlite/src/store.rs
// ============================================================================
// Module: SQLite Field Group Store
// Description: Durable FieldGroupStore backed by SQLite WAL.
// Purpose: Persist field group definitions with atomic replacement.
// Dependencies: fieldframe-core, rusqlite, serde, serde_json, thiserror, tracing
// ============================================================================

//! ## Overview
//! This module implements a durable [`FieldGroupStore`] using `SQLite`.
//! Groups, fields, and location rules live in normalized tables with
//! `ON DELETE CASCADE` foreign keys. A save upserts the group row and
//! replaces its fields and locations inside one transaction, so a failed
//! save leaves the previous definition intact. Database contents are
//! untrusted; malformed rows surface as [`SqliteStoreError::Corrupt`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use fieldframe_core::ConditionalLogic;
use fieldframe_core::Field;
use fieldframe_core::FieldConfig;
use fieldframe_core::FieldGroup;
use fieldframe_core::FieldGroupKey;
use fieldframe_core::FieldGroupStore;
use fieldframe_core::GroupPosition;
use fieldframe_core::GroupStyle;
use fieldframe_core::LocationParam;
use fieldframe_core::LocationRule;
use fieldframe_core::RuleOperator;
use fieldframe_core::StoreError;
use rusqlite::Connection;
use rusqlite::ErrorCode;
use rusqlite::OpenFlags;
use rusqlite::OptionalExtension;
use rusqlite::Transaction;
use rusqlite::params;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// `SQLite` schema version for the store.
const SCHEMA_VERSION: i64 = 1;
/// Default busy timeout (ms).
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;
/// Maximum length of a single path component.
const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
const MAX_TOTAL_PATH_LENGTH: usize = 4096;

// ============================================================================
// SECTION: Config
// ============================================================================

/// `SQLite` journal mode configuration.
///
/// # Invariants
/// - Values map 1:1 to `SQLite` `journal_mode` pragma settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SqliteStoreMode {
    /// WAL journal mode (recommended).
    #[default]
    Wal,
    /// Delete journal mode (legacy).
    Delete,
}

impl SqliteStoreMode {
    /// Returns the `SQLite` pragma value.
    #[must_use]
    pub const fn pragma_value(self) -> &'static str {
        match self {
            Self::Wal => "wal",
            Self::Delete => "delete",
        }
    }
}

/// `SQLite` sync mode configuration.
///
/// # Invariants
/// - Values map 1:1 to `SQLite` `synchronous` pragma settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SqliteSyncMode {
    /// Full synchronous mode (safest).
    #[default]
    Full,
    /// Normal synchronous mode (balanced).
    Normal,
}

impl SqliteSyncMode {
    /// Returns the `SQLite` pragma value.
    #[must_use]
    pub const fn pragma_value(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Normal => "normal",
        }
    }
}

/// Configuration for the `SQLite` field group store.
///
/// # Invariants
/// - `path` must resolve to a file path (not a directory).
/// - `busy_timeout_ms` is interpreted as milliseconds.
#[derive(Debug, Clone, Deserialize)]
pub struct SqliteStoreConfig {
    /// Path to the `SQLite` database file.
    pub path: PathBuf,
    /// Busy timeout in milliseconds.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
    /// `SQLite` journal mode.
    #[serde(default)]
    pub journal_mode: SqliteStoreMode,
    /// `SQLite` sync mode.
    #[serde(default)]
    pub sync_mode: SqliteSyncMode,
}

impl SqliteStoreConfig {
    /// Creates a configuration with defaults for the given database path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
            journal_mode: SqliteStoreMode::Wal,
            sync_mode: SqliteSyncMode::Full,
        }
    }
}

/// Returns the default busy timeout for `SQLite` connections.
const fn default_busy_timeout_ms() -> u64 {
    DEFAULT_BUSY_TIMEOUT_MS
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// `SQLite` store errors.
///
/// # Invariants
/// - Error messages avoid embedding raw field configuration payloads.
#[derive(Debug, Error, Clone)]
pub enum SqliteStoreError {
    /// Store I/O error.
    #[error("sqlite store io error: {0}")]
    Io(String),
    /// `SQLite` engine error.
    #[error("sqlite store db error: {0}")]
    Db(String),
    /// Unique key collision.
    #[error("sqlite store constraint violation: {0}")]
    Constraint(String),
    /// Store corruption or undecodable row data.
    #[error("sqlite store corruption: {0}")]
    Corrupt(String),
    /// Store schema version mismatch.
    #[error("sqlite store version mismatch: {0}")]
    VersionMismatch(String),
    /// Invalid store data.
    #[error("sqlite store invalid data: {0}")]
    Invalid(String),
}

impl From<SqliteStoreError> for StoreError {
    fn from(error: SqliteStoreError) -> Self {
        match error {
            SqliteStoreError::Io(message) => Self::Io(message),
            SqliteStoreError::Db(message) | SqliteStoreError::VersionMismatch(message) => {
                Self::Store(message)
            }
            SqliteStoreError::Constraint(message) => Self::Conflict(message),
            SqliteStoreError::Corrupt(message) => Self::Corrupt(message),
            SqliteStoreError::Invalid(message) => Self::Invalid(message),
        }
    }
}

// ============================================================================
// SECTION: Store
// ============================================================================

/// `SQLite`-backed field group store with WAL support.
///
/// # Invariants
/// - Saves replace a group's fields and locations in one transaction.
/// - `SQLite` connection access is serialized through a mutex.
#[derive(Clone, Debug)]
pub struct SqliteFieldGroupStore {
    /// Store configuration.
    config: SqliteStoreConfig,
    /// Shared connection guarded by a mutex.
    connection: Arc<Mutex<Connection>>,
}

impl SqliteFieldGroupStore {
    /// Opens (or creates) the store at the configured path.
    ///
    /// # Errors
    ///
    /// Returns [`SqliteStoreError`] when the path is invalid, the database
    /// cannot be opened, or the stored schema version is unsupported.
    pub fn open(config: SqliteStoreConfig) -> Result<Self, SqliteStoreError> {
        validate_store_path(&config.path)?;
        ensure_parent_dir(&config.path)?;
        let mut connection = open_connection(&config)?;
        initialize_schema(&mut connection)?;
        Ok(Self {
            config,
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    /// Returns the store configuration.
    #[must_use]
    pub const fn config(&self) -> &SqliteStoreConfig {
        &self.config
    }

    /// Acquires the connection mutex.
    fn lock_connection(&self) -> Result<std::sync::MutexGuard<'_, Connection>, SqliteStoreError> {
        self.connection
            .lock()
            .map_err(|_| SqliteStoreError::Db("store connection mutex poisoned".to_string()))
    }

    /// Loads field groups, optionally restricted to active ones.
    fn load_groups(&self, active_only: bool) -> Result<Vec<FieldGroup>, SqliteStoreError> {
        let connection = self.lock_connection()?;
        let sql = if active_only {
            "SELECT id, key, title, position, style, active FROM field_groups \
             WHERE active = 1 ORDER BY key"
        } else {
            "SELECT id, key, title, position, style, active FROM field_groups ORDER BY key"
        };
        let mut stmt = statement(&connection, sql)?;
        let rows = stmt
            .query_map(params![], read_group_row)
            .map_err(|err| map_db_error(&err))?;
        let mut groups = Vec::new();
        for row in rows {
            let (group_id, mut group) = row.map_err(|err| map_db_error(&err))?;
            group.fields = load_fields(&connection, group_id)?;
            group.locations = load_locations(&connection, group_id)?;
            groups.push(group);
        }
        Ok(groups)
    }
}

impl FieldGroupStore for SqliteFieldGroupStore {
    fn load_active(&self) -> Result<Vec<FieldGroup>, StoreError> {
        self.load_groups(true).map_err(StoreError::from)
    }

    fn load_all(&self) -> Result<Vec<FieldGroup>, StoreError> {
        self.load_groups(false).map_err(StoreError::from)
    }

    fn get(&self, key: &FieldGroupKey) -> Result<Option<FieldGroup>, StoreError> {
        let connection = self.lock_connection().map_err(StoreError::from)?;
        let mut stmt = statement(
            &connection,
            "SELECT id, key, title, position, style, active FROM field_groups WHERE key = ?1",
        )
        .map_err(StoreError::from)?;
        let row = stmt
            .query_row(params![key.as_str()], read_group_row)
            .optional()
            .map_err(|err| StoreError::from(map_db_error(&err)))?;
        let Some((group_id, mut group)) = row else {
            return Ok(None);
        };
        group.fields = load_fields(&connection, group_id).map_err(StoreError::from)?;
        group.locations = load_locations(&connection, group_id).map_err(StoreError::from)?;
        Ok(Some(group))
    }

    fn save(&self, group: &FieldGroup) -> Result<(), StoreError> {
        group
            .validate()
            .map_err(|err| StoreError::Invalid(err.to_string()))?;
        let mut connection = self.lock_connection().map_err(StoreError::from)?;
        let tx = connection
            .transaction()
            .map_err(|err| StoreError::from(map_db_error(&err)))?;
        let group_id = upsert_group(&tx, group).map_err(StoreError::from)?;
        replace_fields(&tx, group_id, &group.fields).map_err(StoreError::from)?;
        replace_locations(&tx, group_id, &group.locations).map_err(StoreError::from)?;
        tx.commit().map_err(|err| StoreError::from(map_db_error(&err)))?;
        tracing::debug!(
            group_key = group.key.as_str(),
            field_count = group.fields.len(),
            location_count = group.locations.len(),
            "saved field group"
        );
        Ok(())
    }

    fn delete(&self, key: &FieldGroupKey) -> Result<bool, StoreError> {
        let connection = self.lock_connection().map_err(StoreError::from)?;
        let deleted = connection
            .execute("DELETE FROM field_groups WHERE key = ?1", params![key.as_str()])
            .map_err(|err| StoreError::from(map_db_error(&err)))?;
        if deleted > 0 {
            tracing::debug!(group_key = key.as_str(), "deleted field group");
        }
        Ok(deleted > 0)
    }
}

// ============================================================================
// SECTION: Row Codecs
// ============================================================================

/// Reads a group header row into its rowid and an empty [`FieldGroup`].
fn read_group_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<(i64, FieldGroup)> {
    let id: i64 = row.get(0)?;
    let key: String = row.get(1)?;
    let title: String = row.get(2)?;
    let position: String = row.get(3)?;
    let style: String = row.get(4)?;
    let active: bool = row.get(5)?;
    let group = FieldGroup {
        title,
        key: FieldGroupKey::new(key),
        position: decode_position(3, &position)?,
        style: decode_style(4, &style)?,
        active,
        fields: Vec::new(),
        locations: Vec::new(),
    };
    Ok((id, group))
}

/// Loads a group's fields ordered by their stored `order`.
fn load_fields(connection: &Connection, group_id: i64) -> Result<Vec<Field>, SqliteStoreError> {
    let mut stmt = statement(
        connection,
        "SELECT key, label, name, field_type, instructions, required, conditional_logic, \
         field_config, \"order\" FROM fields WHERE group_id = ?1 ORDER BY \"order\", id",
    )?;
    let rows = stmt
        .query_map(params![group_id], read_field_row)
        .map_err(|err| map_db_error(&err))?;
    let mut fields = Vec::new();
    for row in rows {
        fields.push(row.map_err(|err| map_db_error(&err))?);
    }
    Ok(fields)
}

/// Reads one field row, decoding the JSON configuration columns.
fn read_field_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Field> {
    let key: String = row.get(0)?;
    let label: String = row.get(1)?;
    let name: String = row.get(2)?;
    let field_type: String = row.get(3)?;
    let instructions: Option<String> = row.get(4)?;
    let required: bool = row.get(5)?;
    let conditional_logic: Option<String> = row.get(6)?;
    let field_config: String = row.get(7)?;
    let order: i64 = row.get(8)?;
    let conditional_logic = conditional_logic
        .map(|raw| decode_json::<ConditionalLogic>(6, &raw))
        .transpose()?;
    let config = decode_json::<FieldConfig>(7, &field_config)?;
    Ok(Field {
        key: key.into(),
        label,
        name: name.into(),
        field_type: field_type.into(),
        instructions,
        required,
        conditional_logic,
        config,
        order,
    })
}

/// Loads a group's location rules ordered by rule group.
fn load_locations(
    connection: &Connection,
    group_id: i64,
) -> Result<Vec<LocationRule>, SqliteStoreError> {
    let mut stmt = statement(
        connection,
        "SELECT rule_group, param, operator, value FROM field_group_locations \
         WHERE group_id = ?1 ORDER BY rule_group, id",
    )?;
    let rows = stmt
        .query_map(params![group_id], |row| {
            let rule_group: i64 = row.get(0)?;
            let param: String = row.get(1)?;
            let operator: String = row.get(2)?;
            let value: String = row.get(3)?;
            Ok(LocationRule {
                rule_group,
                param: LocationParam::from(param),
                operator: RuleOperator::from(operator),
                value,
            })
        })
        .map_err(|err| map_db_error(&err))?;
    let mut locations = Vec::new();
    for row in rows {
        locations.push(row.map_err(|err| map_db_error(&err))?);
    }
    Ok(locations)
}

/// Decodes a JSON column, converting parse failures into row errors.
fn decode_json<T: serde::de::DeserializeOwned>(
    column: usize,
    raw: &str,
) -> rusqlite::Result<T> {
    serde_json::from_str(raw).map_err(|err| {
        rusqlite::Error::FromSqlConversionFailure(
            column,
            rusqlite::types::Type::Text,
            Box::new(err),
        )
    })
}

/// Decodes a stored position label.
fn decode_position(column: usize, raw: &str) -> rusqlite::Result<GroupPosition> {
    match raw {
        "normal" => Ok(GroupPosition::Normal),
        "side" => Ok(GroupPosition::Side),
        _ => Err(invalid_label(column, raw)),
    }
}

/// Decodes a stored style label.
fn decode_style(column: usize, raw: &str) -> rusqlite::Result<GroupStyle> {
    match raw {
        "default" => Ok(GroupStyle::Default),
        "seamless" => Ok(GroupStyle::Seamless),
        _ => Err(invalid_label(column, raw)),
    }
}

/// Builds a row error for an unrecognized stored label.
fn invalid_label(column: usize, raw: &str) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        column,
        rusqlite::types::Type::Text,
        format!("unrecognized stored label: {raw}").into(),
    )
}

/// Returns the stored label for a position.
const fn encode_position(position: GroupPosition) -> &'static str {
    match position {
        GroupPosition::Normal => "normal",
        GroupPosition::Side => "side",
    }
}

/// Returns the stored label for a style.
const fn encode_style(style: GroupStyle) -> &'static str {
    match style {
        GroupStyle::Default => "default",
        GroupStyle::Seamless => "seamless",
    }
}

// ============================================================================
// SECTION: Write Path
// ============================================================================

/// Upserts the group header row and returns its rowid.
fn upsert_group(tx: &Transaction<'_>, group: &FieldGroup) -> Result<i64, SqliteStoreError> {
    tx.execute(
        "INSERT INTO field_groups (key, title, position, style, active) \
         VALUES (?1, ?2, ?3, ?4, ?5) \
         ON CONFLICT(key) DO UPDATE SET \
         title = excluded.title, position = excluded.position, \
         style = excluded.style, active = excluded.active",
        params![
            group.key.as_str(),
            group.title,
            encode_position(group.position),
            encode_style(group.style),
            group.active,
        ],
    )
    .map_err(|err| map_db_error(&err))?;
    tx.query_row(
        "SELECT id FROM field_groups WHERE key = ?1",
        params![group.key.as_str()],
        |row| row.get(0),
    )
    .map_err(|err| map_db_error(&err))
}

/// Replaces a group's fields, assigning `order` from submitted position.
fn replace_fields(
    tx: &Transaction<'_>,
    group_id: i64,
    fields: &[Field],
) -> Result<(), SqliteStoreError> {
    tx.execute("DELETE FROM fields WHERE group_id = ?1", params![group_id])
        .map_err(|err| map_db_error(&err))?;
    let mut stmt = tx
        .prepare(
            "INSERT INTO fields (group_id, key, label, name, field_type, instructions, \
             required, conditional_logic, field_config, \"order\") \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        )
        .map_err(|err| map_db_error(&err))?;
    for (index, field) in fields.iter().enumerate() {
        let order = i64::try_from(index)
            .map_err(|_| SqliteStoreError::Invalid("field count exceeds i64".to_string()))?;
        let conditional_logic = field
            .conditional_logic
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|err| SqliteStoreError::Invalid(err.to_string()))?;
        let field_config = serde_json::to_string(&field.config)
            .map_err(|err| SqliteStoreError::Invalid(err.to_string()))?;
        stmt.execute(params![
            group_id,
            field.key.as_str(),
            field.label,
            field.name.as_str(),
            field.field_type.as_str(),
            field.instructions,
            field.required,
            conditional_logic,
            field_config,
            order,
        ])
        .map_err(|err| map_db_error(&err))?;
    }
    Ok(())
}

/// Replaces a group's location rules.
fn replace_locations(
    tx: &Transaction<'_>,
    group_id: i64,
    locations: &[LocationRule],
) -> Result<(), SqliteStoreError> {
    tx.execute(
        "DELETE FROM field_group_locations WHERE group_id = ?1",
        params![group_id],
    )
    .map_err(|err| map_db_error(&err))?;
    let mut stmt = tx
        .prepare(
            "INSERT INTO field_group_locations (group_id, rule_group, param, operator, value) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .map_err(|err| map_db_error(&err))?;
    for rule in locations {
        stmt.execute(params![
            group_id,
            rule.rule_group,
            String::from(rule.param.clone()),
            String::from(rule.operator.clone()),
            rule.value,
        ])
        .map_err(|err| map_db_error(&err))?;
    }
    Ok(())
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Prepares a statement, mapping preparation failures.
fn statement<'conn>(
    connection: &'conn Connection,
    sql: &str,
) -> Result<rusqlite::Statement<'conn>, SqliteStoreError> {
    connection.prepare(sql).map_err(|err| map_db_error(&err))
}

/// Classifies a `rusqlite` error into a store error.
fn map_db_error(error: &rusqlite::Error) -> SqliteStoreError {
    if let rusqlite::Error::SqliteFailure(code, message) = error
        && code.code == ErrorCode::ConstraintViolation
    {
        let message = message
            .clone()
            .unwrap_or_else(|| "unique constraint violated".to_string());
        return SqliteStoreError::Constraint(message);
    }
    if let rusqlite::Error::FromSqlConversionFailure(_, _, source) = error {
        return SqliteStoreError::Corrupt(source.to_string());
    }
    SqliteStoreError::Db(error.to_string())
}

/// Ensures the parent directory for the store exists.
fn ensure_parent_dir(path: &Path) -> Result<(), SqliteStoreError> {
    let Some(parent) = path.parent() else {
        return Err(SqliteStoreError::Io("store path missing parent directory".to_string()));
    };
    std::fs::create_dir_all(parent).map_err(|err| SqliteStoreError::Io(err.to_string()))
}

/// Validates store paths for safety limits.
fn validate_store_path(path: &Path) -> Result<(), SqliteStoreError> {
    if path.as_os_str().is_empty() {
        return Err(SqliteStoreError::Invalid("store path must not be empty".to_string()));
    }
    let path_string = path.display().to_string();
    if path_string.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(SqliteStoreError::Invalid("store path exceeds length limit".to_string()));
    }
    for component in path.components() {
        let name = component.as_os_str().to_string_lossy();
        if name.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(SqliteStoreError::Invalid(
                "store path contains an overlong component".to_string(),
            ));
        }
    }
    if path.exists() && path.is_dir() {
        return Err(SqliteStoreError::Invalid(
            "store path must be a file, not a directory".to_string(),
        ));
    }
    Ok(())
}

/// Opens an `SQLite` connection with secure defaults.
fn open_connection(config: &SqliteStoreConfig) -> Result<Connection, SqliteStoreError> {
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_CREATE
        | OpenFlags::SQLITE_OPEN_FULL_MUTEX;
    let connection = Connection::open_with_flags(&config.path, flags)
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    apply_pragmas(&connection, config)?;
    Ok(connection)
}

/// Applies `SQLite` pragmas required for durability and cascade deletes.
fn apply_pragmas(
    connection: &Connection,
    config: &SqliteStoreConfig,
) -> Result<(), SqliteStoreError> {
    connection
        .execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    connection
        .execute_batch(&format!("PRAGMA journal_mode = {};", config.journal_mode.pragma_value()))
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    connection
        .execute_batch(&format!("PRAGMA synchronous = {};", config.sync_mode.pragma_value()))
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    connection
        .busy_timeout(Duration::from_millis(config.busy_timeout_ms))
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    Ok(())
}

/// Initializes the `SQLite` schema or validates the existing version.
fn initialize_schema(connection: &mut Connection) -> Result<(), SqliteStoreError> {
    let tx = connection.transaction().map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    tx.execute_batch("CREATE TABLE IF NOT EXISTS store_meta (version INTEGER NOT NULL);")
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    let version: Option<i64> = tx
        .query_row("SELECT version FROM store_meta LIMIT 1", params![], |row| row.get(0))
        .optional()
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    match version {
        None => {
            tx.execute("INSERT INTO store_meta (version) VALUES (?1)", params![SCHEMA_VERSION])
                .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
            tx.execute_batch(
                "CREATE TABLE IF NOT EXISTS field_groups (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    key TEXT NOT NULL UNIQUE,
                    title TEXT NOT NULL,
                    position TEXT NOT NULL,
                    style TEXT NOT NULL,
                    active INTEGER NOT NULL
                );
                CREATE TABLE IF NOT EXISTS fields (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    group_id INTEGER NOT NULL
                        REFERENCES field_groups(id) ON DELETE CASCADE,
                    key TEXT NOT NULL UNIQUE,
                    label TEXT NOT NULL,
                    name TEXT NOT NULL,
                    field_type TEXT NOT NULL,
                    instructions TEXT,
                    required INTEGER NOT NULL,
                    conditional_logic TEXT,
                    field_config TEXT NOT NULL,
                    \"order\" INTEGER NOT NULL
                );
                CREATE INDEX IF NOT EXISTS idx_fields_group_id
                    ON fields (group_id);
                CREATE TABLE IF NOT EXISTS field_group_locations (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    group_id INTEGER NOT NULL
                        REFERENCES field_groups(id) ON DELETE CASCADE,
                    rule_group INTEGER NOT NULL,
                    param TEXT NOT NULL,
                    operator TEXT NOT NULL,
                    value TEXT NOT NULL
                );
                CREATE INDEX IF NOT EXISTS idx_field_group_locations_group_id
                    ON field_group_locations (group_id);",
            )
            .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        }
        Some(value) if value == SCHEMA_VERSION => {}
        Some(value) => {
            return Err(SqliteStoreError::VersionMismatch(format!(
                "unsupported schema version: {value}"
            )));
        }
    }
    tx.commit().map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    Ok(())
}
