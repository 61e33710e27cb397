// crates/fieldframe-core/src/core/registry.rs
// ============================================================================
// Module: Fieldframe Field Type Registry
// Description: Static catalog of builtin field types.
// Purpose: Map field type keys to labels, icons, categories, and default config.
// Dependencies: crate::core::identifiers, serde, serde_json
// ============================================================================

//! ## Overview
//! The registry is a pure lookup table. Each entry carries the UI label,
//! icon, palette category, and the default configuration map a new field of
//! that type starts from. The builtin catalog is fixed; unknown type keys are
//! simply absent rather than an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use serde_json::json;

use crate::core::identifiers::FieldTypeKey;

// ============================================================================
// SECTION: Registry Types
// ============================================================================

/// One registered field type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldTypeSpec {
    /// UI label.
    pub label: String,
    /// Icon name.
    pub icon: String,
    /// Palette category.
    pub category: String,
    /// Default configuration for new fields of this type.
    pub defaults: Value,
}

/// Form-facing field type summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldTypeSummary {
    /// Field type key.
    #[serde(rename = "type")]
    pub field_type: FieldTypeKey,
    /// UI label.
    pub label: String,
    /// Icon name.
    pub icon: String,
    /// Palette category.
    pub category: String,
}

/// Static catalog of field types.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldTypeRegistry {
    /// Registered type specs keyed by type key.
    entries: BTreeMap<FieldTypeKey, FieldTypeSpec>,
}

impl Default for FieldTypeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FieldTypeRegistry {
    /// Builds the builtin field type catalog.
    #[must_use]
    pub fn builtin() -> Self {
        let mut entries = BTreeMap::new();
        for (key, label, icon, category, defaults) in builtin_entries() {
            entries.insert(FieldTypeKey::new(key), FieldTypeSpec {
                label: label.to_string(),
                icon: icon.to_string(),
                category: category.to_string(),
                defaults,
            });
        }
        Self {
            entries,
        }
    }

    /// Returns the spec for a field type, if registered.
    #[must_use]
    pub fn get(&self, key: &FieldTypeKey) -> Option<&FieldTypeSpec> {
        self.entries.get(key)
    }

    /// Returns whether a field type is registered.
    #[must_use]
    pub fn contains(&self, key: &FieldTypeKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns all registered type keys in stable order.
    #[must_use]
    pub fn keys(&self) -> Vec<FieldTypeKey> {
        self.entries.keys().cloned().collect()
    }

    /// Returns form-facing summaries for every registered type.
    #[must_use]
    pub fn summaries(&self) -> Vec<FieldTypeSummary> {
        self.entries
            .iter()
            .map(|(key, spec)| FieldTypeSummary {
                field_type: key.clone(),
                label: spec.label.clone(),
                icon: spec.icon.clone(),
                category: spec.category.clone(),
            })
            .collect()
    }

    /// Returns registered types grouped by palette category.
    #[must_use]
    pub fn by_category(&self) -> BTreeMap<String, Vec<FieldTypeSummary>> {
        let mut grouped: BTreeMap<String, Vec<FieldTypeSummary>> = BTreeMap::new();
        for summary in self.summaries() {
            grouped.entry(summary.category.clone()).or_default().push(summary);
        }
        grouped
    }
}

// ============================================================================
// SECTION: Builtin Catalog
// ============================================================================

/// Returns the builtin catalog rows.
#[allow(clippy::too_many_lines, reason = "Catalog data is clearest as one table.")]
fn builtin_entries() -> Vec<(&'static str, &'static str, &'static str, &'static str, Value)> {
    vec![
        ("text", "Text", "text", "basic", json!({
            "placeholder": "",
            "maxlength": null,
            "prepend": "",
            "append": "",
        })),
        ("textarea", "Text Area", "align-left", "basic", json!({
            "placeholder": "",
            "maxlength": null,
            "rows": 4,
        })),
        ("number", "Number", "hash", "basic", json!({
            "min": null,
            "max": null,
            "step": 1,
        })),
        ("email", "Email", "mail", "basic", json!({
            "placeholder": "",
        })),
        ("url", "URL", "link", "basic", json!({
            "placeholder": "",
        })),
        ("wysiwyg", "WYSIWYG Editor", "edit", "content", json!({
            "toolbar": "full",
            "media_upload": true,
        })),
        ("image", "Image", "image", "media", json!({
            "return_format": "array",
            "preview_size": "medium",
            "library": "all",
        })),
        ("file", "File", "file", "media", json!({
            "return_format": "array",
            "library": "all",
        })),
        ("select", "Select", "list", "choice", json!({
            "choices": {},
            "allow_null": false,
            "multiple": false,
        })),
        ("checkbox", "Checkbox", "check-square", "choice", json!({
            "choices": {},
            "layout": "vertical",
        })),
        ("radio", "Radio Button", "circle", "choice", json!({
            "choices": {},
            "layout": "vertical",
        })),
        ("true_false", "True / False", "toggle-right", "choice", json!({
            "message": "",
            "default_value": false,
        })),
        ("date_picker", "Date Picker", "calendar", "datetime", json!({
            "display_format": "d/m/Y",
            "return_format": "d/m/Y",
        })),
        ("time_picker", "Time Picker", "clock", "datetime", json!({
            "display_format": "g:i a",
            "return_format": "g:i a",
        })),
        ("repeater", "Repeater", "layers", "layout", json!({
            "layout": "table",
            "button_label": "Add Row",
            "min": 0,
            "max": 0,
            "subfields": [],
        })),
        ("group", "Group", "folder", "layout", json!({
            "layout": "block",
            "subfields": [],
        })),
        ("flexible_content", "Flexible Content", "grid", "layout", json!({
            "button_label": "Add Block",
            "min": 0,
            "max": 0,
            "layouts": [],
        })),
    ]
}
