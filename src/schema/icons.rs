//! Icon-name validation.
//!
//! Shared templates ship a fixed icon set; a typo in an icon name renders
//! as a blank glyph in production, so icon-bearing props get checked by
//! name. A prop opts in through its schema description (any mention of
//! "icon"), and its value is walked for icon strings: a bare string, an
//! array of strings, or objects carrying an `icon` field.

use serde_json::Value;

use super::PropSchema;

/// Names of the icons bundled with the shared templates.
///
/// Kept sorted so lookups can binary-search.
pub const ICON_NAMES: &[&str] = &[
    "arrow-right",
    "award",
    "badge-check",
    "briefcase",
    "building",
    "calendar",
    "camera",
    "check",
    "check-circle",
    "chevron-down",
    "chevron-right",
    "clipboard",
    "clock",
    "compass",
    "droplet",
    "euro",
    "flame",
    "gauge",
    "globe",
    "hammer",
    "handshake",
    "heart",
    "home",
    "info",
    "key",
    "leaf",
    "lightbulb",
    "lock",
    "mail",
    "map",
    "map-pin",
    "megaphone",
    "package",
    "paintbrush",
    "phone",
    "recycle",
    "ruler",
    "settings",
    "shield",
    "shield-check",
    "sparkles",
    "star",
    "sun",
    "tag",
    "thermometer",
    "thumbs-up",
    "truck",
    "umbrella",
    "users",
    "wrench",
    "zap",
];

pub fn is_valid_icon(name: &str) -> bool {
    ICON_NAMES.binary_search(&name).is_ok()
}

/// Whether a prop's schema marks it as carrying icon identifiers.
pub fn is_icon_prop(schema: &PropSchema) -> bool {
    schema
        .description
        .as_deref()
        .is_some_and(|d| d.to_ascii_lowercase().contains("icon"))
}

/// Collect `Invalid icon name ...` messages for every unrecognized icon
/// string reachable in `value`.
///
/// Walks one container level deep: a bare string is an icon name, an
/// array is checked element-wise, and an object contributes its `icon`
/// field. Anything else carries no icon and is skipped.
pub fn validate_icon_value(prop: &str, value: &Value) -> Vec<String> {
    let mut errors = Vec::new();
    collect(prop, value, &mut errors);
    errors
}

fn collect(prop: &str, value: &Value, errors: &mut Vec<String>) {
    match value {
        Value::String(name) => {
            if !is_valid_icon(name) {
                errors.push(format!("Invalid icon name '{name}' in property '{prop}'"));
            }
        }
        Value::Array(items) => {
            for item in items {
                collect(prop, item, errors);
            }
        }
        Value::Object(map) => {
            if let Some(Value::String(name)) = map.get("icon")
                && !is_valid_icon(name)
            {
                errors.push(format!("Invalid icon name '{name}' in property '{prop}'"));
            }
        }
        _ => {}
    }
}

// ============================================================================
// Tests
// ============================================================================
