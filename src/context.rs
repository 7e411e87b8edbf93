//! Template context construction.
//!
//! The context is the single lookup source for the resolver: a nested JSON
//! object built in three layers, later layers winning on (curated-to-be-
//! disjoint) keys:
//!
//! 1. site variable catalog, dot-path keys nested (`address.street` lands
//!    at `{"address": {"street": ...}}`);
//! 2. instance variable catalog, only when the page has an instance;
//! 3. a whitelist of raw config sections copied through verbatim.
//!
//! Building a context never expands templates: a config value containing
//! `{{...}}` arrives in the context untouched. Only these whitelisted
//! sections are visible to templates; `extra` and `legal` stay private.

use crate::config::SiteConfig;
use crate::vars::{InstanceInput, instance_variables, site_variables};
use serde_json::{Map, Value, json, to_value};

// ============================================================================
// Template Context
// ============================================================================

/// Nested value tree the resolver looks paths up in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateContext {
    root: Map<String, Value>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value under a dot path, creating intermediate objects.
    ///
    /// A non-object intermediate is replaced by a fresh object: last
    /// write wins on shape conflicts.
    pub fn insert_path(&mut self, path: &str, value: Value) {
        let parts: Vec<&str> = path.split('.').collect();
        let Some((last, init)) = parts.split_last() else {
            return;
        };
        if last.is_empty() {
            return;
        }

        let mut current = &mut self.root;
        for part in init {
            let entry = current
                .entry((*part).to_owned())
                .or_insert_with(|| Value::Object(Map::new()));
            if !matches!(entry, Value::Object(_)) {
                *entry = Value::Object(Map::new());
            }
            let Value::Object(next) = entry else { return };
            current = next;
        }
        current.insert((*last).to_owned(), value);
    }

    /// Look a dot path up. `None` when any segment is missing or an
    /// intermediate value is not an object.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut parts = path.split('.');
        let mut current = self.root.get(parts.next()?)?;
        for part in parts {
            current = current.as_object()?.get(part)?;
        }
        Some(current)
    }

    /// Top-level entries.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.root)
    }

    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

// ============================================================================
// Context Building
// ============================================================================

/// Build the lookup context for one page resolution.
///
/// Pass `None` for pages that are not instance-parameterized; the
/// instance catalog is skipped entirely then.
pub fn build_context(config: &SiteConfig, instance: Option<&InstanceInput>) -> TemplateContext {
    let mut ctx = TemplateContext::new();

    for var in site_variables() {
        if let Some(value) = var.value(config) {
            ctx.insert_path(var.key, value);
        }
    }

    if let Some(input) = instance {
        for var in instance_variables() {
            if let Some(value) = var.value(input) {
                ctx.insert_path(var.key, value);
            }
        }
    }

    copy_raw_sections(&mut ctx, config);

    ctx
}

/// Whitelisted raw config sections, copied through verbatim.
fn copy_raw_sections(ctx: &mut TemplateContext, config: &SiteConfig) {
    ctx.insert_path("id", json!(config.base.id));
    ctx.insert_path("name", json!(config.base.name));
    ctx.insert_path("domain", json!(config.base.domain));
    ctx.insert_path("contact", to_value(&config.contact).unwrap_or(Value::Null));
    ctx.insert_path("social", to_value(&config.social).unwrap_or(Value::Null));
    ctx.insert_path(
        "colors",
        to_value(&config.branding.colors).unwrap_or(Value::Null),
    );
    ctx.insert_path(
        "fonts",
        to_value(&config.branding.fonts).unwrap_or(Value::Null),
    );
    ctx.insert_path(
        "navigation",
        to_value(&config.navigation).unwrap_or(Value::Null),
    );
}

// ============================================================================
// Tests
// ============================================================================
