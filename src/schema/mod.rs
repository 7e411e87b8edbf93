//! Component schema registry.
//!
//! Every component type the shared templates can render has one schema:
//! its prop contract (required/optional, declared type, default,
//! description). Schemas are data, not code; adding a component kind means
//! adding a catalog entry. The registry is read-only after construction
//! and safe to share across parallel page resolutions.

pub mod catalog;
pub mod icons;

use crate::tree::ComponentNode;
use serde_json::Value;
use std::collections::BTreeMap;

// ============================================================================
// Schema Model
// ============================================================================

/// Contract for a single prop.
#[derive(Debug, Clone)]
pub struct PropSchema {
    /// Declared type label ("string", "number", "boolean", "array",
    /// "object", or a looser label like "string|object").
    pub value_type: String,

    /// Whether the prop must be present on the node.
    pub required: bool,

    /// Filled into the node by [`SchemaRegistry::apply_defaults`] when the
    /// prop is absent. May contain template tokens.
    pub default: Option<Value>,

    /// Authoring hint. Descriptions mentioning "icon" opt the prop into
    /// icon-name validation.
    pub description: Option<String>,
}

impl PropSchema {
    pub fn new(value_type: impl Into<String>) -> Self {
        Self {
            value_type: value_type.into(),
            required: false,
            default: None,
            description: None,
        }
    }

    pub fn string() -> Self {
        Self::new("string")
    }

    pub fn number() -> Self {
        Self::new("number")
    }

    pub fn boolean() -> Self {
        Self::new("boolean")
    }

    pub fn array() -> Self {
        Self::new("array")
    }

    pub fn object() -> Self {
        Self::new("object")
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Prop contract for one component type.
#[derive(Debug, Clone)]
pub struct ComponentSchema {
    /// Discriminant matched against `ComponentNode::kind`.
    pub kind: String,

    /// Human-readable component name.
    pub name: String,

    /// What the component renders.
    pub description: String,

    /// Prop table, keyed by prop name.
    pub props: BTreeMap<String, PropSchema>,
}

impl ComponentSchema {
    pub fn new(
        kind: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            description: description.into(),
            props: BTreeMap::new(),
        }
    }

    pub fn prop(mut self, key: impl Into<String>, schema: PropSchema) -> Self {
        self.props.insert(key.into(), schema);
        self
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Lookup table from component kind to schema.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: BTreeMap<String, ComponentSchema>,
}

impl SchemaRegistry {
    /// Empty registry, for tests and embedders bringing their own catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the builtin component catalog.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for schema in catalog::builtin_schemas() {
            registry.register(schema);
        }
        registry
    }

    /// Register a schema. Re-registering a kind replaces the previous
    /// schema (last write wins).
    pub fn register(&mut self, schema: ComponentSchema) {
        self.schemas.insert(schema.kind.clone(), schema);
    }

    pub fn get(&self, kind: &str) -> Option<&ComponentSchema> {
        self.schemas.get(kind)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.schemas.contains_key(kind)
    }

    /// All schemas, ordered by kind.
    pub fn all(&self) -> impl Iterator<Item = &ComponentSchema> {
        self.schemas.values()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Declared prop defaults for a kind, keyed by prop name. Empty for
    /// unknown kinds and for schemas declaring no defaults.
    pub fn defaults_for(&self, kind: &str) -> serde_json::Map<String, Value> {
        let mut defaults = serde_json::Map::new();
        if let Some(schema) = self.get(kind) {
            for (key, prop) in &schema.props {
                if let Some(default) = &prop.default {
                    defaults.insert(key.clone(), default.clone());
                }
            }
        }
        defaults
    }

    /// New tree with schema defaults filled into each node's missing
    /// props. Unknown kinds pass through unchanged. Defaults may contain
    /// template tokens, so callers apply them before resolution.
    pub fn apply_defaults(&self, nodes: &[ComponentNode]) -> Vec<ComponentNode> {
        nodes
            .iter()
            .map(|node| {
                let mut filled = node.clone();
                for (key, default) in self.defaults_for(&node.kind) {
                    if !filled.props.contains_key(&key) {
                        filled.props.insert(key, default);
                    }
                }
                filled
            })
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
