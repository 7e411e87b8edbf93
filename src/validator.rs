//! Content tree validation.
//!
//! Walks an ordered tree of component nodes and checks every node against
//! its registered schema. Checks per node, in order:
//!
//! | # | Check | Severity |
//! |---|-------|----------|
//! | 1 | node kind has a schema | error (skips the rest for that node) |
//! | 2 | required props present | error |
//! | 3 | no undeclared props | error |
//! | 4 | value matches declared type | warning (advisory) |
//! | 5 | icon props carry known icon names | error |
//!
//! Validation is a pure single pass. It never fails early and never
//! returns an `Err`: every problem in the tree lands in one report, each
//! message prefixed with the node's position, kind and optional id so a
//! content author can find the offending node without counting.

use serde::Serialize;

use crate::schema::{ComponentSchema, SchemaRegistry, icons};
use crate::tree::ComponentNode;
use serde_json::Value;

// ============================================================================
// Report
// ============================================================================

/// Outcome of validating one content tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// `true` iff `errors` is empty. Warnings never affect validity.
    pub valid: bool,

    /// Contract violations, in node order.
    pub errors: Vec<String>,

    /// Advisory findings (declared-type mismatches), in node order.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    fn from_parts(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Validate an ordered content tree against a schema registry.
pub fn validate_tree(nodes: &[ComponentNode], registry: &SchemaRegistry) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for (index, node) in nodes.iter().enumerate() {
        let label = node_label(index + 1, node);

        let Some(schema) = registry.get(&node.kind) else {
            errors.push(format!("{label}: Unknown component type: {}", node.kind));
            continue;
        };

        for (key, prop) in &schema.props {
            if prop.required && !node.props.contains_key(key) {
                errors.push(format!(
                    "{label}: Missing required property '{key}' for component type '{}'",
                    node.kind
                ));
            }
        }

        for (key, value) in &node.props {
            let Some(prop) = schema.props.get(key) else {
                errors.push(format!(
                    "{label}: Unknown property '{key}' for component type '{}'. \
                     Valid properties are: {}",
                    node.kind,
                    valid_props(schema)
                ));
                continue;
            };

            if let Some(actual) = type_mismatch(&prop.value_type, value) {
                warnings.push(format!(
                    "{label}: Property '{key}' for component type '{}' is declared \
                     '{}' but holds {actual}",
                    node.kind, prop.value_type
                ));
            }

            if icons::is_icon_prop(prop) {
                for message in icons::validate_icon_value(key, value) {
                    errors.push(format!("{label}: {message}"));
                }
            }
        }
    }

    ValidationReport::from_parts(errors, warnings)
}

/// `#3, type="Hero", id="hero-main"` (id part only when the node has one).
fn node_label(position: usize, node: &ComponentNode) -> String {
    match &node.id {
        Some(id) => format!("#{position}, type=\"{}\", id=\"{id}\"", node.kind),
        None => format!("#{position}, type=\"{}\"", node.kind),
    }
}

fn valid_props(schema: &ComponentSchema) -> String {
    schema
        .props
        .keys()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Category of `value` when it contradicts the declared type, `None` when
/// it matches. Null values and loose declared labels (`"string|object"`)
/// are not checked.
fn type_mismatch(declared: &str, value: &Value) -> Option<&'static str> {
    let actual = match value {
        Value::Null => return None,
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    match declared {
        "string" | "number" | "boolean" | "array" | "object" => {
            (declared != actual).then_some(actual)
        }
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
