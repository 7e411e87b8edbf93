//! Content tree model.
//!
//! A content tree is an ordered list of component nodes; order is render
//! order and survives every transformation. Nodes are open records: `type`
//! picks the schema, `id` is optional, everything else lands in the prop
//! bag. Unknown keys are a validation concern, not a parse error.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors for direct tree manipulation.
///
/// These signal caller misuse and are meant to abort the calling
/// operation, unlike validation findings which are collected in a report.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("no component node with id `{0}`")]
    NodeNotFound(String),
}

// ============================================================================
// Component Nodes
// ============================================================================

/// One entry of a content tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentNode {
    /// Schema discriminant.
    #[serde(rename = "type")]
    pub kind: String,

    /// Optional stable identifier, used for overrides and anchors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Type-specific props (open record).
    #[serde(flatten)]
    pub props: Map<String, Value>,
}

impl ComponentNode {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: None,
            props: Map::new(),
        }
    }

    pub fn with_id(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: Some(id.into()),
            props: Map::new(),
        }
    }

    /// Builder-style prop insertion, for page plans and tests.
    pub fn prop(mut self, key: impl Into<String>, value: Value) -> Self {
        self.props.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }
}

// ============================================================================
// Tree Operations
// ============================================================================

/// Parse a JSON array of component nodes.
pub fn parse_tree(json: &str) -> Result<Vec<ComponentNode>> {
    let nodes: Vec<ComponentNode> =
        serde_json::from_str(json).context("content tree is not a JSON array of component nodes")?;
    Ok(nodes)
}

/// First node carrying `id`.
pub fn find_by_id<'a>(nodes: &'a [ComponentNode], id: &str) -> Option<&'a ComponentNode> {
    nodes.iter().find(|n| n.id.as_deref() == Some(id))
}

/// New tree with `overrides` merged into the props of the node carrying
/// `id` (override values win on key collision).
///
/// Fails when no node carries the id: per-site overrides target nodes by
/// id, and a dangling override is a page-plan bug that must abort the
/// build rather than silently produce an unpatched page.
pub fn override_by_id(
    nodes: &[ComponentNode],
    id: &str,
    overrides: &Map<String, Value>,
) -> std::result::Result<Vec<ComponentNode>, TreeError> {
    if find_by_id(nodes, id).is_none() {
        return Err(TreeError::NodeNotFound(id.to_owned()));
    }

    Ok(nodes
        .iter()
        .map(|node| {
            if node.id.as_deref() == Some(id) {
                let mut patched = node.clone();
                for (key, value) in overrides {
                    patched.props.insert(key.clone(), value.clone());
                }
                patched
            } else {
                node.clone()
            }
        })
        .collect())
}

// ============================================================================
// Tests
// ============================================================================
