//! Declarative template-variable catalogs.
//!
//! A variable is a catalog entry, not an ad-hoc string replacement: it
//! declares its key (a dot path usable in `{{...}}` tokens), a pure
//! extractor over its source, an optional fallback, and a description for
//! tooling. The two catalogs are strictly scoped:
//!
//! - [`site::site_variables`]: derived from [`SiteConfig`] only;
//! - [`instance::instance_variables`]: derived from [`InstanceInput`] only.
//!
//! Key sets are disjoint so an instance overlay can never be shadowed by a
//! site value (enforced by a test below). Extractors must not read clocks,
//! files or globals; resolution stays deterministic per (config, instance).

pub mod instance;
pub mod site;

pub use instance::instance_variables;
pub use site::site_variables;

use crate::config::SiteConfig;
use crate::utils::slug::slugify;
use serde_json::Value;

// ============================================================================
// Variable Definitions
// ============================================================================

/// One catalog entry: key, extractor, optional fallback.
#[derive(Debug, Clone)]
pub struct Variable<S> {
    /// Dot path the variable is addressable under in templates.
    pub key: &'static str,

    /// Human-readable purpose, surfaced by authoring tools.
    pub description: &'static str,

    /// Pure extraction from the source. `None` means "not available".
    pub extract: fn(&S) -> Option<Value>,

    /// Used when extraction yields `None`. `None` here means the
    /// variable is simply absent from the context.
    pub fallback: Option<Value>,
}

/// Site-scoped variable (source: the site configuration).
pub type SiteVariable = Variable<SiteConfig>;

/// Instance-scoped variable (source: the programmatic instance).
pub type InstanceVariable = Variable<InstanceInput>;

impl<S> Variable<S> {
    /// Extracted value, or the catalog fallback.
    pub fn value(&self, source: &S) -> Option<Value> {
        (self.extract)(source).or_else(|| self.fallback.clone())
    }
}

/// The programmatic instance a page is being resolved for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceInput {
    /// Canonical instance name, e.g. `Berlin`.
    pub name: String,

    /// URL-safe slug, e.g. `berlin`.
    pub slug: String,
}

impl InstanceInput {
    /// Build an input with the slug derived from the name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self { name, slug }
    }

    /// Build an input with an explicit slug (when routing already fixed it).
    pub fn with_slug(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
        }
    }
}

/// `Some(string value)` when non-empty, `None` otherwise.
pub(crate) fn nonempty(s: &str) -> Option<Value> {
    if s.is_empty() {
        None
    } else {
        Some(Value::String(s.to_owned()))
    }
}

// ============================================================================
// Tests
// ============================================================================
