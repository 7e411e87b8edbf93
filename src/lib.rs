//! stencil - content resolution for template-driven multi-site generation.
//!
//! One shared set of component templates serves many near-identical
//! marketing sites, each parameterized by a site configuration and, for
//! city pages, by a programmatic instance. This crate is the content side
//! of that setup: it turns a page's authored component tree into the
//! concrete tree for one (site, instance) pair and checks it against the
//! component catalog before a renderer ever sees it.
//!
//! Pipeline, leaves first:
//!
//! | Stage | Module | Job |
//! |-------|--------|-----|
//! | 1 | [`vars`] | declarative site/instance variable catalogs |
//! | 2 | [`instances`] | curated per-city data with generic fallback |
//! | 3 | [`context`] | variable values merged into one lookup tree |
//! | 4 | [`resolver`] | `{{dotted.path}}` substitution over the tree |
//! | 5 | [`schema`] | component catalog and prop defaults |
//! | 6 | [`validator`] | per-node prop contract checks |
//! | 7 | [`engine`] | caching facade over stages 3 to 6 |
//!
//! # Example
//!
//! ```
//! use stencil::{Engine, EngineMode, SiteConfig, tree};
//!
//! let config = SiteConfig::from_str(r#"
//!     [base]
//!     id = "acme"
//!     name = "Acme"
//!     domain = "acme.example"
//! "#)?;
//!
//! let nodes = tree::parse_tree(r#"[
//!     { "type": "Hero", "id": "hero-1", "h1Text": "Welcome to {{siteName}}" }
//! ]"#)?;
//!
//! let engine = Engine::builtin(EngineMode::Production);
//! let page = engine.resolve_page(&config, "home", &nodes, None);
//!
//! assert!(page.report.valid);
//! assert_eq!(
//!     page.nodes[0].get("h1Text").and_then(|v| v.as_str()),
//!     Some("Welcome to Acme"),
//! );
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod context;
pub mod engine;
pub mod instances;
pub mod logger;
pub mod resolver;
pub mod schema;
pub mod tree;
pub mod utils;
pub mod validator;
pub mod vars;

pub use config::SiteConfig;
pub use context::{TemplateContext, build_context};
pub use engine::{Engine, EngineMode, PageRequest, ResolvedPage};
pub use resolver::{resolve, resolve_str, resolve_tree};
pub use schema::{ComponentSchema, PropSchema, SchemaRegistry};
pub use tree::{ComponentNode, TreeError, parse_tree};
pub use validator::{ValidationReport, validate_tree};
pub use vars::InstanceInput;

/// Run the full pipeline once, without caching: build the context, fill
/// schema defaults, resolve templates, validate.
///
/// This is the pure building block; [`Engine`] adds memoization and
/// mode-dependent logging on top.
///
/// # Example
///
/// ```
/// use stencil::{ComponentNode, InstanceInput, SchemaRegistry, SiteConfig};
/// use serde_json::json;
///
/// let config = SiteConfig::from_str(r#"
///     [base]
///     id = "acme"
///     name = "Acme"
///     domain = "acme.example"
/// "#)?;
///
/// let nodes = vec![
///     ComponentNode::new("Hero").prop("h1Text", json!("{{programmaticInstanceName}}")),
/// ];
/// let registry = SchemaRegistry::builtin();
/// let berlin = InstanceInput::new("Berlin");
///
/// let page = stencil::resolve_and_validate(&config, &nodes, Some(&berlin), &registry);
/// assert_eq!(page.nodes[0].get("h1Text"), Some(&json!("Berlin")));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn resolve_and_validate(
    config: &SiteConfig,
    nodes: &[ComponentNode],
    instance: Option<&InstanceInput>,
    registry: &SchemaRegistry,
) -> ResolvedPage {
    let context = build_context(config, instance);
    let filled = registry.apply_defaults(nodes);
    let resolved = resolve_tree(&filled, &context);
    let report = validate_tree(&resolved, registry);
    ResolvedPage {
        nodes: resolved,
        report,
    }
}
