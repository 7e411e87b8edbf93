//! Resolution engine facade.
//!
//! Ties the pipeline together for callers (page routers, build tooling):
//!
//! ```text
//! (site config, page key, raw tree, instance?)
//!     │
//!     ├─ cache lookup ── hit ──────────────────────────► Arc<ResolvedPage>
//!     │
//!     ├─ build_context(config, instance)
//!     ├─ registry.apply_defaults(tree)
//!     ├─ resolve_tree(tree, context)
//!     ├─ validate_tree(resolved, registry)
//!     │
//!     └─ cache insert ─────────────────────────────────► Arc<ResolvedPage>
//! ```
//!
//! Resolution is pure, so the cache is a plain memo table: entries are
//! immutable once written and shared as `Arc`s. Two threads racing on the
//! same cold key both compute the same value and one insert wins, which
//! is harmless. The write lock is never held during resolution.

use std::sync::Arc;

use anyhow::{Result, bail};
use parking_lot::RwLock;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::config::SiteConfig;
use crate::log;
use crate::schema::SchemaRegistry;
use crate::tree::ComponentNode;
use crate::validator::ValidationReport;
use crate::vars::InstanceInput;

/// How loudly validation findings are surfaced.
///
/// Either way the engine returns the full report and never fails a
/// resolution over content problems; [`Engine::resolve_page_strict`] is
/// the failing variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineMode {
    /// Log every validation finding as it is found.
    Development,

    /// Log a one-line summary per invalid page, so a single bad content
    /// node cannot drown the build log of a hundred-site run.
    #[default]
    Production,
}

/// One fully-processed content tree plus its validation outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedPage {
    /// The resolved tree, in input order, ready for the renderer.
    pub nodes: Vec<ComponentNode>,

    /// Validation outcome for `nodes`. Build tooling decides what to do
    /// with an invalid page.
    pub report: ValidationReport,
}

/// One unit of work for [`Engine::resolve_pages`].
#[derive(Debug, Clone)]
pub struct PageRequest {
    /// Identifies the page definition within the site. Also the cache
    /// discriminator, so two different trees must not share a key.
    pub page_key: String,

    /// Raw content tree as authored.
    pub nodes: Vec<ComponentNode>,

    /// Programmatic instance this page is generated for, if any.
    pub instance: Option<InstanceInput>,
}

impl PageRequest {
    pub fn new(page_key: impl Into<String>, nodes: Vec<ComponentNode>) -> Self {
        Self {
            page_key: page_key.into(),
            nodes,
            instance: None,
        }
    }

    pub fn for_instance(mut self, instance: InstanceInput) -> Self {
        self.instance = Some(instance);
        self
    }
}

type CacheKey = (String, String, Option<String>);

/// Shared, thread-safe resolution engine.
///
/// Registry and catalogs are read-only after construction, so one engine
/// serves any number of concurrent page resolutions.
#[derive(Debug)]
pub struct Engine {
    registry: SchemaRegistry,
    mode: EngineMode,
    cache: RwLock<FxHashMap<CacheKey, Arc<ResolvedPage>>>,
}

impl Engine {
    pub fn new(registry: SchemaRegistry, mode: EngineMode) -> Self {
        Self {
            registry,
            mode,
            cache: RwLock::new(FxHashMap::default()),
        }
    }

    /// Engine over the builtin component catalog.
    pub fn builtin(mode: EngineMode) -> Self {
        Self::new(SchemaRegistry::builtin(), mode)
    }

    pub fn mode(&self) -> EngineMode {
        self.mode
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Resolve and validate one page.
    ///
    /// Never fails over content problems; the report inside the returned
    /// page carries them. Results are memoized per
    /// `(site id, page key, instance name)`.
    pub fn resolve_page(
        &self,
        config: &SiteConfig,
        page_key: &str,
        nodes: &[ComponentNode],
        instance: Option<&InstanceInput>,
    ) -> Arc<ResolvedPage> {
        let key: CacheKey = (
            config.base.id.clone(),
            page_key.to_owned(),
            instance.map(|i| i.name.clone()),
        );

        // Fast path: read lock only
        if let Some(page) = self.cache.read().get(&key) {
            return Arc::clone(page);
        }

        let page = crate::resolve_and_validate(config, nodes, instance, &self.registry);
        self.log_report(page_key, &page.report);
        let page = Arc::new(page);

        // First insert wins; a racing recomputation produced the same value
        Arc::clone(self.cache.write().entry(key).or_insert(page))
    }

    /// Like [`Engine::resolve_page`], but fails on an invalid tree.
    /// Meant for development builds that want to stop at the first bad
    /// page instead of shipping it.
    pub fn resolve_page_strict(
        &self,
        config: &SiteConfig,
        page_key: &str,
        nodes: &[ComponentNode],
        instance: Option<&InstanceInput>,
    ) -> Result<Arc<ResolvedPage>> {
        let page = self.resolve_page(config, page_key, nodes, instance);
        if !page.report.valid {
            bail!(
                "page `{page_key}` failed validation with {} error(s):\n  {}",
                page.report.errors.len(),
                page.report.errors.join("\n  ")
            );
        }
        Ok(page)
    }

    /// Resolve a batch of pages in parallel. Output order matches input
    /// order.
    pub fn resolve_pages(
        &self,
        config: &SiteConfig,
        requests: &[PageRequest],
    ) -> Vec<Arc<ResolvedPage>> {
        requests
            .par_iter()
            .map(|req| self.resolve_page(config, &req.page_key, &req.nodes, req.instance.as_ref()))
            .collect()
    }

    /// Drop all memoized pages. Call between builds when page definitions
    /// or site configs may have changed on disk.
    pub fn clear_cache(&self) {
        self.cache.write().clear();
    }

    pub fn cache_len(&self) -> usize {
        self.cache.read().len()
    }

    fn log_report(&self, page_key: &str, report: &ValidationReport) {
        if report.valid && report.warnings.is_empty() {
            return;
        }
        match self.mode {
            EngineMode::Development => {
                for error in &report.errors {
                    log!("error"; "page `{page_key}`: {error}");
                }
                for warning in &report.warnings {
                    log!("engine"; "page `{page_key}`: {warning}");
                }
            }
            EngineMode::Production => {
                if !report.valid {
                    log!(
                        "engine";
                        "page `{page_key}` has {} validation error(s)",
                        report.errors.len()
                    );
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
