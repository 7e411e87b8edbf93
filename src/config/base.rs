//! `[base]` section configuration.
//!
//! Contains the identity of one site variant: id, display name, domain.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in site.toml - site identity.
///
/// # Example
/// ```toml
/// [base]
/// id = "acme-plumbing-berlin"
/// name = "Acme Plumbing"
/// domain = "acme-plumbing.example"
/// description = "Fast and reliable plumbing services"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Unique deployment identifier (kebab-case).
    pub id: String,

    /// Site display name used in headers, titles and copy.
    pub name: String,

    /// Bare hostname the site is served from (no scheme).
    pub domain: String,

    /// Site description for SEO meta tags.
    #[serde(default)]
    pub description: String,

    /// BCP 47 language code (e.g., "en", "de-DE").
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,
}
