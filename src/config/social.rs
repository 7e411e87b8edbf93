//! `[social]` section configuration.

use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[social]` section in site.toml - profile URLs, all optional.
///
/// # Example
/// ```toml
/// [social]
/// facebook = "https://facebook.com/acmeplumbing"
/// instagram = "https://instagram.com/acmeplumbing"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SocialConfig {
    #[serde(default)]
    pub facebook: Option<String>,

    #[serde(default)]
    pub instagram: Option<String>,

    #[serde(default)]
    pub youtube: Option<String>,

    #[serde(default)]
    pub linkedin: Option<String>,
}

impl SocialConfig {
    /// True if no profile URL is set at all.
    pub fn is_empty(&self) -> bool {
        self.facebook.is_none()
            && self.instagram.is_none()
            && self.youtube.is_none()
            && self.linkedin.is_none()
    }
}
