//! `[branding]` section configuration.
//!
//! Brand palette and font choices. Both tables are open-ended: the shared
//! templates decide which keys they read (`primary`, `accent`, ...).

use educe::Educe;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// `[branding]` section in site.toml.
///
/// # Example
/// ```toml
/// [branding.colors]
/// primary = "#0f62fe"
/// accent = "#ff832b"
///
/// [branding.fonts]
/// heading = "Archivo"
/// body = "Inter"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BrandingConfig {
    /// Named colors (CSS color values).
    #[serde(default)]
    pub colors: HashMap<String, String>,

    /// Named font families.
    #[serde(default)]
    pub fonts: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_branding_config() {
        let config = r##"
            [base]
            id = "acme"
            name = "Acme"
            domain = "acme.example"

            [branding.colors]
            primary = "#0f62fe"
            accent = "#ff832b"

            [branding.fonts]
            heading = "Archivo"
        "##;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(
            config.branding.colors.get("primary").map(String::as_str),
            Some("#0f62fe")
        );
        assert_eq!(
            config.branding.fonts.get("heading").map(String::as_str),
            Some("Archivo")
        );
        assert_eq!(config.branding.fonts.get("body"), None);
    }

    #[test]
    fn test_branding_defaults_empty() {
        let config = r#"
            [base]
            id = "acme"
            name = "Acme"
            domain = "acme.example"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert!(config.branding.colors.is_empty());
        assert!(config.branding.fonts.is_empty());
    }
}
