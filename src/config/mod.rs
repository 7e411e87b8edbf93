//! Site configuration management for `site.toml`.
//!
//! Every deployable site variant ships one `site.toml`. The shared page
//! templates are identical across the fleet; this file is where a variant
//! differs from its siblings.
//!
//! # Sections
//!
//! | Section        | Purpose                                         |
//! |----------------|-------------------------------------------------|
//! | `[base]`       | Site identity (id, name, domain, description)   |
//! | `[contact]`    | Phone, email, opening hours, postal address     |
//! | `[social]`     | Profile URLs (all optional)                     |
//! | `[branding]`   | Brand palette and fonts                         |
//! | `[[navigation]]` | Ordered header/footer links                   |
//! | `[legal]`      | Imprint data                                    |
//! | `[extra]`      | User-defined custom fields                      |
//!
//! # Example
//!
//! ```toml
//! [base]
//! id = "acme-plumbing-berlin"
//! name = "Acme Plumbing"
//! domain = "acme-plumbing.example"
//! description = "Fast and reliable plumbing services"
//!
//! [contact]
//! phone = "+49 30 4050607"
//! email = "info@acme-plumbing.example"
//!
//! [contact.address]
//! street = "Hauptstraße 12"
//! zip = "10115"
//! city = "Berlin"
//!
//! [branding.colors]
//! primary = "#0f62fe"
//!
//! [[navigation]]
//! label = "Home"
//! href = "/"
//!
//! [extra]
//! analytics_id = "UA-12345"
//! ```

mod base;
mod branding;
mod contact;
pub mod defaults;
mod error;
mod legal;
mod navigation;
mod social;

// Re-export public types used by other modules
pub use branding::BrandingConfig;
pub use contact::{AddressConfig, ContactConfig};
pub use error::ConfigError;
pub use legal::LegalConfig;
pub use navigation::NavLink;
pub use social::SocialConfig;

// Internal imports used in this module
use base::BaseConfig;

use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::Path};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Site identity
    #[serde(default)]
    pub base: BaseConfig,

    /// Contact data
    #[serde(default)]
    pub contact: ContactConfig,

    /// Social profile URLs
    #[serde(default)]
    pub social: SocialConfig,

    /// Brand palette and fonts
    #[serde(default)]
    pub branding: BrandingConfig,

    /// Ordered navigation links
    #[serde(default)]
    pub navigation: Vec<NavLink>,

    /// Imprint data
    #[serde(default)]
    pub legal: LegalConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Canonical absolute URL of the site (https, no trailing slash).
    pub fn site_url(&self) -> String {
        format!("https://{}", self.base.domain)
    }

    /// Registered company name, falling back to the display name.
    pub fn company_name(&self) -> &str {
        if self.legal.company_name.is_empty() {
            &self.base.name
        } else {
            &self.legal.company_name
        }
    }

    /// Validate configuration before handing it to the engine
    pub fn validate(&self) -> Result<()> {
        if self.base.id.is_empty() {
            bail!(ConfigError::Validation("[base.id] must not be empty".into()));
        }

        if !self
            .base
            .id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            bail!(ConfigError::Validation(format!(
                "[base.id] must be a kebab-case identifier, got `{}`",
                self.base.id
            )));
        }

        if self.base.name.is_empty() {
            bail!(ConfigError::Validation("[base.name] must not be empty".into()));
        }

        if self.base.domain.is_empty() {
            bail!(ConfigError::Validation("[base.domain] must not be empty".into()));
        }

        if self.base.domain.contains("://") {
            bail!(ConfigError::Validation(
                "[base.domain] must be a bare hostname, not a URL".into()
            ));
        }

        if !self.contact.email.is_empty() && !self.contact.email.contains('@') {
            bail!(ConfigError::Validation(format!(
                "[contact.email] is not an email address: `{}`",
                self.contact.email
            )));
        }

        for link in &self.navigation {
            if link.label.is_empty() || link.href.is_empty() {
                bail!(ConfigError::Validation(
                    "[[navigation]] entries must set both label and href".into()
                ));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn minimal() -> SiteConfig {
        SiteConfig::from_str(
            r#"
            [base]
            id = "acme"
            name = "Acme"
            domain = "acme.example"
        "#,
        )
        .unwrap()
    }

    #[test]
    fn test_from_str() {
        let config = minimal();
        assert_eq!(config.base.id, "acme");
        assert_eq!(config.base.name, "Acme");
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let invalid_config = r#"
            [base
            id = "acme"
        "#;
        let result = SiteConfig::from_str(invalid_config);

        assert!(result.is_err());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [base]
            id = "acme"
            name = "Acme"
            domain = "acme.example"
        "#
        )
        .unwrap();

        let config = SiteConfig::from_path(file.path()).unwrap();
        assert_eq!(config.base.domain, "acme.example");
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = SiteConfig::from_path(Path::new("/nonexistent/site.toml"));
        assert!(result.is_err());
        let err = format!("{:#}", result.unwrap_err());
        assert!(err.contains("IO error"));
    }

    #[test]
    fn test_site_url() {
        let config = minimal();
        assert_eq!(config.site_url(), "https://acme.example");
    }

    #[test]
    fn test_company_name_fallback() {
        let mut config = minimal();
        assert_eq!(config.company_name(), "Acme");

        config.legal.company_name = "Acme Plumbing GmbH".into();
        assert_eq!(config.company_name(), "Acme Plumbing GmbH");
    }

    #[test]
    fn test_extra_fields() {
        let config = r#"
            [base]
            id = "acme"
            name = "Acme"
            domain = "acme.example"

            [extra]
            analytics_id = "UA-12345"
            number_field = 42
            nested = { key = "value" }
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(
            config.extra.get("analytics_id").and_then(|v| v.as_str()),
            Some("UA-12345")
        );
        assert_eq!(
            config.extra.get("number_field").and_then(|v| v.as_integer()),
            Some(42)
        );
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let config = r#"
            [base]
            id = "acme"
            name = "Acme"
            domain = "acme.example"

            [unknown_section]
            field = "value"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_ok() {
        let config = minimal();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_id() {
        let mut config = minimal();
        config.base.id = String::new();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("[base.id]"));
    }

    #[test]
    fn test_validate_rejects_non_kebab_id() {
        let mut config = minimal();
        config.base.id = "Acme Berlin".into();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("kebab-case"));
    }

    #[test]
    fn test_validate_rejects_domain_with_scheme() {
        let mut config = minimal();
        config.base.domain = "https://acme.example".into();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("bare hostname"));
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let mut config = minimal();
        config.contact.email = "not-an-email".into();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("[contact.email]"));
    }

    #[test]
    fn test_validate_rejects_blank_nav_entry() {
        let mut config = minimal();
        config.navigation.push(NavLink {
            label: "Home".into(),
            href: String::new(),
        });
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("navigation"));
    }

    #[test]
    fn test_full_config_all_sections() {
        let config = r##"
            [base]
            id = "acme-plumbing-berlin"
            name = "Acme Plumbing"
            domain = "acme-plumbing.example"
            description = "Fast and reliable plumbing services"
            language = "de-DE"

            [contact]
            phone = "+49 30 4050607"
            email = "info@acme-plumbing.example"
            opening_hours = "Mo-Fr 8:00-18:00"

            [contact.address]
            street = "Hauptstraße 12"
            zip = "10115"
            city = "Berlin"

            [social]
            facebook = "https://facebook.com/acmeplumbing"

            [branding.colors]
            primary = "#0f62fe"
            accent = "#ff832b"

            [branding.fonts]
            heading = "Archivo"
            body = "Inter"

            [[navigation]]
            label = "Home"
            href = "/"

            [[navigation]]
            label = "Contact"
            href = "/contact"

            [legal]
            company_name = "Acme Plumbing GmbH"
            vat_id = "DE123456789"

            [extra]
            analytics_id = "UA-12345"
        "##;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.id, "acme-plumbing-berlin");
        assert_eq!(config.contact.address.zip, "10115");
        assert_eq!(
            config.social.facebook.as_deref(),
            Some("https://facebook.com/acmeplumbing")
        );
        assert_eq!(config.navigation.len(), 2);
        assert_eq!(config.legal.vat_id, "DE123456789");
        assert!(config.extra.contains_key("analytics_id"));
        assert!(config.validate().is_ok());
    }
}
