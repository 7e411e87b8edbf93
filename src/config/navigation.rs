//! `[[navigation]]` entries.

use serde::{Deserialize, Serialize};

/// A single navigation link.
///
/// # Example
/// ```toml
/// [[navigation]]
/// label = "Services"
/// href = "/services"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_navigation_entries_ordered() {
        let config = r#"
            [base]
            id = "acme"
            name = "Acme"
            domain = "acme.example"

            [[navigation]]
            label = "Home"
            href = "/"

            [[navigation]]
            label = "Services"
            href = "/services"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.navigation.len(), 2);
        assert_eq!(config.navigation[0].label, "Home");
        assert_eq!(config.navigation[1].href, "/services");
    }

    #[test]
    fn test_navigation_default_empty() {
        let config = r#"
            [base]
            id = "acme"
            name = "Acme"
            domain = "acme.example"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert!(config.navigation.is_empty());
    }
}
