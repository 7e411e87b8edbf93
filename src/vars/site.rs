//! Site-scoped variable definitions.
//!
//! Everything here derives from [`SiteConfig`] alone. Raw config sections
//! (contact, social, colors, fonts, navigation) are additionally exposed
//! verbatim by the context builder; this catalog covers the flat keys and
//! the values that need computation (`siteUrl`, `phoneHref`, ...).

use super::{SiteVariable, nonempty};
use serde_json::{Value, json};
use std::sync::LazyLock;

/// All site-scoped variables, in catalog order.
pub fn site_variables() -> &'static [SiteVariable] {
    &SITE_VARIABLES
}

static SITE_VARIABLES: LazyLock<Vec<SiteVariable>> = LazyLock::new(|| {
    vec![
        SiteVariable {
            key: "siteId",
            description: "Unique deployment identifier",
            extract: |c| nonempty(&c.base.id),
            fallback: None,
        },
        SiteVariable {
            key: "siteName",
            description: "Site display name for headers, titles and copy",
            extract: |c| nonempty(&c.base.name),
            fallback: None,
        },
        SiteVariable {
            key: "siteDomain",
            description: "Bare hostname the site is served from",
            extract: |c| nonempty(&c.base.domain),
            fallback: None,
        },
        SiteVariable {
            key: "siteUrl",
            description: "Canonical absolute URL (https://<domain>)",
            extract: |c| (!c.base.domain.is_empty()).then(|| Value::String(c.site_url())),
            fallback: None,
        },
        SiteVariable {
            key: "siteDescription",
            description: "Meta description for SEO tags",
            extract: |c| nonempty(&c.base.description),
            fallback: Some(json!("")),
        },
        SiteVariable {
            key: "phoneNumber",
            description: "Display phone number, formatted for humans",
            extract: |c| nonempty(&c.contact.phone),
            fallback: None,
        },
        SiteVariable {
            key: "phoneHref",
            description: "tel: link derived from the display phone number",
            extract: |c| phone_href(&c.contact.phone),
            fallback: None,
        },
        SiteVariable {
            key: "emailAddress",
            description: "Contact email address",
            extract: |c| nonempty(&c.contact.email),
            fallback: None,
        },
        SiteVariable {
            key: "emailHref",
            description: "mailto: link for the contact email",
            extract: |c| {
                (!c.contact.email.is_empty())
                    .then(|| json!(format!("mailto:{}", c.contact.email)))
            },
            fallback: None,
        },
        SiteVariable {
            key: "openingHours",
            description: "Free-text opening hours line",
            extract: |c| nonempty(&c.contact.opening_hours),
            fallback: Some(json!("Mo-Fr 8:00-18:00")),
        },
        SiteVariable {
            key: "address.street",
            description: "Street and house number",
            extract: |c| nonempty(&c.contact.address.street),
            fallback: None,
        },
        SiteVariable {
            key: "address.zip",
            description: "Postal code",
            extract: |c| nonempty(&c.contact.address.zip),
            fallback: None,
        },
        SiteVariable {
            key: "address.city",
            description: "City of the registered address",
            extract: |c| nonempty(&c.contact.address.city),
            fallback: None,
        },
        SiteVariable {
            key: "address.full",
            description: "Single-line postal address (street, zip city)",
            extract: |c| c.contact.address.single_line().map(Value::String),
            fallback: None,
        },
        SiteVariable {
            key: "companyName",
            description: "Registered company name for imprint and schema.org",
            extract: |c| nonempty(c.company_name()),
            fallback: None,
        },
    ]
});

/// Build a `tel:` href by stripping everything but digits and `+`.
fn phone_href(phone: &str) -> Option<Value> {
    let dialable: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    if dialable.chars().any(|c| c.is_ascii_digit()) {
        Some(json!(format!("tel:{dialable}")))
    } else {
        None
    }
}
