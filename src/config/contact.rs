//! `[contact]` section configuration.
//!
//! Phone, email, opening hours and the postal address shown in footers,
//! contact components and structured data.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[contact]` section in site.toml.
///
/// # Example
/// ```toml
/// [contact]
/// phone = "+49 30 4050607"
/// email = "info@acme-plumbing.example"
/// opening_hours = "Mo-Fr 8:00-18:00"
///
/// [contact.address]
/// street = "Hauptstraße 12"
/// zip = "10115"
/// city = "Berlin"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContactConfig {
    /// Display phone number, formatted for humans.
    #[serde(default)]
    pub phone: String,

    /// Contact email address.
    #[serde(default)]
    pub email: String,

    /// Free-text opening hours line.
    #[serde(default)]
    pub opening_hours: String,

    /// Postal address.
    #[serde(default)]
    pub address: AddressConfig,
}

/// `[contact.address]` subsection.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct AddressConfig {
    #[serde(default)]
    pub street: String,

    #[serde(default)]
    pub zip: String,

    #[serde(default)]
    pub city: String,

    #[serde(default = "defaults::contact::address::country")]
    #[educe(Default = defaults::contact::address::country())]
    pub country: String,
}

impl AddressConfig {
    /// Single-line rendering: `street, zip city`.
    ///
    /// Returns `None` unless both street and city are set.
    pub fn single_line(&self) -> Option<String> {
        if self.street.is_empty() || self.city.is_empty() {
            return None;
        }
        if self.zip.is_empty() {
            Some(format!("{}, {}", self.street, self.city))
        } else {
            Some(format!("{}, {} {}", self.street, self.zip, self.city))
        }
    }
}
