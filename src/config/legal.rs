//! `[legal]` section configuration.
//!
//! Imprint data required on German marketing sites.

use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[legal]` section in site.toml.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct LegalConfig {
    /// Registered company name for the imprint. Falls back to the
    /// site display name when empty.
    #[serde(default)]
    pub company_name: String,

    /// VAT identification number.
    #[serde(default)]
    pub vat_id: String,
}
