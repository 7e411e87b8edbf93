//! Instance-scoped variable definitions.
//!
//! Everything here derives from [`InstanceInput`] plus the curated records
//! in [`crate::instances`]. The `programmaticInstance` prefix matters: the
//! resolver blanks unresolved tokens under that prefix instead of leaving
//! them verbatim, so optional per-city values degrade to empty copy on
//! pages that have no instance.

use super::{InstanceVariable, nonempty};
use crate::instances;
use serde_json::json;
use std::sync::LazyLock;

/// All instance-scoped variables, in catalog order.
pub fn instance_variables() -> &'static [InstanceVariable] {
    &INSTANCE_VARIABLES
}

static INSTANCE_VARIABLES: LazyLock<Vec<InstanceVariable>> = LazyLock::new(|| {
    vec![
        InstanceVariable {
            key: "programmaticInstanceName",
            description: "Canonical city name for headlines and copy",
            extract: |i| nonempty(&i.name),
            fallback: None,
        },
        InstanceVariable {
            key: "programmaticInstanceSlug",
            description: "URL-safe slug for routes and element ids",
            extract: |i| nonempty(&i.slug),
            fallback: None,
        },
        InstanceVariable {
            key: "listOfCityDistricts",
            description: "Comma-separated district names for localized copy",
            extract: |i| Some(json!(instances::lookup(&i.name).districts)),
            fallback: None,
        },
        InstanceVariable {
            key: "listOfSurroundingCities",
            description: "Comma-separated nearby towns for localized copy",
            extract: |i| Some(json!(instances::lookup(&i.name).surrounding_cities)),
            fallback: None,
        },
        InstanceVariable {
            key: "programmaticInstanceAddress",
            description: "Local branch address, when the business has one",
            extract: |i| instances::lookup(&i.name).address.map(|a| json!(a)),
            fallback: None,
        },
        InstanceVariable {
            key: "programmaticInstanceMapUrl",
            description: "Map link for the city (curated, or a search URL)",
            extract: |i| {
                let url = match instances::lookup(&i.name).map_url {
                    Some(url) => url.to_owned(),
                    None => format!(
                        "https://www.openstreetmap.org/search?query={}",
                        urlencoding::encode(&i.name)
                    ),
                };
                Some(json!(url))
            },
            fallback: None,
        },
    ]
});
