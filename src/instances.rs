//! Programmatic instance data.
//!
//! Instance pages ("our service in Berlin") are stamped out from one
//! template per city. The copy on those pages needs local color: district
//! names, nearby towns, sometimes a branch address. This module is the
//! curated source for that data, plus a lookup that never fails.
//!
//! # Lookup contract
//!
//! 1. exact match on the instance name;
//! 2. substring match: the first table entry whose name is contained in
//!    the query (so `"plan-Berlin"` resolves to the Berlin record);
//! 3. the generic record otherwise.
//!
//! Substring matching is first-match-wins over table order. The table is
//! curated so that no entry's name is a substring of another entry's name;
//! a test below enforces this.

// ============================================================================
// Instance Records
// ============================================================================

/// Curated data for one programmatic instance (a city).
#[derive(Debug, Clone, Copy)]
pub struct InstanceData {
    /// Canonical instance name as used in page plans.
    pub name: &'static str,

    /// Comma-separated district names for localized copy.
    pub districts: &'static str,

    /// Comma-separated nearby towns for localized copy.
    pub surrounding_cities: &'static str,

    /// Local branch address, if the business has one there.
    pub address: Option<&'static str>,

    /// Curated map link; callers fall back to a search URL when absent.
    pub map_url: Option<&'static str>,
}

/// Copy used when a city has no curated district list.
pub const GENERIC_DISTRICTS: &str = "various districts";

/// Copy used when a city has no curated list of nearby towns.
pub const GENERIC_SURROUNDING: &str = "the surrounding region";

/// Record returned for unknown instances.
static GENERIC: InstanceData = InstanceData {
    name: "",
    districts: GENERIC_DISTRICTS,
    surrounding_cities: GENERIC_SURROUNDING,
    address: None,
    map_url: None,
};

static CITIES: &[InstanceData] = &[
    InstanceData {
        name: "Berlin",
        districts: "Mitte, Charlottenburg, Kreuzberg, Prenzlauer Berg, Neukölln, Spandau",
        surrounding_cities: "Potsdam, Oranienburg, Bernau, Falkensee",
        address: Some("Torstraße 140, 10119 Berlin"),
        map_url: Some("https://www.openstreetmap.org/relation/62422"),
    },
    InstanceData {
        name: "Hamburg",
        districts: "Altona, Eimsbüttel, Winterhude, St. Pauli, Wandsbek, Bergedorf",
        surrounding_cities: "Norderstedt, Pinneberg, Ahrensburg, Buxtehude",
        address: Some("Schulterblatt 58, 20357 Hamburg"),
        map_url: Some("https://www.openstreetmap.org/relation/62782"),
    },
    InstanceData {
        name: "Munich",
        districts: "Schwabing, Sendling, Bogenhausen, Pasing, Giesing",
        surrounding_cities: "Dachau, Freising, Starnberg, Germering",
        address: None,
        map_url: Some("https://www.openstreetmap.org/relation/62428"),
    },
    InstanceData {
        name: "Cologne",
        districts: "Ehrenfeld, Nippes, Deutz, Lindenthal, Porz",
        surrounding_cities: "Leverkusen, Bergisch Gladbach, Hürth, Pulheim",
        address: None,
        map_url: Some("https://www.openstreetmap.org/relation/62578"),
    },
    InstanceData {
        name: "Frankfurt",
        districts: "Sachsenhausen, Bockenheim, Nordend, Bornheim, Höchst",
        surrounding_cities: "Offenbach, Bad Homburg, Eschborn, Hanau",
        address: Some("Kaiserstraße 3, 60311 Frankfurt"),
        map_url: None,
    },
    InstanceData {
        name: "Stuttgart",
        districts: "Bad Cannstatt, Degerloch, Vaihingen, Feuerbach, Zuffenhausen",
        surrounding_cities: "Esslingen, Ludwigsburg, Böblingen, Fellbach",
        address: None,
        map_url: None,
    },
    InstanceData {
        name: "Dusseldorf",
        districts: "Altstadt, Oberkassel, Bilk, Flingern, Gerresheim",
        surrounding_cities: "Neuss, Ratingen, Hilden, Meerbusch",
        address: None,
        map_url: None,
    },
    InstanceData {
        name: "Leipzig",
        districts: "Plagwitz, Connewitz, Gohlis, Lindenau, Reudnitz",
        surrounding_cities: "Markkleeberg, Taucha, Schkeuditz, Borna",
        address: None,
        map_url: None,
    },
    InstanceData {
        name: "Dortmund",
        districts: "Hörde, Hombruch, Aplerbeck, Mengede",
        surrounding_cities: "Bochum, Witten, Lünen, Castrop-Rauxel",
        address: None,
        map_url: None,
    },
    InstanceData {
        name: "Bremen",
        districts: "Schwachhausen, Findorff, Neustadt, Walle, Vegesack",
        surrounding_cities: "Delmenhorst, Achim, Osterholz-Scharmbeck, Stuhr",
        address: None,
        map_url: None,
    },
];

// ============================================================================
// Lookup
// ============================================================================

/// Resolve an instance name to its data record.
///
/// Never fails: unknown names get the generic record, so templated copy
/// ("serving {{listOfCityDistricts}}") always renders something sensible.
pub fn lookup(name: &str) -> &'static InstanceData {
    if let Some(data) = CITIES.iter().find(|c| c.name == name) {
        return data;
    }
    if let Some(data) = CITIES.iter().find(|c| name.contains(c.name)) {
        return data;
    }
    &GENERIC
}

/// True if the name resolves to a curated record (not the generic one).
pub fn is_known(name: &str) -> bool {
    !lookup(name).name.is_empty()
}

/// Names of all curated instances, in table order.
pub fn known_cities() -> impl Iterator<Item = &'static str> {
    CITIES.iter().map(|c| c.name)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_exact_match() {
        let data = lookup("Berlin");
        assert_eq!(data.name, "Berlin");
        assert!(data.districts.contains("Kreuzberg"));
    }

    #[test]
    fn test_lookup_substring_match() {
        // Page-plan keys embed the city name: "plan-Berlin", "seo-Hamburg"
        assert_eq!(lookup("plan-Berlin").name, "Berlin");
        assert_eq!(lookup("seo-Hamburg-2024").name, "Hamburg");
    }

    #[test]
    fn test_lookup_unknown_falls_back_to_generic() {
        let data = lookup("Nowhereville");
        assert_eq!(data.name, "");
        assert_eq!(data.districts, GENERIC_DISTRICTS);
        assert_eq!(data.surrounding_cities, GENERIC_SURROUNDING);
        assert_eq!(data.address, None);
        assert_eq!(data.map_url, None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        // "berlin" does not contain "Berlin"; curation uses canonical casing
        assert_eq!(lookup("berlin").name, "");
    }

    #[test]
    fn test_generic_copy_reads_as_prose() {
        assert_eq!(GENERIC_DISTRICTS, "various districts");
        assert_eq!(GENERIC_SURROUNDING, "the surrounding region");
    }

    #[test]
    fn test_is_known() {
        assert!(is_known("Berlin"));
        assert!(is_known("plan-Berlin"));
        assert!(!is_known("Nowhereville"));
    }

    #[test]
    fn test_known_cities_order_and_content() {
        let cities: Vec<_> = known_cities().collect();
        assert_eq!(cities.first().copied(), Some("Berlin"));
        assert!(cities.contains(&"Stuttgart"));
        assert_eq!(cities.len(), CITIES.len());
    }

    #[test]
    fn test_no_city_name_is_substring_of_another() {
        // Substring lookup is first-match-wins; this keeps it unambiguous
        for a in CITIES {
            for b in CITIES {
                if a.name != b.name {
                    assert!(
                        !a.name.contains(b.name),
                        "`{}` contains `{}`",
                        a.name,
                        b.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_record_has_copy() {
        for city in CITIES {
            assert!(!city.districts.is_empty(), "{} has no districts", city.name);
            assert!(
                !city.surrounding_cities.is_empty(),
                "{} has no surrounding cities",
                city.name
            );
        }
    }
}
