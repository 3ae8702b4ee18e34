//! Static suburb catalog and guess-name resolution.

use serde::{Deserialize, Serialize};

use crate::normalize::sanitize_name;

/// A suburb the player can guess. Loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suburb {
    /// Stable identifier, also the key for the suburb's outline image.
    pub code: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Trait for resolving a suburb's display name for the active language.
/// Platform-specific localization should provide this; scoring compares
/// guesses against whatever this resolves to.
pub trait DisplayNames {
    fn display_name(&self, language: &str, suburb: &Suburb) -> String;
}

/// Default resolver: the catalog name, regardless of language.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogNames;

impl DisplayNames for CatalogNames {
    fn display_name(&self, _language: &str, suburb: &Suburb) -> String {
        suburb.name.clone()
    }
}

/// Container for the full suburb list plus the subset of codes that have an
/// outline image. Only suburbs with an image are eligible daily targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Catalog {
    pub suburbs: Vec<Suburb>,
    #[serde(default)]
    pub image_codes: Vec<String>,
}

impl Catalog {
    /// Create an empty catalog (useful for tests).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load catalog data from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid catalog data.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The catalog bundled with the crate.
    ///
    /// # Panics
    ///
    /// Panics if the bundled asset is malformed, which is a build defect.
    #[must_use]
    pub fn builtin() -> Self {
        match Self::from_json(include_str!("../assets/suburbs.json")) {
            Ok(catalog) => catalog,
            Err(err) => panic!("bundled suburb catalog is invalid: {err}"),
        }
    }

    /// Suburbs eligible as daily targets, in catalog order. The ordering is
    /// part of the target-selection contract and must stay stable across
    /// restarts.
    pub fn eligible(&self) -> impl Iterator<Item = &Suburb> {
        self.suburbs.iter().filter(|s| {
            self.image_codes
                .iter()
                .any(|code| code.eq_ignore_ascii_case(&s.code))
        })
    }

    /// Number of eligible daily targets.
    #[must_use]
    pub fn eligible_len(&self) -> usize {
        self.eligible().count()
    }

    /// Resolve user input to a catalog suburb by canonical-name equality
    /// against the resolved display names. Returns the first match in
    /// catalog order, or `None`.
    #[must_use]
    pub fn resolve<N: DisplayNames>(
        &self,
        language: &str,
        raw_text: &str,
        names: &N,
    ) -> Option<&Suburb> {
        let wanted = sanitize_name(raw_text);
        self.suburbs
            .iter()
            .find(|s| sanitize_name(&names.display_name(language, s)) == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::from_json(
            r#"{
                "suburbs": [
                    {"code": "melbourne", "name": "Melbourne", "latitude": -37.8136, "longitude": 144.9631},
                    {"code": "stkilda", "name": "St Kilda", "latitude": -37.8676, "longitude": 144.9809},
                    {"code": "fitzroy", "name": "Fitzroy", "latitude": -37.7983, "longitude": 144.9784}
                ],
                "image_codes": ["melbourne", "fitzroy"]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn eligible_filters_by_image_code_in_order() {
        let catalog = sample();
        let codes: Vec<&str> = catalog.eligible().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, ["melbourne", "fitzroy"]);
        assert_eq!(catalog.eligible_len(), 2);
    }

    #[test]
    fn resolve_matches_normalized_names() {
        let catalog = sample();
        let hit = catalog.resolve("en", "  st-kilda ", &CatalogNames);
        assert_eq!(hit.map(|s| s.code.as_str()), Some("stkilda"));
        assert!(catalog.resolve("en", "Geelong", &CatalogNames).is_none());
    }

    #[test]
    fn builtin_catalog_is_well_formed() {
        let catalog = Catalog::builtin();
        assert!(catalog.eligible_len() > 0);
        assert!(catalog.eligible_len() <= catalog.suburbs.len());
        // Every image code refers to a real suburb.
        for code in &catalog.image_codes {
            assert!(
                catalog.suburbs.iter().any(|s| s.code == *code),
                "dangling image code {code}"
            );
        }
    }
}
