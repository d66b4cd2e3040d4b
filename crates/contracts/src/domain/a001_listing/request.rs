use crate::enums::ListingType;
use serde::{Deserialize, Serialize};

/// Coarse server-side listing filter. Finer narrowing (difficulty, city
/// scoped by country, ...) happens client-side in the facet filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingCriteria {
    #[serde(default)]
    pub instructor_id: Option<String>,
    #[serde(default)]
    pub provider_id: Option<String>,
    /// Sport slug
    #[serde(default)]
    pub sport: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    /// `None` means all types
    #[serde(default)]
    pub kind: Option<ListingType>,
    #[serde(default)]
    pub continent: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

impl ListingCriteria {
    pub fn for_sport(slug: impl Into<String>) -> Self {
        Self {
            sport: Some(slug.into()),
            ..Default::default()
        }
    }

    pub fn for_provider(id: impl Into<String>) -> Self {
        Self {
            provider_id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn for_instructor(id: impl Into<String>) -> Self {
        Self {
            instructor_id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Backend query parameters, unencoded, in a stable order. Blank values
    /// are skipped; the city filter uses the backend's case-insensitive lookup.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let kind = self
            .kind
            .filter(|k| *k != ListingType::Unknown)
            .map(|k| k.code().to_string());
        [
            ("instructor", self.instructor_id.clone()),
            ("provider", self.provider_id.clone()),
            ("sport", self.sport.clone()),
            ("country", self.country.clone()),
            ("type", kind),
            ("continent", self.continent.clone()),
            ("city__name__iexact", self.city.clone()),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            let value = value?;
            let value = value.trim();
            (!value.is_empty()).then(|| (key, value.to_string()))
        })
        .collect()
    }
}
