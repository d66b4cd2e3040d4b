use crate::domain::common::lenient;
use crate::enums::{ListingType, SportCategory, UniversalLevel};
use crate::shared::facets::canonical::{
    canonical_location, canonical_sport, fold_sport, sport_name_alias, CanonicalLocation,
    CanonicalSport, LocationFields,
};
use crate::shared::facets::{Facet, FacetValue, Facetable};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Bookable unit: session, course, trip, rental or experience.
///
/// Relations the backend nests inconsistently (`sport`, `city`, `location`)
/// are kept raw and read through the canonical accessors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: String,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub title: String,

    #[serde(rename = "type", default, deserialize_with = "lenient::or_default")]
    pub kind: ListingType,

    // Sport: slug, name or object
    #[serde(default)]
    pub sport: Value,
    #[serde(default, alias = "sportName", deserialize_with = "lenient::optional")]
    pub sport_name: Option<String>,
    #[serde(default, alias = "category", deserialize_with = "lenient::optional")]
    pub sport_category: Option<SportCategory>,

    #[serde(default, alias = "universalLevel", deserialize_with = "lenient::optional")]
    pub universal_level: Option<UniversalLevel>,

    // Location: relation, legacy flat fields, or mapped/free-text location
    #[serde(default)]
    pub city: Value,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub city_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub country_name: Option<String>,
    #[serde(default)]
    pub location: Value,

    #[serde(default, deserialize_with = "lenient::number")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub currency: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub rating: f64,
    #[serde(default, alias = "reviewCount", deserialize_with = "lenient::or_default")]
    pub review_count: u32,

    #[serde(default)]
    pub provider: Value,
    #[serde(default, alias = "isVerified", deserialize_with = "lenient::or_default")]
    pub is_verified: bool,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub status: Option<String>,
}

impl Listing {
    pub fn canonical_location(&self) -> CanonicalLocation {
        canonical_location(LocationFields {
            city: &self.city,
            country: &Value::Null,
            city_name: self.city_name.as_deref(),
            country_name: self.country_name.as_deref(),
            location: &self.location,
        })
    }

    /// "City, Country" for cards; "Unknown" when nothing resolves
    pub fn location_label(&self) -> String {
        self.canonical_location().label()
    }

    pub fn canonical_sport(&self) -> Option<CanonicalSport> {
        canonical_sport(&self.sport, self.sport_name.as_deref())
    }

    pub fn sport_label(&self) -> String {
        self.canonical_sport()
            .map(|s| s.label)
            .unwrap_or_default()
    }

    /// Sport label with its discipline group when known, e.g. "Kitesurf · Water"
    pub fn sport_caption(&self) -> String {
        let sport = self.sport_label();
        match (self.sport_category, sport.is_empty()) {
            (Some(category), false) => format!("{} · {}", sport, category.display_name()),
            (Some(category), true) => category.display_name().to_string(),
            (None, _) => sport,
        }
    }

    pub fn provider_id(&self) -> Option<String> {
        match &self.provider {
            Value::Object(map) => match map.get("id") {
                Some(Value::String(s)) => Some(s.clone()),
                Some(Value::Number(n)) => Some(n.to_string()),
                _ => None,
            },
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn provider_name(&self) -> String {
        self.provider
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("Provider")
            .to_string()
    }
}

impl Facetable for Listing {
    fn entity_id(&self) -> &str {
        &self.id
    }

    fn facet_value(&self, facet: Facet) -> FacetValue {
        match facet {
            Facet::Sport => FacetValue::from_option(self.canonical_sport().map(|s| s.slug)),
            Facet::Type => match self.kind {
                ListingType::Unknown => FacetValue::Missing,
                kind => FacetValue::One(kind.code().to_string()),
            },
            Facet::Difficulty => match self.universal_level {
                None | Some(UniversalLevel::Unknown) => FacetValue::Missing,
                Some(level) => FacetValue::One(level.code().to_string()),
            },
            Facet::Country => FacetValue::from_option(self.canonical_location().country),
            Facet::City => FacetValue::from_option(self.canonical_location().city),
        }
    }

    fn facet_label(&self, facet: Facet, value: &str) -> String {
        match (facet, self.canonical_sport()) {
            (Facet::Sport, Some(sport)) if sport.slug == value => sport.label,
            _ => facet.default_label(value),
        }
    }

    fn sport_aliases(&self) -> Vec<String> {
        let mut aliases: Vec<String> = self.canonical_sport().map(|s| s.slug).into_iter().collect();
        let names = [
            self.sport_name.as_deref().and_then(fold_sport),
            sport_name_alias(&self.sport),
        ];
        for name in names.into_iter().flatten() {
            if !aliases.contains(&name) {
                aliases.push(name);
            }
        }
        aliases
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_backend_shape() {
        let listing: Listing = serde_json::from_value(json!({
            "id": 17,
            "title": "Kite week",
            "type": "COURSE",
            "sport": "kitesurf",
            "sport_name": "Kitesurf",
            "sport_category": "WATER",
            "universal_level": "INTERMEDIATE",
            "city": {"name": "Dakhla", "country": {"name": "Morocco"}},
            "price": "450.00",
            "rating": 4.5,
            "review_count": 12,
            "provider": {"id": 3, "name": "Dakhla Kite School"},
            "is_verified": true
        }))
        .unwrap();

        assert_eq!(listing.id, "17");
        assert_eq!(listing.kind, ListingType::Course);
        assert_eq!(listing.sport_category, Some(SportCategory::Water));
        assert_eq!(listing.sport_caption(), "Kitesurf · Water");
        assert_eq!(listing.price, 450.0);
        assert_eq!(listing.location_label(), "Dakhla, Morocco");
        assert_eq!(listing.provider_id().as_deref(), Some("3"));
        assert_eq!(
            listing.facet_value(Facet::Difficulty),
            FacetValue::One("INTERMEDIATE".into())
        );
        assert_eq!(listing.facet_label(Facet::Sport, "kitesurf"), "Kitesurf");
    }

    #[test]
    fn test_mapped_shape_and_bad_fields() {
        let listing: Listing = serde_json::from_value(json!({
            "id": "a1",
            "type": "ZIPLINE",
            "sport": {"slug": "surf", "name": "Surf"},
            "category": "LAVA",
            "universalLevel": 5,
            "location": {"city": "Ericeira", "country": "Portugal", "lat": 0, "lng": 0},
            "price": null,
            "reviewCount": "many"
        }))
        .unwrap();

        assert_eq!(listing.kind, ListingType::Unknown);
        assert_eq!(listing.sport_category, None);
        assert_eq!(listing.sport_caption(), "Surf");
        assert_eq!(listing.universal_level, None);
        assert_eq!(listing.review_count, 0);
        assert_eq!(listing.facet_value(Facet::Type), FacetValue::Missing);
        assert_eq!(listing.facet_value(Facet::Sport), FacetValue::One("surf".into()));
        assert_eq!(listing.facet_value(Facet::City), FacetValue::One("Ericeira".into()));
    }

    #[test]
    fn test_empty_record_is_unknown() {
        let listing: Listing = serde_json::from_value(json!({})).unwrap();
        assert_eq!(listing.location_label(), "Unknown");
        for facet in Facet::all() {
            assert_eq!(listing.facet_value(facet), FacetValue::Missing);
        }
        assert_eq!(listing.provider_name(), "Provider");
    }
}
