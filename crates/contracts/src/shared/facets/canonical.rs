//! Normalization of the inconsistently shaped relations the backend returns.
//!
//! A city may arrive as a nested relation object, a plain string, a pair of
//! legacy flat fields or a free-text `location`; a sport may be a slug, a
//! display name or an object. Everything downstream works only with the
//! canonical forms produced here. None of these functions fail: malformed
//! input degrades to "absent" and finally to the `"Unknown"` label.

use crate::shared::facets::facet::capitalize;
use serde_json::Value;

/// Placeholder label, also treated as absent when the backend sends it
pub const UNKNOWN: &str = "Unknown";

/// Trimmed text; empty strings and the `"Unknown"` placeholder count as absent
pub fn clean_str(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == UNKNOWN {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Comparable sport token: trimmed and lower-cased
pub fn fold_sport(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Name of a relation that is either a string or an object with `name`
pub fn relation_name(raw: &Value) -> Option<String> {
    match raw {
        Value::String(s) => clean_str(s),
        Value::Object(map) => map.get("name").and_then(Value::as_str).and_then(clean_str),
        _ => None,
    }
}

fn str_field(raw: &Value, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).and_then(clean_str)
}

/// City/country pair resolved from whichever source carried data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalLocation {
    pub city: Option<String>,
    pub country: Option<String>,
    /// Free-text location that could not be split into parts
    raw_label: Option<String>,
}

impl CanonicalLocation {
    pub fn new(city: Option<String>, country: Option<String>) -> Self {
        Self {
            city,
            country,
            raw_label: None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.city.is_none() && self.country.is_none() && self.raw_label.is_none()
    }

    fn has_parts(&self) -> bool {
        self.city.is_some() || self.country.is_some()
    }

    /// Display label: "City, Country", either part alone, the raw text, or "Unknown"
    pub fn label(&self) -> String {
        match (&self.city, &self.country) {
            (Some(city), Some(country)) => format!("{}, {}", city, country),
            (Some(city), None) => city.clone(),
            (None, Some(country)) => country.clone(),
            (None, None) => self
                .raw_label
                .clone()
                .unwrap_or_else(|| UNKNOWN.to_string()),
        }
    }
}

/// Every place an entity may keep its location, newest shape first
#[derive(Debug, Clone, Copy)]
pub struct LocationFields<'a> {
    /// City relation: object `{name, country}` or a plain name
    pub city: &'a Value,
    /// Flat country: string or `{name}`
    pub country: &'a Value,
    pub city_name: Option<&'a str>,
    pub country_name: Option<&'a str>,
    /// `{city, country}` object or free text
    pub location: &'a Value,
}

/// Resolve a location; the first source that yields a city or a country wins.
pub fn canonical_location(fields: LocationFields<'_>) -> CanonicalLocation {
    // 1. relation (plus the flat country that sometimes accompanies it)
    let from_relation = CanonicalLocation::new(
        relation_name(fields.city),
        fields
            .city
            .get("country")
            .and_then(relation_name)
            .or_else(|| relation_name(fields.country)),
    );
    if from_relation.has_parts() {
        return from_relation;
    }

    // 2. legacy flat fields
    let from_legacy = CanonicalLocation::new(
        fields.city_name.and_then(clean_str),
        fields.country_name.and_then(clean_str),
    );
    if from_legacy.has_parts() {
        return from_legacy;
    }

    // 3. location object / free text
    match fields.location {
        Value::Object(_) => CanonicalLocation::new(
            str_field(fields.location, "city"),
            str_field(fields.location, "country"),
        ),
        Value::String(text) => parse_location_text(text),
        _ => CanonicalLocation::default(),
    }
}

/// "Dakhla, Morocco" splits on the last comma; text without a comma is display-only
fn parse_location_text(text: &str) -> CanonicalLocation {
    let Some(text) = clean_str(text) else {
        return CanonicalLocation::default();
    };
    match text.rsplit_once(',') {
        Some((city, country)) => {
            let parsed = CanonicalLocation::new(clean_str(city), clean_str(country));
            if parsed.has_parts() {
                parsed
            } else {
                CanonicalLocation {
                    raw_label: Some(text),
                    ..Default::default()
                }
            }
        }
        None => CanonicalLocation {
            raw_label: Some(text),
            ..Default::default()
        },
    }
}

/// Sport reference reduced to a comparable slug and a display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalSport {
    pub slug: String,
    pub label: String,
}

/// Resolve a sport reference.
///
/// `raw` may be a slug, a name, or an object carrying `slug`, `name` or
/// `title`. `name_hint` is a separately delivered display name (listing
/// `sport_name`); it labels the sport and stands in when `raw` is unusable.
pub fn canonical_sport(raw: &Value, name_hint: Option<&str>) -> Option<CanonicalSport> {
    let hint = name_hint.and_then(clean_str);
    match raw {
        Value::String(s) => {
            let slug = fold_sport(s)?;
            let label = hint.unwrap_or_else(|| capitalize(s.trim()));
            Some(CanonicalSport { slug, label })
        }
        Value::Object(_) => {
            let name = str_field(raw, "name");
            let source = str_field(raw, "slug")
                .or_else(|| name.clone())
                .or_else(|| str_field(raw, "title"))
                .or_else(|| hint.clone())?;
            let slug = fold_sport(&source)?;
            let label = name
                .or(hint)
                .or_else(|| str_field(raw, "title"))
                .unwrap_or_else(|| capitalize(&slug));
            Some(CanonicalSport { slug, label })
        }
        _ => {
            let hint = hint?;
            Some(CanonicalSport {
                slug: fold_sport(&hint)?,
                label: hint,
            })
        }
    }
}

/// Lower-cased display name of a sport reference, if it has one distinct from the slug
pub fn sport_name_alias(raw: &Value) -> Option<String> {
    match raw {
        Value::Object(_) => str_field(raw, "name").and_then(|n| fold_sport(&n)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields<'a>(
        city: &'a Value,
        country: &'a Value,
        city_name: Option<&'a str>,
        country_name: Option<&'a str>,
        location: &'a Value,
    ) -> LocationFields<'a> {
        LocationFields {
            city,
            country,
            city_name,
            country_name,
            location,
        }
    }

    #[test]
    fn test_relation_object_with_nested_country() {
        let city = json!({"name": "Dakhla", "country": {"name": "Morocco"}});
        let loc = canonical_location(fields(&city, &Value::Null, None, None, &Value::Null));
        assert_eq!(loc.city.as_deref(), Some("Dakhla"));
        assert_eq!(loc.country.as_deref(), Some("Morocco"));
        assert_eq!(loc.label(), "Dakhla, Morocco");

        let city = json!({"name": "Tarifa", "country": "Spain"});
        let loc = canonical_location(fields(&city, &Value::Null, None, None, &Value::Null));
        assert_eq!(loc.label(), "Tarifa, Spain");
    }

    #[test]
    fn test_flat_strings_and_legacy_fallback() {
        let city = json!("Ericeira");
        let country = json!({"name": "Portugal"});
        let loc = canonical_location(fields(&city, &country, None, None, &Value::Null));
        assert_eq!(loc.label(), "Ericeira, Portugal");

        let loc = canonical_location(fields(
            &Value::Null,
            &Value::Null,
            Some("Essaouira"),
            Some(" "),
            &Value::Null,
        ));
        assert_eq!(loc.city.as_deref(), Some("Essaouira"));
        assert_eq!(loc.country, None);
    }

    #[test]
    fn test_location_object_and_text() {
        let location = json!({"city": "Unknown", "country": "Morocco"});
        let loc = canonical_location(fields(&Value::Null, &Value::Null, None, None, &location));
        assert_eq!(loc.city, None);
        assert_eq!(loc.label(), "Morocco");

        let location = json!("Sao Miguel, Azores, Portugal");
        let loc = canonical_location(fields(&Value::Null, &Value::Null, None, None, &location));
        assert_eq!(loc.city.as_deref(), Some("Sao Miguel, Azores"));
        assert_eq!(loc.country.as_deref(), Some("Portugal"));

        let location = json!("Somewhere on the coast");
        let loc = canonical_location(fields(&Value::Null, &Value::Null, None, None, &location));
        assert!(!loc.is_unknown());
        assert_eq!(loc.city, None);
        assert_eq!(loc.label(), "Somewhere on the coast");
    }

    #[test]
    fn test_malformed_degrades_to_unknown() {
        let odd = json!([1, 2, 3]);
        let number = json!(42);
        let loc = canonical_location(fields(&odd, &number, None, None, &json!({"city": 7})));
        assert!(loc.is_unknown());
        assert_eq!(loc.label(), "Unknown");
    }

    #[test]
    fn test_sport_shapes() {
        assert_eq!(
            canonical_sport(&json!("Kitesurf"), None),
            Some(CanonicalSport {
                slug: "kitesurf".into(),
                label: "Kitesurf".into()
            })
        );
        assert_eq!(
            canonical_sport(&json!("surf"), Some("Surfing")).map(|s| s.label),
            Some("Surfing".to_string())
        );
        assert_eq!(
            canonical_sport(&json!({"slug": "Wing-Foil", "name": "Wing Foil"}), None),
            Some(CanonicalSport {
                slug: "wing-foil".into(),
                label: "Wing Foil".into()
            })
        );
        assert_eq!(
            canonical_sport(&json!({"title": "Paragliding"}), None).map(|s| s.slug),
            Some("paragliding".to_string())
        );
        assert_eq!(
            canonical_sport(&Value::Null, Some("Snowboard")).map(|s| s.slug),
            Some("snowboard".to_string())
        );
        assert_eq!(canonical_sport(&json!({"id": 3}), None), None);
        assert_eq!(canonical_sport(&json!("   "), None), None);
    }
}
