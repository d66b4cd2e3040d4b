//! Mirror of a `FilterState` in the URL query string
//! (`?sport=surf&country=Portugal`, `?location=dakh`).

use crate::shared::facets::facet::Facet;
use crate::shared::facets::state::FilterState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
struct FilterQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sport: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    /// Free-text city/country search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<String>,
}

impl FilterState {
    /// Query string without the leading `?`; ALL facets are omitted
    pub fn to_query(&self) -> String {
        let value = |facet: Facet| self.get(facet).value().map(str::to_string);
        let query = FilterQuery {
            sport: value(Facet::Sport),
            kind: value(Facet::Type),
            difficulty: value(Facet::Difficulty),
            country: value(Facet::Country),
            city: value(Facet::City),
            location: self.location().map(str::to_string),
        };
        serde_qs::to_string(&query).unwrap_or_else(|e| {
            log::warn!("failed to encode filter query: {}", e);
            String::new()
        })
    }

    /// Parse a query string (leading `?` optional). Unknown keys are ignored,
    /// a malformed query yields the all-ALL state.
    pub fn from_query(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let query: FilterQuery = match serde_qs::from_str(raw) {
            Ok(q) => q,
            Err(e) => {
                log::warn!("ignoring malformed filter query '{}': {}", raw, e);
                return Self::new();
            }
        };

        let mut state = Self::new();
        for (facet, value) in [
            (Facet::Sport, query.sport),
            (Facet::Type, query.kind),
            (Facet::Difficulty, query.difficulty),
            (Facet::Country, query.country),
            (Facet::City, query.city),
        ] {
            if let Some(value) = value {
                state.set(facet, &value);
            }
        }
        if let Some(location) = query.location {
            state.set_location(&location);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_query_omits_all() {
        let state = FilterState::new()
            .with(Facet::Sport, "Kitesurf")
            .with(Facet::Country, "Morocco");
        assert_eq!(state.to_query(), "sport=kitesurf&country=Morocco");
        assert_eq!(FilterState::new().to_query(), "");
    }

    #[test]
    fn test_from_query() {
        let state = FilterState::from_query("?type=COURSE&city=Dakhla&utm_source=mail&sport=ALL");
        assert_eq!(state.get(Facet::Type).value(), Some("COURSE"));
        assert_eq!(state.get(Facet::City).value(), Some("Dakhla"));
        assert!(state.get(Facet::Sport).is_all());
        assert_eq!(state.active_count(), 2);

        assert!(FilterState::from_query("").is_all());
    }

    #[test]
    fn test_location_search_in_query() {
        let state = FilterState::from_query("?location=dakh");
        assert_eq!(state.location(), Some("dakh"));
        assert_eq!(state.active_count(), 1);

        let state = FilterState::new().with(Facet::Sport, "surf").with_location("dakh");
        assert_eq!(state.to_query(), "sport=surf&location=dakh");

        let state = FilterState::from_query("?city=Dakhla&type=SESSION").fold_place_into_location();
        assert_eq!(state.location(), Some("Dakhla"));
        assert_eq!(state.get(Facet::Type).value(), Some("SESSION"));
        assert!(state.get(Facet::City).is_all());
    }

    #[test]
    fn test_query_preserves_state() {
        let state = FilterState::new()
            .with(Facet::Difficulty, "BEGINNER")
            .with(Facet::City, "Tarifa")
            .with_location("tar");
        assert_eq!(FilterState::from_query(&state.to_query()), state);
    }
}
