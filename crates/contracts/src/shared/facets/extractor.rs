use crate::shared::facets::entity::Facetable;
use crate::shared::facets::facet::Facet;
use crate::shared::facets::predicate::entity_matches_above;
use crate::shared::facets::profile::FacetProfile;
use crate::shared::facets::state::FilterState;
use std::collections::{BTreeMap, HashMap, HashSet};

/// One selectable value of a facet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOption {
    /// Canonical value, what a selection stores
    pub value: String,
    pub label: String,
    /// Entities in scope carrying this value
    pub count: usize,
}

/// Selectable options per facet. "ALL" is implied and never listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetOptions {
    by_facet: BTreeMap<Facet, Vec<FacetOption>>,
}

impl FacetOptions {
    pub fn get(&self, facet: Facet) -> &[FacetOption] {
        self.by_facet.get(&facet).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn values(&self, facet: Facet) -> Vec<&str> {
        self.get(facet).iter().map(|o| o.value.as_str()).collect()
    }
}

/// Options of every facet the profile enables.
///
/// A facet's options come only from entities that pass all active
/// selections ranked above it, so no option can lead to an empty result
/// through a higher-priority selection.
pub fn compute_facets<T: Facetable>(
    entities: &[T],
    state: &FilterState,
    profile: &FacetProfile,
) -> FacetOptions {
    let by_facet = profile
        .facets()
        .iter()
        .map(|facet| (*facet, facet_options(entities, state, *facet)))
        .collect();
    FacetOptions { by_facet }
}

/// Options of a single facet, ordered by `Facet::compare_values`
pub fn facet_options<T: Facetable>(
    entities: &[T],
    state: &FilterState,
    facet: Facet,
) -> Vec<FacetOption> {
    let mut collected: HashMap<String, FacetOption> = HashMap::new();

    for entity in entities
        .iter()
        .filter(|entity| entity_matches_above(*entity, state, facet))
    {
        let value = entity.facet_value(facet);
        // an entity counts once per distinct value
        let distinct: HashSet<&String> = value.values().iter().collect();
        for v in distinct {
            collected
                .entry(v.clone())
                .and_modify(|o| o.count += 1)
                .or_insert_with(|| FacetOption {
                    value: v.clone(),
                    label: entity.facet_label(facet, v),
                    count: 1,
                });
        }
    }

    let mut options: Vec<FacetOption> = collected.into_values().collect();
    options.sort_by(|a, b| facet.compare_values(&a.value, &b.value));
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_listing::Listing;
    use crate::domain::a002_provider::Provider;
    use serde_json::json;

    fn listing(value: serde_json::Value) -> Listing {
        serde_json::from_value(value).expect("valid listing json")
    }

    fn paris_madrid() -> Vec<Listing> {
        vec![
            listing(json!({"id": "1", "location": {"country": "FR", "city": "Paris"}})),
            listing(json!({"id": "2", "location": {"country": "ES", "city": "Madrid"}})),
        ]
    }

    #[test]
    fn test_city_options_scoped_by_country() {
        let entities = paris_madrid();
        let profile = FacetProfile::new([Facet::Country, Facet::City]);

        let options = compute_facets(&entities, &FilterState::new(), &profile);
        assert_eq!(options.values(Facet::Country), vec!["ES", "FR"]);
        assert_eq!(options.values(Facet::City), vec!["Madrid", "Paris"]);

        let state = FilterState::new().with(Facet::Country, "FR");
        let options = compute_facets(&entities, &state, &profile);
        assert_eq!(options.values(Facet::City), vec!["Paris"]);
        // the selected facet itself stays unscoped so it can be switched
        assert_eq!(options.values(Facet::Country), vec!["ES", "FR"]);
    }

    #[test]
    fn test_lower_selection_does_not_scope_higher_facet() {
        let entities = paris_madrid();
        let state = FilterState::new().with(Facet::City, "Paris");
        let options = facet_options(&entities, &state, Facet::Country);
        assert_eq!(options.len(), 2);
    }

    #[test]
    fn test_counts_labels_and_ordering() {
        let entities = vec![
            listing(json!({"id": "1", "sport": "surf", "sport_name": "Surfing",
                "universal_level": "EXPERT", "type": "TRIP"})),
            listing(json!({"id": "2", "sport": "surf", "universal_level": "FIRST_TIMER",
                "type": "SESSION"})),
            listing(json!({"id": "3", "sport": "kitesurf", "universal_level": "EXPERT",
                "type": "SESSION"})),
            listing(json!({"id": "4", "sport": null, "universal_level": "LEGENDARY"})),
        ];

        let sports = facet_options(&entities, &FilterState::new(), Facet::Sport);
        assert_eq!(
            sports,
            vec![
                FacetOption {
                    value: "kitesurf".into(),
                    label: "Kitesurf".into(),
                    count: 1
                },
                FacetOption {
                    value: "surf".into(),
                    label: "Surfing".into(),
                    count: 2
                },
            ]
        );

        let levels = facet_options(&entities, &FilterState::new(), Facet::Difficulty);
        let values: Vec<&str> = levels.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["FIRST_TIMER", "EXPERT"]);
        assert_eq!(levels[0].label, "First timer");

        let types = facet_options(&entities, &FilterState::new(), Facet::Type);
        let values: Vec<&str> = types.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["SESSION", "TRIP"]);
    }

    #[test]
    fn test_provider_sports_count_once_each() {
        let providers: Vec<Provider> = vec![
            serde_json::from_value(json!({"id": "s1",
                "sports": ["surf", {"slug": "kitesurf", "name": "Kitesurf"}, "SURF"]}))
            .expect("valid provider json"),
            serde_json::from_value(json!({"id": "s2", "sports": ["kitesurf"]}))
                .expect("valid provider json"),
        ];
        let options = facet_options(&providers, &FilterState::new(), Facet::Sport);
        let pairs: Vec<(&str, usize)> = options
            .iter()
            .map(|o| (o.value.as_str(), o.count))
            .collect();
        assert_eq!(pairs, vec![("kitesurf", 2), ("surf", 1)]);
    }

    #[test]
    fn test_disabled_facets_are_not_computed() {
        let entities = paris_madrid();
        let profile = FacetProfile::new([Facet::Country]);
        let options = compute_facets(&entities, &FilterState::new(), &profile);
        assert!(options.get(Facet::City).is_empty());
        assert_eq!(options.get(Facet::Country).len(), 2);
    }
}
