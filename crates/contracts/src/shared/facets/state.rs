use crate::shared::facets::entity::Facetable;
use crate::shared::facets::extractor::{compute_facets, facet_options, FacetOptions};
use crate::shared::facets::facet::{Facet, FacetSelection};
use crate::shared::facets::predicate::filter_entities;
use crate::shared::facets::profile::FacetProfile;

/// Selected value per facet plus an optional free-text location search;
/// everything starts at ALL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    sport: FacetSelection,
    kind: FacetSelection,
    difficulty: FacetSelection,
    country: FacetSelection,
    city: FacetSelection,
    location: Option<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, facet: Facet) -> &FacetSelection {
        match facet {
            Facet::Sport => &self.sport,
            Facet::Type => &self.kind,
            Facet::Difficulty => &self.difficulty,
            Facet::Country => &self.country,
            Facet::City => &self.city,
        }
    }

    fn slot_mut(&mut self, facet: Facet) -> &mut FacetSelection {
        match facet {
            Facet::Sport => &mut self.sport,
            Facet::Type => &mut self.kind,
            Facet::Difficulty => &mut self.difficulty,
            Facet::Country => &mut self.country,
            Facet::City => &mut self.city,
        }
    }

    /// Store a raw selection in canonical form (`""`/`"ALL"` clear the facet)
    pub fn set(&mut self, facet: Facet, raw: &str) {
        *self.slot_mut(facet) = facet.canonicalize(raw);
    }

    pub fn with(mut self, facet: Facet, raw: &str) -> Self {
        self.set(facet, raw);
        self
    }

    pub fn reset(&mut self, facet: Facet) {
        *self.slot_mut(facet) = FacetSelection::All;
    }

    /// Free-text location search, trimmed; `None` when blank
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn set_location(&mut self, raw: &str) {
        let trimmed = raw.trim();
        self.location = (!trimmed.is_empty()).then(|| trimmed.to_string());
    }

    pub fn with_location(mut self, raw: &str) -> Self {
        self.set_location(raw);
        self
    }

    /// Turn a city or country selection into the location search, for pages
    /// that accept `?city=` / `?country=` links but only offer a search box.
    /// An explicit search wins; the city is preferred over the country.
    pub fn fold_place_into_location(mut self) -> Self {
        if self.location.is_none() {
            let place = self
                .city
                .value()
                .or_else(|| self.country.value())
                .map(str::to_string);
            self.location = place;
        }
        self.reset(Facet::City);
        self.reset(Facet::Country);
        self
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Concrete selections in priority order
    pub fn active(&self) -> impl Iterator<Item = (Facet, &str)> + '_ {
        Facet::all()
            .into_iter()
            .filter_map(move |facet| self.get(facet).value().map(|v| (facet, v)))
    }

    /// Concrete facet selections plus the location search when set
    pub fn active_count(&self) -> usize {
        self.active().count() + usize::from(self.location.is_some())
    }

    pub fn is_all(&self) -> bool {
        self.active_count() == 0
    }
}

/// Source entities plus the selections narrowing them, for one page view.
///
/// The entity collection is never modified by filtering; `filtered()` and
/// `options()` are recomputed from it on demand.
#[derive(Debug, Clone)]
pub struct FacetedList<T> {
    entities: Vec<T>,
    state: FilterState,
    profile: FacetProfile,
}

impl<T: Facetable> FacetedList<T> {
    pub fn new(entities: Vec<T>, profile: FacetProfile) -> Self {
        Self {
            entities,
            state: FilterState::new(),
            profile,
        }
    }

    /// Start from a pre-filled state (e.g. parsed from the URL). Selections
    /// for disabled facets or values absent from the data are dropped.
    pub fn with_state(entities: Vec<T>, profile: FacetProfile, state: FilterState) -> Self {
        let mut list = Self::new(entities, profile);
        for (facet, value) in state.active() {
            if list.profile.enables(facet) {
                list.state.set(facet, value);
            }
        }
        if list.profile.location_search() {
            list.state.location = state.location;
        }
        list.revalidate(None);
        list
    }

    pub fn entities(&self) -> &[T] {
        &self.entities
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn profile(&self) -> &FacetProfile {
        &self.profile
    }

    /// Replace one facet's selection, then reset any lower-priority selection
    /// that is no longer offered (changing the country drops a city that
    /// does not belong to it).
    pub fn set_facet(&mut self, facet: Facet, raw: &str) {
        if !self.profile.enables(facet) {
            log::warn!("facet '{}' is not enabled on this page, selection ignored", facet.code());
            return;
        }
        self.state.set(facet, raw);
        self.revalidate(Some(facet));
    }

    /// Replace the location search; facet selections it excludes are reset
    pub fn set_location(&mut self, raw: &str) {
        if !self.profile.location_search() {
            log::warn!("location search is not enabled on this page, ignored");
            return;
        }
        self.state.set_location(raw);
        self.revalidate(None);
    }

    pub fn clear(&mut self) {
        self.state.clear();
    }

    /// Swap in a fresh fetch result and drop selections it no longer supports
    pub fn replace_entities(&mut self, entities: Vec<T>) {
        self.entities = entities;
        self.revalidate(None);
    }

    pub fn filtered(&self) -> Vec<&T> {
        filter_entities(&self.entities, &self.state)
    }

    pub fn options(&self) -> FacetOptions {
        compute_facets(&self.entities, &self.state, &self.profile)
    }

    pub fn active_count(&self) -> usize {
        self.state.active_count()
    }

    /// City select stays locked while no country is chosen and the city list
    /// is longer than the page threshold
    pub fn city_select_enabled(&self) -> bool {
        match self.profile.city_select_threshold() {
            Some(limit) if self.state.get(Facet::Country).is_all() => {
                facet_options(&self.entities, &self.state, Facet::City).len() <= limit
            }
            _ => true,
        }
    }

    /// Reset concrete selections below `changed` (all of them when `None`)
    /// that are missing from their recomputed options. Runs top-down: a
    /// reset only widens the scope of the facets after it.
    fn revalidate(&mut self, changed: Option<Facet>) {
        let below = changed.map(|f| f.priority());
        let facets: Vec<Facet> = self
            .profile
            .facets()
            .iter()
            .copied()
            .filter(|f| below.map_or(true, |p| f.priority() > p))
            .collect();

        for facet in facets {
            let Some(selected) = self.state.get(facet).value().map(str::to_string) else {
                continue;
            };
            let still_offered = facet_options(&self.entities, &self.state, facet)
                .iter()
                .any(|o| o.value == selected);
            if !still_offered {
                log::debug!(
                    "resetting {} '{}': not available for the current selection",
                    facet.code(),
                    selected
                );
                self.state.reset(facet);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_listing::Listing;
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

    fn location_page(entities: Vec<Listing>) -> FacetedList<Listing> {
        FacetedList::new(entities, FacetProfile::new([Facet::Country, Facet::City]))
    }

    #[test]
    fn test_country_change_resets_foreign_city() {
        let mut list = location_page(paris_madrid());
        list.set_facet(Facet::City, "Madrid");
        assert_eq!(list.state().get(Facet::City).value(), Some("Madrid"));

        list.set_facet(Facet::Country, "FR");
        assert!(list.state().get(Facet::City).is_all());
        assert_eq!(list.options().values(Facet::City), vec!["Paris"]);
        assert_eq!(list.filtered().len(), 1);
    }

    #[test]
    fn test_country_change_keeps_matching_city() {
        let mut list = location_page(paris_madrid());
        list.set_facet(Facet::City, "Paris");
        list.set_facet(Facet::Country, "FR");
        assert_eq!(list.state().get(Facet::City).value(), Some("Paris"));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut list = location_page(paris_madrid());
        list.set_facet(Facet::Country, "ES");
        list.set_facet(Facet::City, "Madrid");
        assert_eq!(list.active_count(), 2);

        list.clear();
        let once = list.state().clone();
        list.clear();
        assert_eq!(list.state(), &once);
        assert!(once.is_all());
        assert_eq!(list.filtered().len(), 2);
    }

    #[test]
    fn test_disabled_facet_is_ignored() {
        let mut list = location_page(paris_madrid());
        list.set_facet(Facet::Sport, "surf");
        assert!(list.state().is_all());
    }

    #[test]
    fn test_selecting_all_clears_one_facet() {
        let mut list = location_page(paris_madrid());
        list.set_facet(Facet::Country, "FR");
        list.set_facet(Facet::Country, "ALL");
        assert!(list.state().get(Facet::Country).is_all());
        list.set_facet(Facet::Country, "ES");
        list.set_facet(Facet::Country, "");
        assert!(list.state().is_all());
    }

    #[test]
    fn test_cascade_runs_down_the_chain() {
        let entities = vec![
            listing(json!({"id": "1", "sport": "surf",
                "location": {"country": "Portugal", "city": "Ericeira"}})),
            listing(json!({"id": "2", "sport": "kitesurf",
                "location": {"country": "Morocco", "city": "Dakhla"}})),
        ];
        let mut list = FacetedList::new(entities, FacetProfile::all());
        list.set_facet(Facet::Country, "Portugal");
        list.set_facet(Facet::City, "Ericeira");
        list.set_facet(Facet::Sport, "kitesurf");
        assert!(list.state().get(Facet::Country).is_all());
        assert!(list.state().get(Facet::City).is_all());
        assert_eq!(list.filtered().len(), 1);
    }

    #[test]
    fn test_with_state_and_replace_entities_revalidate() {
        let state = FilterState::new()
            .with(Facet::Country, "FR")
            .with(Facet::City, "Madrid")
            .with(Facet::Sport, "surf");
        let list = FacetedList::with_state(
            paris_madrid(),
            FacetProfile::new([Facet::Country, Facet::City]),
            state,
        );
        assert_eq!(list.state().get(Facet::Country).value(), Some("FR"));
        assert!(list.state().get(Facet::City).is_all());
        assert!(list.state().get(Facet::Sport).is_all());

        let mut list = list;
        list.replace_entities(vec![listing(
            json!({"id": "9", "location": {"country": "IT", "city": "Rome"}}),
        )]);
        assert!(list.state().is_all());
    }

    fn explore_page(entities: Vec<Listing>) -> FacetedList<Listing> {
        FacetedList::new(
            entities,
            FacetProfile::new([Facet::Sport, Facet::Type]).with_location_search(),
        )
    }

    fn dakhla_ericeira() -> Vec<Listing> {
        vec![
            listing(json!({"id": "1", "sport": "kitesurf", "type": "SESSION",
                "location": {"country": "Morocco", "city": "Dakhla"}})),
            listing(json!({"id": "2", "sport": "surf", "type": "COURSE",
                "location": {"country": "Portugal", "city": "Ericeira"}})),
        ]
    }

    #[test]
    fn test_location_search_narrows_results_and_options() {
        let mut list = explore_page(dakhla_ericeira());
        list.set_facet(Facet::Sport, "surf");
        assert_eq!(list.filtered().len(), 1);

        list.set_location("dakh");
        assert_eq!(list.state().location(), Some("dakh"));
        assert!(list.state().get(Facet::Sport).is_all());
        assert_eq!(list.options().values(Facet::Sport), vec!["kitesurf"]);
        assert_eq!(list.active_count(), 1);

        list.set_location("  ");
        assert_eq!(list.state().location(), None);
        assert_eq!(list.filtered().len(), 2);

        list.set_location("portugal");
        list.clear();
        assert!(list.state().is_all());
    }

    #[test]
    fn test_location_search_needs_enabled_page() {
        let mut list = location_page(paris_madrid());
        list.set_location("paris");
        assert!(list.state().is_all());

        let list = FacetedList::with_state(
            paris_madrid(),
            FacetProfile::new([Facet::Country, Facet::City]),
            FilterState::new().with_location("paris"),
        );
        assert_eq!(list.state().location(), None);

        let list = explore_page(dakhla_ericeira());
        let list = FacetedList::with_state(
            list.entities().to_vec(),
            list.profile().clone(),
            FilterState::new().with_location("eric").with(Facet::Country, "Portugal"),
        );
        assert_eq!(list.state().location(), Some("eric"));
        assert!(list.state().get(Facet::Country).is_all());
        assert_eq!(list.filtered().len(), 1);
    }

    #[test]
    fn test_fold_place_into_location() {
        let state = FilterState::new().with(Facet::City, "Dakhla").fold_place_into_location();
        assert_eq!(state.location(), Some("Dakhla"));
        assert!(state.get(Facet::City).is_all());

        let state = FilterState::new().with(Facet::Country, "Spain").fold_place_into_location();
        assert_eq!(state.location(), Some("Spain"));

        let state = FilterState::new()
            .with_location("tarifa")
            .with(Facet::City, "Madrid")
            .fold_place_into_location();
        assert_eq!(state.location(), Some("tarifa"));
        assert_eq!(state.active_count(), 1);
    }

    #[test]
    fn test_city_select_lock() {
        let entities: Vec<Listing> = (0..3)
            .map(|i| {
                listing(json!({"id": i.to_string(),
                    "location": {"country": "Spain", "city": format!("City {}", i)}}))
            })
            .collect();
        let profile = FacetProfile::new([Facet::Country, Facet::City]).with_city_select_threshold(2);
        let mut list = FacetedList::new(entities, profile);
        assert!(!list.city_select_enabled());
        list.set_facet(Facet::Country, "Spain");
        assert!(list.city_select_enabled());
    }
}
