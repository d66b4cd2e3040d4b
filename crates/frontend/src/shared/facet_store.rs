use contracts::shared::facets::{
    Facet, FacetOptions, FacetProfile, FacetedList, Facetable, FilterState,
};
use leptos::prelude::*;

/// Reactive handle over a page's `FacetedList`.
///
/// Created by the page component and owned by it; reads are tracked, so
/// views built from `filtered()` / `options()` re-render on every selection.
pub struct FacetStore<T: Send + Sync + 'static> {
    inner: RwSignal<FacetedList<T>>,
}

impl<T: Send + Sync + 'static> Clone for FacetStore<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for FacetStore<T> {}

impl<T> FacetStore<T>
where
    T: Facetable + Clone + Send + Sync + 'static,
{
    pub fn new(profile: FacetProfile) -> Self {
        Self {
            inner: RwSignal::new(FacetedList::new(Vec::new(), profile)),
        }
    }

    pub fn state(&self) -> FilterState {
        self.inner.with(|list| list.state().clone())
    }

    pub fn selection(&self, facet: Facet) -> String {
        self.inner
            .with(|list| list.state().get(facet).as_control_value().to_string())
    }

    /// Current location search text, empty when none
    pub fn location(&self) -> String {
        self.inner
            .with(|list| list.state().location().unwrap_or_default().to_string())
    }

    pub fn profile(&self) -> FacetProfile {
        self.inner.with_untracked(|list| list.profile().clone())
    }

    pub fn set_facet(&self, facet: Facet, raw: &str) {
        self.inner.update(|list| list.set_facet(facet, raw));
    }

    pub fn set_location(&self, raw: &str) {
        self.inner.update(|list| list.set_location(raw));
    }

    pub fn clear(&self) {
        self.inner.update(|list| list.clear());
    }

    /// Load a fetch result; selections it no longer supports are dropped
    pub fn replace_entities(&self, entities: Vec<T>) {
        self.inner.update(|list| list.replace_entities(entities));
    }

    /// Load a fetch result together with selections from outside (the URL),
    /// keeping those the data supports
    pub fn load_with_state(&self, entities: Vec<T>, state: FilterState) {
        self.inner.update(|list| {
            let profile = list.profile().clone();
            *list = FacetedList::with_state(entities, profile, state);
        });
    }

    pub fn filtered(&self) -> Vec<T> {
        self.inner
            .with(|list| list.filtered().into_iter().cloned().collect())
    }

    pub fn total(&self) -> usize {
        self.inner.with(|list| list.entities().len())
    }

    pub fn options(&self) -> FacetOptions {
        self.inner.with(|list| list.options())
    }

    pub fn active_count(&self) -> usize {
        self.inner.with(|list| list.active_count())
    }

    pub fn city_select_enabled(&self) -> bool {
        self.inner.with(|list| list.city_select_enabled())
    }
}
