use crate::shared::facets::canonical::fold_sport;
use crate::shared::facets::entity::Facetable;
use crate::shared::facets::facet::Facet;
use crate::shared::facets::state::FilterState;
use std::collections::HashMap;

/// True when the entity passes every active selection (logical AND).
///
/// Selections are checked in priority order and evaluation stops at the
/// first mismatch.
pub fn entity_matches<T: Facetable>(entity: &T, state: &FilterState) -> bool {
    matches_location_filter(entity, state)
        && state
            .active()
            .all(|(facet, selected)| entity.facet_value(facet).matches(selected))
}

/// Same as `entity_matches`, restricted to selections ranked above `facet`.
/// The free-text location search scopes every facet.
pub fn entity_matches_above<T: Facetable>(entity: &T, state: &FilterState, facet: Facet) -> bool {
    matches_location_filter(entity, state)
        && facet.higher().all(|f| match state.get(f).value() {
            Some(selected) => entity.facet_value(f).matches(selected),
            None => true,
        })
}

fn matches_location_filter<T: Facetable>(entity: &T, state: &FilterState) -> bool {
    state
        .location()
        .map_or(true, |needle| matches_location_text(entity, needle))
}

/// Case-insensitive substring search over the entity's city and country.
/// A blank needle matches everything, an entity without a location matches
/// no other needle.
pub fn matches_location_text<T: Facetable>(entity: &T, needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [Facet::City, Facet::Country].into_iter().any(|facet| {
        entity
            .facet_value(facet)
            .values()
            .iter()
            .any(|v| v.to_lowercase().contains(&needle))
    })
}

/// Entities passing the state, in their original order. The input is untouched.
pub fn filter_entities<'a, T: Facetable>(entities: &'a [T], state: &FilterState) -> Vec<&'a T> {
    entities
        .iter()
        .filter(|entity| entity_matches(*entity, state))
        .collect()
}

/// Strict sport check used by the sport landing page: the slug matches the
/// entity's sport slug or its display name, case-insensitively.
pub fn matches_sport_slug<T: Facetable>(entity: &T, slug: &str) -> bool {
    let Some(wanted) = fold_sport(slug) else {
        return false;
    };
    entity.sport_aliases().iter().any(|alias| *alias == wanted)
}

/// Keep entities whose sport is one of `sports` (slugs or names), for pages
/// scoped to what a provider teaches. An empty list keeps nothing.
pub fn restrict_to_sports<T: Facetable>(entities: Vec<T>, sports: &[String]) -> Vec<T> {
    entities
        .into_iter()
        .filter(|entity| sports.iter().any(|sport| matches_sport_slug(entity, sport)))
        .collect()
}

/// One entity per id. A later duplicate replaces the earlier record but
/// keeps its position, so order follows first appearance.
pub fn dedup_by_id<T: Facetable>(entities: Vec<T>) -> Vec<T> {
    let mut position: HashMap<String, usize> = HashMap::new();
    let mut unique: Vec<T> = Vec::with_capacity(entities.len());
    for entity in entities {
        let existing = position.get(entity.entity_id()).copied();
        match existing {
            Some(index) => unique[index] = entity,
            None => {
                position.insert(entity.entity_id().to_string(), unique.len());
                unique.push(entity);
            }
        }
    }
    unique
}
