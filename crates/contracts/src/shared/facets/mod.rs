//! Faceted filtering of listings and providers.
//!
//! Leaves first: `canonical` normalizes raw backend shapes, `extractor`
//! derives the selectable options, `predicate` narrows a collection and
//! `state` holds the selections (and the optional location search) that
//! drive both.

pub mod canonical;
pub mod entity;
pub mod extractor;
pub mod facet;
pub mod predicate;
pub mod profile;
pub mod query;
pub mod state;

pub use canonical::{CanonicalLocation, CanonicalSport};
pub use entity::Facetable;
pub use extractor::{compute_facets, facet_options, FacetOption, FacetOptions};
pub use facet::{Facet, FacetSelection, FacetValue, ALL};
pub use predicate::{
    dedup_by_id, entity_matches, filter_entities, matches_location_text, matches_sport_slug,
    restrict_to_sports,
};
pub use profile::{load_profiles, FacetProfile, FacetProfileError, FacetProfiles, Page};
pub use state::{FacetedList, FilterState};
