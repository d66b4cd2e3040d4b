use crate::shared::facets::facet::{Facet, FacetValue};

/// Anything the facet filter can narrow: listings and providers.
///
/// Implementations return canonical values only (see `canonical`), so the
/// filter and the extractor never look at raw backend shapes.
pub trait Facetable {
    /// Stable id, used for de-duplication
    fn entity_id(&self) -> &str;

    /// Canonical value(s) for a facet; `Missing` when the field is absent
    fn facet_value(&self, facet: Facet) -> FacetValue;

    /// Display label for one of this entity's canonical values
    fn facet_label(&self, facet: Facet, value: &str) -> String {
        facet.default_label(value)
    }

    /// Every lower-cased token this entity's sport may be referred to by
    /// (slugs and display names)
    fn sport_aliases(&self) -> Vec<String> {
        self.facet_value(Facet::Sport).values().to_vec()
    }
}

impl<T: Facetable + ?Sized> Facetable for &T {
    fn entity_id(&self) -> &str {
        (**self).entity_id()
    }

    fn facet_value(&self, facet: Facet) -> FacetValue {
        (**self).facet_value(facet)
    }

    fn facet_label(&self, facet: Facet, value: &str) -> String {
        (**self).facet_label(facet, value)
    }

    fn sport_aliases(&self) -> Vec<String> {
        (**self).sport_aliases()
    }
}
