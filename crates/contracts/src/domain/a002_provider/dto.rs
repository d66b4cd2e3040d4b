use crate::domain::common::lenient;
use crate::enums::ProviderKind;
use crate::shared::facets::canonical::{
    canonical_location, canonical_sport, sport_name_alias, CanonicalLocation, LocationFields,
};
use crate::shared::facets::{Facet, FacetValue, Facetable};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// School or freelance instructor.
///
/// Schools come from `/providers/` (`company_name`), instructors from
/// `/instructors/` (`display_name` or the linked user's name).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Provider {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: String,

    #[serde(rename = "type", default, deserialize_with = "lenient::optional")]
    pub kind: Option<ProviderKind>,

    #[serde(default, deserialize_with = "lenient::optional")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub user: Value,

    /// Slugs, names or `{slug, name}` objects
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub sports: Vec<Value>,

    // Flat location fields: strings or `{name}` objects
    #[serde(default)]
    pub city: Value,
    #[serde(default)]
    pub country: Value,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub city_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub country_name: Option<String>,
    #[serde(default)]
    pub location: Value,

    #[serde(default, deserialize_with = "lenient::optional")]
    pub profile_image: Option<String>,
    #[serde(default, alias = "isVerified", deserialize_with = "lenient::or_default")]
    pub is_verified: bool,
}

impl Provider {
    /// Public name, falling back through every field the two endpoints use
    pub fn title(&self) -> String {
        let user_name = || {
            let part = |key: &str| {
                self.user
                    .get(key)
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .trim()
                    .to_string()
            };
            let full = format!("{} {}", part("first_name"), part("last_name"));
            let full = full.trim().to_string();
            if full.is_empty() {
                let email = part("email");
                (!email.is_empty()).then_some(email)
            } else {
                Some(full)
            }
        };

        [&self.name, &self.company_name, &self.display_name]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
            .map(str::to_string)
            .or_else(user_name)
            .unwrap_or_else(|| match self.kind {
                Some(ProviderKind::Freelancer) => "Instructor".to_string(),
                _ => "Provider".to_string(),
            })
    }

    pub fn canonical_location(&self) -> CanonicalLocation {
        canonical_location(LocationFields {
            city: &self.city,
            country: &self.country,
            city_name: self.city_name.as_deref(),
            country_name: self.country_name.as_deref(),
            location: &self.location,
        })
    }

    pub fn location_label(&self) -> String {
        self.canonical_location().label()
    }

    /// Distinct sport slugs, first-seen order
    pub fn sport_slugs(&self) -> Vec<String> {
        let mut slugs: Vec<String> = Vec::new();
        for slug in self
            .sports
            .iter()
            .filter_map(|raw| canonical_sport(raw, None))
            .map(|s| s.slug)
        {
            if !slugs.contains(&slug) {
                slugs.push(slug);
            }
        }
        slugs
    }
}

impl Facetable for Provider {
    fn entity_id(&self) -> &str {
        &self.id
    }

    fn facet_value(&self, facet: Facet) -> FacetValue {
        match facet {
            Facet::Sport => {
                let slugs = self.sport_slugs();
                if slugs.is_empty() {
                    FacetValue::Missing
                } else {
                    FacetValue::Many(slugs)
                }
            }
            Facet::Type => FacetValue::from_option(self.kind.map(|k| k.code().to_string())),
            Facet::Difficulty => FacetValue::Missing,
            Facet::Country => FacetValue::from_option(self.canonical_location().country),
            Facet::City => FacetValue::from_option(self.canonical_location().city),
        }
    }

    fn facet_label(&self, facet: Facet, value: &str) -> String {
        if facet == Facet::Sport {
            if let Some(sport) = self
                .sports
                .iter()
                .filter_map(|raw| canonical_sport(raw, None))
                .find(|s| s.slug == value)
            {
                return sport.label;
            }
        }
        facet.default_label(value)
    }

    fn sport_aliases(&self) -> Vec<String> {
        let mut aliases = self.sport_slugs();
        for name in self.sports.iter().filter_map(sport_name_alias) {
            if !aliases.contains(&name) {
                aliases.push(name);
            }
        }
        aliases
    }
}

/// Schools and freelance instructors, fetched together
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderDirectory {
    pub schools: Vec<Provider>,
    pub freelancers: Vec<Provider>,
}

impl ProviderDirectory {
    /// Tag each side with its kind; the backend does not send it
    pub fn new(mut schools: Vec<Provider>, mut freelancers: Vec<Provider>) -> Self {
        for school in &mut schools {
            school.kind = Some(ProviderKind::School);
        }
        for freelancer in &mut freelancers {
            freelancer.kind = Some(ProviderKind::Freelancer);
        }
        Self {
            schools,
            freelancers,
        }
    }

    /// Both sides narrowed to providers teaching `slug` (slug or name match)
    pub fn for_sport(&self, slug: &str) -> Self {
        let keep = |list: &[Provider]| -> Vec<Provider> {
            list.iter()
                .filter(|p| crate::shared::facets::matches_sport_slug(*p, slug))
                .cloned()
                .collect()
        };
        Self {
            schools: keep(&self.schools),
            freelancers: keep(&self.freelancers),
        }
    }
}
