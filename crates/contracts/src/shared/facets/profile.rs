use crate::shared::facets::facet::Facet;
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Pages that host a faceted listing grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    SportLanding,
    SchoolProfile,
    InstructorProfile,
    Explore,
}

impl Page {
    pub fn code(&self) -> &'static str {
        match self {
            Page::SportLanding => "sport_landing",
            Page::SchoolProfile => "school_profile",
            Page::InstructorProfile => "instructor_profile",
            Page::Explore => "explore",
        }
    }
}

/// Facets a page offers, kept in priority order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetProfile {
    facets: Vec<Facet>,
    city_select_threshold: Option<usize>,
    location_search: bool,
}

impl FacetProfile {
    pub fn new(facets: impl IntoIterator<Item = Facet>) -> Self {
        let mut facets: Vec<Facet> = facets.into_iter().collect();
        facets.sort();
        facets.dedup();
        Self {
            facets,
            city_select_threshold: None,
            location_search: false,
        }
    }

    /// Every facet enabled
    pub fn all() -> Self {
        Self::new(Facet::all())
    }

    pub fn with_city_select_threshold(mut self, limit: usize) -> Self {
        self.city_select_threshold = Some(limit);
        self
    }

    /// Also offer the free-text city/country search
    pub fn with_location_search(mut self) -> Self {
        self.location_search = true;
        self
    }

    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    pub fn enables(&self, facet: Facet) -> bool {
        self.facets.contains(&facet)
    }

    pub fn city_select_threshold(&self) -> Option<usize> {
        self.city_select_threshold
    }

    pub fn location_search(&self) -> bool {
        self.location_search
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FacetProfileError {
    #[error("page '{page}': unknown facet '{name}'")]
    UnknownFacet { page: String, name: String },
    #[error("page '{0}' enables no facets")]
    Empty(String),
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    pages: BTreeMap<String, RawPage>,
}

#[derive(Debug, Deserialize)]
struct RawPage {
    facets: Vec<String>,
    #[serde(default)]
    city_select_threshold: Option<usize>,
    #[serde(default)]
    location_search: bool,
}

/// Default page configuration embedded in the binary
pub const DEFAULT_PROFILES: &str = r#"
[pages.sport_landing]
facets = ["country", "city"]
city_select_threshold = 20

[pages.school_profile]
facets = ["sport", "type", "difficulty"]

[pages.instructor_profile]
facets = ["sport", "type"]

[pages.explore]
facets = ["sport", "type"]
location_search = true
"#;

/// Facet profiles of all pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetProfiles {
    pages: BTreeMap<String, FacetProfile>,
}

impl FacetProfiles {
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let config: RawConfig = toml::from_str(raw)?;
        let mut pages = BTreeMap::new();
        for (page, raw_page) in config.pages {
            if raw_page.facets.is_empty() {
                return Err(FacetProfileError::Empty(page).into());
            }
            let mut facets = Vec::with_capacity(raw_page.facets.len());
            for name in &raw_page.facets {
                let facet = Facet::from_code(name.trim()).ok_or_else(|| {
                    FacetProfileError::UnknownFacet {
                        page: page.clone(),
                        name: name.clone(),
                    }
                })?;
                facets.push(facet);
            }
            let mut profile = FacetProfile::new(facets);
            profile.city_select_threshold = raw_page.city_select_threshold;
            profile.location_search = raw_page.location_search;
            pages.insert(page, profile);
        }
        Ok(Self { pages })
    }

    /// Profile of a page; a page missing from the configuration gets every facet
    pub fn for_page(&self, page: Page) -> FacetProfile {
        match self.pages.get(page.code()) {
            Some(profile) => profile.clone(),
            None => {
                log::warn!("no facet profile for page '{}', enabling all facets", page.code());
                FacetProfile::all()
            }
        }
    }
}

/// Load page profiles.
///
/// An override (e.g. served next to the app) wins when it parses; otherwise
/// the embedded default is used.
pub fn load_profiles(override_toml: Option<&str>) -> anyhow::Result<FacetProfiles> {
    if let Some(raw) = override_toml {
        match FacetProfiles::parse(raw) {
            Ok(profiles) => {
                log::info!("Using facet profiles override");
                return Ok(profiles);
            }
            Err(e) => log::warn!("Facet profiles override rejected: {}", e),
        }
    }

    log::info!("Using default embedded facet profiles");
    FacetProfiles::parse(DEFAULT_PROFILES)
}
