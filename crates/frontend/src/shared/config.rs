use contracts::shared::facets::{load_profiles, FacetProfile, FacetProfiles, Page};
use leptos::prelude::*;

/// localStorage key holding an optional TOML override of the page facet profiles
const PROFILES_STORAGE_KEY: &str = "ttw_facet_profiles_v1";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn load_override() -> Option<String> {
    storage()?.get_item(PROFILES_STORAGE_KEY).ok().flatten()
}

/// App-wide configuration, provided through context by `App`
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub profiles: FacetProfiles,
}

impl AppConfig {
    pub fn load() -> Option<Self> {
        let override_toml = load_override();
        match load_profiles(override_toml.as_deref()) {
            Ok(profiles) => Some(Self { profiles }),
            Err(e) => {
                log::error!("Failed to load facet profiles: {}", e);
                None
            }
        }
    }
}

/// Facet profile of a page; every facet when no configuration is available
pub fn page_profile(page: Page) -> FacetProfile {
    match use_context::<AppConfig>() {
        Some(config) => config.profiles.for_page(page),
        None => FacetProfile::all(),
    }
}
