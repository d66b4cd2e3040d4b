use crate::domain::a001_listing::api::fetch_listings;
use crate::domain::a001_listing::ui::card::ListingCard;
use crate::domain::a002_provider::api::fetch_school;
use crate::shared::components::FacetFilterBar;
use crate::shared::config::page_profile;
use crate::shared::facet_store::FacetStore;
use contracts::domain::a001_listing::{Listing, ListingCriteria};
use contracts::shared::facets::{dedup_by_id, restrict_to_sports, Page};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

/// Whose listings a profile page shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingOwner {
    School,
    Instructor,
}

impl ListingOwner {
    fn page(self) -> Page {
        match self {
            ListingOwner::School => Page::SchoolProfile,
            ListingOwner::Instructor => Page::InstructorProfile,
        }
    }

    fn criteria(self, id: String) -> ListingCriteria {
        match self {
            ListingOwner::School => ListingCriteria::for_provider(id),
            ListingOwner::Instructor => ListingCriteria::for_instructor(id),
        }
    }
}

/// Listings of one school or instructor, with the facets that page enables
#[component]
pub fn ProviderListings(owner: ListingOwner) -> impl IntoView {
    let params = use_params_map();
    let owner_id = move || params.read().get("id").unwrap_or_default();
    let owner_id_untracked = move || params.read_untracked().get("id").unwrap_or_default();

    let store: FacetStore<Listing> = FacetStore::new(page_profile(owner.page()));
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let id = owner_id();
        if id.is_empty() {
            return;
        }
        set_is_loading.set(true);
        spawn_local(async move {
            match fetch_listings(&owner.criteria(id.clone())).await {
                Ok(listings) => {
                    let mut listings = dedup_by_id(listings);
                    // a school page only shows the sports the school teaches
                    if owner == ListingOwner::School {
                        match fetch_school(&id).await {
                            Ok(school) => {
                                listings = restrict_to_sports(listings, &school.sport_slugs());
                            }
                            Err(e) => {
                                log::warn!("School '{}' not loaded, sports unrestricted: {}", id, e);
                            }
                        }
                    }
                    if owner_id_untracked() != id {
                        return;
                    }
                    store.replace_entities(listings);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load listings of {:?} '{}': {}", owner, id, e);
                    store.replace_entities(Vec::new());
                    set_error.set(Some(e));
                }
            }
            set_is_loading.set(false);
        });
    });

    view! {
        <div class="provider-listings">
            <FacetFilterBar store=store results_label="listings" />
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            <Show
                when=move || !is_loading.get()
                fallback=|| view! { <div class="loading">"Loading listings..."</div> }
            >
                <Show
                    when=move || !store.filtered().is_empty()
                    fallback=move || view! {
                        <div class="empty-state">
                            <p>
                                {move || if store.total() == 0 {
                                    "No listings yet."
                                } else {
                                    "No listings match these filters."
                                }}
                            </p>
                        </div>
                    }
                >
                    <div class="grid">
                        <For
                            each=move || store.filtered()
                            key=|l| l.id.clone()
                            children=|listing| view! { <ListingCard listing=listing /> }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
