use crate::domain::a001_listing::api::fetch_listings;
use crate::domain::a001_listing::ui::card::ListingCard;
use crate::domain::a002_provider::api::fetch_provider_directory;
use crate::domain::a002_provider::ui::card::ProviderCard;
use crate::shared::components::FacetFilterBar;
use crate::shared::config::page_profile;
use crate::shared::facet_store::FacetStore;
use crate::shared::url_state::{state_from_url, sync_state_to_url};
use contracts::domain::a001_listing::{Listing, ListingCriteria};
use contracts::domain::a002_provider::{Provider, ProviderDirectory};
use contracts::shared::facets::{dedup_by_id, filter_entities, matches_sport_slug, Page};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProviderTab {
    Schools,
    Instructors,
}

/// Listings for one sport plus the schools and instructors teaching it,
/// narrowed together by country and city
#[component]
pub fn SportLanding() -> impl IntoView {
    let params = use_params_map();
    let sport_slug = move || params.read().get("sport_slug").unwrap_or_default();
    let current_slug = move || params.read_untracked().get("sport_slug").unwrap_or_default();

    let store: FacetStore<Listing> = FacetStore::new(page_profile(Page::SportLanding));
    let directory = RwSignal::new(ProviderDirectory::default());
    let (is_loading, set_is_loading) = signal(true);
    let provider_tab = RwSignal::new(ProviderTab::Schools);

    Effect::new(move |_| {
        let slug = sport_slug();
        if slug.is_empty() {
            return;
        }
        // selections carried by the link that opened this sport
        let initial_state = state_from_url();
        set_is_loading.set(true);
        spawn_local(async move {
            let listings = match fetch_listings(&ListingCriteria::for_sport(slug.clone())).await {
                Ok(listings) => listings,
                Err(e) => {
                    log::error!("Failed to load listings for '{}': {}", slug, e);
                    Vec::new()
                }
            };
            // the backend filter is coarse: keep exact sport matches only
            let listings: Vec<Listing> = listings
                .into_iter()
                .filter(|l| matches_sport_slug(l, &slug))
                .collect();
            let listings = dedup_by_id(listings);
            let providers = fetch_provider_directory().await;

            // a newer sport was opened while this one loaded
            if current_slug() != slug {
                log::debug!("dropping stale results for sport '{}'", slug);
                return;
            }
            log::debug!("sport '{}': {} listings", slug, listings.len());
            store.load_with_state(listings, initial_state);
            directory.set(providers.for_sport(&slug));
            set_is_loading.set(false);
        });
    });

    // created after the loader so its first URL read sees the incoming query
    sync_state_to_url(store);

    // Providers follow the same location selections as the listings
    let filtered_providers = move |tab: ProviderTab| -> Vec<Provider> {
        let state = store.state();
        directory.with(|dir| {
            let list = match tab {
                ProviderTab::Schools => &dir.schools,
                ProviderTab::Instructors => &dir.freelancers,
            };
            filter_entities(list, &state).into_iter().cloned().collect()
        })
    };

    let tab_button = move |tab: ProviderTab, title: &'static str| {
        view! {
            <button
                class=move || if provider_tab.get() == tab { "tab tab--active" } else { "tab" }
                on:click=move |_| provider_tab.set(tab)
            >
                {move || format!("{} ({})", title, filtered_providers(tab).len())}
            </button>
        }
    };

    view! {
        <div class="sport-landing">
            <h1 class="sport-landing__title">{move || sport_slug().to_uppercase()}</h1>
            <FacetFilterBar store=store results_label="experiences" />

            <Show
                when=move || !is_loading.get()
                fallback=|| view! { <div class="loading">"Loading sport data..."</div> }
            >
                <section class="sport-landing__listings">
                    <Show
                        when=move || !store.filtered().is_empty()
                        fallback=move || view! {
                            <div class="empty-state">
                                <p>"No experiences match these filters."</p>
                                <button on:click=move |_| store.clear()>"View all"</button>
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
                </section>

                <section class="sport-landing__providers">
                    <div class="tabs">
                        {tab_button(ProviderTab::Schools, "Schools")}
                        {tab_button(ProviderTab::Instructors, "Instructors")}
                    </div>
                    <div class="grid">
                        <For
                            each=move || filtered_providers(provider_tab.get())
                            key=|p| p.id.clone()
                            children=|provider| view! { <ProviderCard provider=provider /> }
                        />
                    </div>
                </section>
            </Show>
        </div>
    }
}
