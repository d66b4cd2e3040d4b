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
use contracts::shared::facets::{dedup_by_id, filter_entities, Facet, Page};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn schools_of(dir: &ProviderDirectory) -> &[Provider] {
    &dir.schools
}

fn freelancers_of(dir: &ProviderDirectory) -> &[Provider] {
    &dir.freelancers
}

/// Every listing, narrowed by sport, type and a free-text city/country
/// search, with the schools and instructors that match the same search.
///
/// `?city=` and `?country=` links land in the search box.
#[component]
pub fn Explore() -> impl IntoView {
    let store: FacetStore<Listing> = FacetStore::new(page_profile(Page::Explore));
    let directory = RwSignal::new(ProviderDirectory::default());
    let (is_loading, set_is_loading) = signal(true);

    let initial_state = state_from_url().fold_place_into_location();
    sync_state_to_url(store);

    spawn_local(async move {
        let listings = match fetch_listings(&ListingCriteria::default()).await {
            Ok(listings) => listings,
            Err(e) => {
                log::error!("Failed to load listings: {}", e);
                Vec::new()
            }
        };
        let listings = dedup_by_id(listings);
        log::debug!("explore: {} listings", listings.len());
        store.load_with_state(listings, initial_state);

        directory.set(fetch_provider_directory().await);
        set_is_loading.set(false);
    });

    // Providers carry a provider kind, not a listing type: only sport and
    // location apply to them
    let provider_matches = move |pick: fn(&ProviderDirectory) -> &[Provider]| -> Vec<Provider> {
        let mut state = store.state();
        state.reset(Facet::Type);
        directory.with(|dir| {
            filter_entities(pick(dir), &state)
                .into_iter()
                .cloned()
                .collect()
        })
    };
    let schools = move || provider_matches(schools_of);
    let freelancers = move || provider_matches(freelancers_of);

    view! {
        <div class="explore">
            <h1 class="explore__title">"Explore"</h1>
            <FacetFilterBar store=store results_label="experiences" />

            <Show
                when=move || !is_loading.get()
                fallback=|| view! { <div class="loading">"Loading..."</div> }
            >
                <section class="explore__listings">
                    <Show
                        when=move || !store.filtered().is_empty()
                        fallback=move || view! {
                            <div class="empty-state">
                                <p>"No experiences match these filters."</p>
                                <button on:click=move |_| store.clear()>"Reset filters"</button>
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

                <section class="explore__providers">
                    <h2>{move || format!("Schools ({})", schools().len())}</h2>
                    <div class="grid">
                        <For
                            each=schools
                            key=|p| p.id.clone()
                            children=|provider| view! { <ProviderCard provider=provider /> }
                        />
                    </div>
                    <h2>{move || format!("Instructors ({})", freelancers().len())}</h2>
                    <div class="grid">
                        <For
                            each=freelancers
                            key=|p| p.id.clone()
                            children=|provider| view! { <ProviderCard provider=provider /> }
                        />
                    </div>
                </section>
            </Show>
        </div>
    }
}
