use crate::domain::a001_listing::ui::explore::Explore;
use crate::domain::a001_listing::ui::provider_listings::{ListingOwner, ProviderListings};
use crate::domain::a001_listing::ui::sport_landing::SportLanding;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! { <div class="empty-state">"Page not found"</div> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/explore") view=Explore />
                    <Route path=path!("/sports/:sport_slug") view=SportLanding />
                    <Route
                        path=path!("/schools/:id")
                        view=|| view! { <ProviderListings owner=ListingOwner::School /> }
                    />
                    <Route
                        path=path!("/instructors/:id")
                        view=|| view! { <ProviderListings owner=ListingOwner::Instructor /> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
