use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Facet profiles for every page; pages fall back to all facets without it
    if let Some(config) = AppConfig::load() {
        provide_context(config);
    }

    view! {
        <AppRoutes />
    }
}
