use crate::shared::facet_store::FacetStore;
use contracts::shared::facets::{Facetable, FilterState};
use leptos::prelude::*;
use web_sys::window;

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Filter selections carried by the current URL (`?sport=..&city=..`)
pub fn state_from_url() -> FilterState {
    FilterState::from_query(&current_search())
}

/// Keep the URL query in step with the store's selections
pub fn sync_state_to_url<T>(store: FacetStore<T>)
where
    T: Facetable + Clone + Send + Sync + 'static,
{
    Effect::new(move |_| {
        let query = store.state().to_query();
        let new_url = if query.is_empty() {
            window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_default()
        } else {
            format!("?{}", query)
        };

        // Only update URL if it actually changed
        let unchanged = if query.is_empty() {
            current_search().is_empty()
        } else {
            current_search() == new_url
        };
        if unchanged {
            return;
        }

        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        }
    });
}
