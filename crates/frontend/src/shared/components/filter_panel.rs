use crate::shared::facet_store::FacetStore;
use contracts::shared::facets::{Facet, Facetable, ALL};
use leptos::prelude::*;

/// FacetFilterBar component - one select per facet the page enables (plus a
/// location search box where the page offers one), the active selections as
/// removable tags, and a "clear all" action.
#[component]
pub fn FacetFilterBar<T>(
    /// Page filter store
    store: FacetStore<T>,
    /// Label of the result counter, e.g. "options available"
    #[prop(optional, into)]
    results_label: Option<String>,
) -> impl IntoView
where
    T: Facetable + Clone + Send + Sync + 'static,
{
    let facets = store.profile().facets().to_vec();
    let results_label = results_label.unwrap_or_else(|| "options available".to_string());

    let selects = facets
        .into_iter()
        .map(|facet| view! { <FacetSelect store=store facet=facet /> })
        .collect_view();

    let tags = move || {
        let options = store.options();
        store
            .state()
            .active()
            .map(|(facet, value)| {
                let label = options
                    .get(facet)
                    .iter()
                    .find(|o| o.value == value)
                    .map(|o| o.label.clone())
                    .unwrap_or_else(|| value.to_string());
                view! {
                    <FilterTag
                        label=format!("{}: {}", facet.display_name(), label)
                        on_remove=Callback::new(move |_: ()| store.set_facet(facet, ALL))
                    />
                }
            })
            .collect_view()
    };

    let location_tag = move || {
        store.state().location().map(|text| {
            view! {
                <FilterTag
                    label=format!("Location: {}", text)
                    on_remove=Callback::new(move |_: ()| store.set_location(""))
                />
            }
        })
    };

    let search = store.profile().location_search().then(|| {
        view! {
            <div class="form__group">
                <label class="form__label">"Location"</label>
                <input
                    class="form__input"
                    type="search"
                    placeholder="City or country"
                    prop:value=move || store.location()
                    on:input=move |ev| store.set_location(&event_target_value(&ev))
                />
            </div>
        }
    });

    view! {
        <div class="filter-panel">
            <div class="filter-panel-content">
                {search}
                {selects}
            </div>
            <div class="filter-panel-footer">
                <span class="filter-panel__count">
                    {move || format!("{} {}", store.filtered().len(), results_label)}
                </span>
                {move || if store.active_count() > 0 {
                    view! {
                        <span class="badge badge--primary">{store.active_count()}</span>
                        <button class="filter-panel__clear" on:click=move |_| store.clear()>
                            "Clear all filters"
                        </button>
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }}
            </div>
            <div class="filter-panel-tags">{tags}{location_tag}</div>
        </div>
    }
}

/// Select bound to one facet; the first entry always means "any"
#[component]
fn FacetSelect<T>(store: FacetStore<T>, facet: Facet) -> impl IntoView
where
    T: Facetable + Clone + Send + Sync + 'static,
{
    let options = move || {
        let mut pairs = vec![(ALL.to_string(), format!("Any {}", facet.display_name().to_lowercase()))];
        pairs.extend(
            store
                .options()
                .get(facet)
                .iter()
                .map(|o| (o.value.clone(), format!("{} ({})", o.label, o.count))),
        );
        pairs
    };
    let disabled = move || facet == Facet::City && !store.city_select_enabled();

    view! {
        <div class="form__group">
            <label class="form__label">{facet.display_name()}</label>
            <select
                class="form__select"
                disabled=disabled
                on:change=move |ev| store.set_facet(facet, &event_target_value(&ev))
            >
                <For
                    each=options
                    key=|(value, label)| (value.clone(), label.clone())
                    children=move |(value, label)| {
                        let value_clone = value.clone();
                        let is_selected = move || store.selection(facet) == value_clone;
                        view! {
                            <option value=value selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

/// FilterTag component - individual filter tag/chip
#[component]
pub fn FilterTag(
    /// Tag label
    #[prop(into)]
    label: String,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <button
                class="filter-tag__remove"
                title="Remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                "×"
            </button>
        </div>
    }
}
