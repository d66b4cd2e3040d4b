use contracts::domain::a002_provider::Provider;
use leptos::prelude::*;

/// School / instructor tile
#[component]
pub fn ProviderCard(provider: Provider) -> impl IntoView {
    let kind = provider
        .kind
        .map(|k| k.display_name())
        .unwrap_or("Provider");

    view! {
        <div class="provider-card">
            <span class="provider-card__kind">{kind}</span>
            <h3 class="provider-card__name">{provider.title()}</h3>
            <div class="provider-card__location">{provider.location_label()}</div>
        </div>
    }
}
