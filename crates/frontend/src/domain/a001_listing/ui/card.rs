use contracts::domain::a001_listing::Listing;
use leptos::prelude::*;

/// Listing tile for the result grids
#[component]
pub fn ListingCard(listing: Listing) -> impl IntoView {
    let price = if listing.price > 0.0 {
        format!("{:.0} {}", listing.price, listing.currency)
    } else {
        String::new()
    };
    let level = listing
        .universal_level
        .map(|l| l.display_name().to_string())
        .unwrap_or_default();

    view! {
        <div class="listing-card">
            <span class="listing-card__type">{listing.kind.display_name()}</span>
            {listing.is_verified.then(|| view! {
                <span class="badge badge--success" title="Verified provider">"Verified"</span>
            })}
            <div class="listing-card__sport">{listing.sport_caption()}</div>
            <h3 class="listing-card__title">{listing.title.clone()}</h3>
            <div class="listing-card__location">{listing.location_label()}</div>
            <div class="listing-card__meta">
                <span>{level}</span>
                <span>{format!("★ {:.1} ({})", listing.rating, listing.review_count)}</span>
                <span class="listing-card__price">{price}</span>
            </div>
        </div>
    }
}
