use crate::shared::api_utils::{api_url, with_query};
use contracts::domain::a001_listing::{Listing, ListingCriteria};
use contracts::domain::common::decode_items;
use gloo_net::http::Request;

/// Fetch listings matching the coarse server-side criteria
pub async fn fetch_listings(criteria: &ListingCriteria) -> Result<Vec<Listing>, String> {
    let url = api_url(&with_query("/listings/", &criteria.query_pairs()));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let raw: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(decode_items(raw))
}
