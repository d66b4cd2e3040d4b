use crate::shared::api_utils::api_url;
use contracts::domain::a002_provider::{Provider, ProviderDirectory};
use contracts::domain::common::decode_items;
use gloo_net::http::Request;

async fn fetch_provider_list(path: &str) -> Result<Vec<Provider>, String> {
    let response = Request::get(&api_url(path))
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

/// Fetch one school by id
pub async fn fetch_school(id: &str) -> Result<Provider, String> {
    let response = Request::get(&api_url(&format!("/providers/{}/", id)))
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

    serde_json::from_value(raw).map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch schools and freelance instructors.
///
/// A side that fails is logged and comes back empty; the directory itself
/// is always returned.
pub async fn fetch_provider_directory() -> ProviderDirectory {
    let schools = fetch_provider_list("/providers/").await.unwrap_or_else(|e| {
        log::error!("Failed to load schools: {}", e);
        Vec::new()
    });
    let freelancers = fetch_provider_list("/instructors/").await.unwrap_or_else(|e| {
        log::error!("Failed to load instructors: {}", e);
        Vec::new()
    });
    ProviderDirectory::new(schools, freelancers)
}
