//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

/// Backend base URL baked in at build time, e.g. `https://api.example.com/api`
const API_URL: Option<&str> = option_env!("TTW_API_URL");

/// Get the base URL for API requests
///
/// Uses `TTW_API_URL` when the build sets it; otherwise constructs the URL
/// from the current window location, using port 8000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:8000/api"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(url) = API_URL {
        return url.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000/api", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path relative to the base (should start with "/")
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/listings/");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Append `key=value` pairs to a path, percent-encoding the values
pub fn with_query(path: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }
    let query = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", path, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("/listings/", &[]), "/listings/");
        assert_eq!(
            with_query(
                "/listings/",
                &[("sport", "kitesurf".to_string()), ("city__name__iexact", "Sao Paulo".to_string())]
            ),
            "/listings/?sport=kitesurf&city__name__iexact=Sao%20Paulo"
        );
    }
}
