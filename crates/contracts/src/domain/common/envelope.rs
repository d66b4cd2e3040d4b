use serde::de::DeserializeOwned;
use serde_json::Value;

/// Items of a list response sent either as a bare array or paginated as
/// `{"results": [...]}`. Items that fail to decode are skipped.
pub fn decode_items<T: DeserializeOwned>(raw: Value) -> Vec<T> {
    let items = match raw {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                log::warn!("skipping undecodable list item: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_and_paginated() {
        let bare: Vec<u32> = decode_items(json!([1, 2, 3]));
        assert_eq!(bare, vec![1, 2, 3]);

        let paged: Vec<u32> = decode_items(json!({"count": 2, "results": [4, 5]}));
        assert_eq!(paged, vec![4, 5]);
    }

    #[test]
    fn test_garbage_yields_empty_or_skips() {
        let none: Vec<u32> = decode_items(json!({"detail": "Not found."}));
        assert!(none.is_empty());

        let mixed: Vec<u32> = decode_items(json!([1, "two", 3]));
        assert_eq!(mixed, vec![1, 3]);
    }
}
