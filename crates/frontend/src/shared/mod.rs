pub mod api_utils;
pub mod components;
pub mod config;
pub mod facet_store;
pub mod url_state;
