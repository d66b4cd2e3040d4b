pub mod dto;

pub use dto::{Provider, ProviderDirectory};
