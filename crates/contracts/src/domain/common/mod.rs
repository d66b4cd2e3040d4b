//! Helpers shared by all domain DTOs

pub mod envelope;
pub mod lenient;

pub use envelope::decode_items;
