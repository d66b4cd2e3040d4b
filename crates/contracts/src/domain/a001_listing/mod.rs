pub mod dto;
pub mod request;

pub use dto::Listing;
pub use request::ListingCriteria;
