pub mod card;
pub mod explore;
pub mod provider_listings;
pub mod sport_landing;
