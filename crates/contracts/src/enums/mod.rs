pub mod listing_type;
pub mod provider_kind;
pub mod sport_category;
pub mod universal_level;

pub use listing_type::ListingType;
pub use provider_kind::ProviderKind;
pub use sport_category::SportCategory;
pub use universal_level::UniversalLevel;
