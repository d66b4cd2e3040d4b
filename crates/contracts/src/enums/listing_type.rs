use serde::{Deserialize, Serialize};

/// Kind of bookable product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingType {
    Session,
    Course,
    Trip,
    Rent,
    Experience,
    /// Anything the backend sends that this client does not know yet
    #[serde(other)]
    Unknown,
}

impl ListingType {
    /// Wire code, as the backend sends it
    pub fn code(&self) -> &'static str {
        match self {
            ListingType::Session => "SESSION",
            ListingType::Course => "COURSE",
            ListingType::Trip => "TRIP",
            ListingType::Rent => "RENT",
            ListingType::Experience => "EXPERIENCE",
            ListingType::Unknown => "UNKNOWN",
        }
    }

    /// Label used on cards and filter controls
    pub fn display_name(&self) -> &'static str {
        match self {
            ListingType::Session => "Session",
            ListingType::Course => "Course",
            ListingType::Trip => "Trip",
            ListingType::Rent => "Rental",
            ListingType::Experience => "Experience",
            ListingType::Unknown => "Other",
        }
    }

    /// All known types, in the order filter controls list them
    pub fn all() -> Vec<ListingType> {
        vec![
            ListingType::Session,
            ListingType::Course,
            ListingType::Trip,
            ListingType::Rent,
            ListingType::Experience,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SESSION" => Some(ListingType::Session),
            "COURSE" => Some(ListingType::Course),
            "TRIP" => Some(ListingType::Trip),
            "RENT" => Some(ListingType::Rent),
            "EXPERIENCE" => Some(ListingType::Experience),
            _ => None,
        }
    }

    /// Position in `all()`, used to order type facet options
    pub fn rank(&self) -> usize {
        Self::all()
            .iter()
            .position(|t| t == self)
            .unwrap_or(usize::MAX)
    }
}

impl Default for ListingType {
    fn default() -> Self {
        ListingType::Unknown
    }
}
