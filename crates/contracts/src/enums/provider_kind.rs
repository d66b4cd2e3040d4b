use serde::{Deserialize, Serialize};

/// Provider discriminator: a school or a freelance instructor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProviderKind {
    School,
    Freelancer,
}

impl ProviderKind {
    pub fn code(&self) -> &'static str {
        match self {
            ProviderKind::School => "SCHOOL",
            ProviderKind::Freelancer => "FREELANCER",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::School => "School",
            ProviderKind::Freelancer => "Instructor",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SCHOOL" => Some(ProviderKind::School),
            "FREELANCER" => Some(ProviderKind::Freelancer),
            _ => None,
        }
    }

    pub fn rank(&self) -> usize {
        match self {
            ProviderKind::School => 0,
            ProviderKind::Freelancer => 1,
        }
    }
}
