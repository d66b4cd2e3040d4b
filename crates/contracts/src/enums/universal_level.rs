use serde::{Deserialize, Serialize};

/// Cross-sport difficulty tier of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UniversalLevel {
    FirstTimer,
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    #[serde(other)]
    Unknown,
}

impl UniversalLevel {
    pub fn code(&self) -> &'static str {
        match self {
            UniversalLevel::FirstTimer => "FIRST_TIMER",
            UniversalLevel::Beginner => "BEGINNER",
            UniversalLevel::Intermediate => "INTERMEDIATE",
            UniversalLevel::Advanced => "ADVANCED",
            UniversalLevel::Expert => "EXPERT",
            UniversalLevel::Unknown => "UNKNOWN",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UniversalLevel::FirstTimer => "First timer",
            UniversalLevel::Beginner => "Beginner",
            UniversalLevel::Intermediate => "Intermediate",
            UniversalLevel::Advanced => "Advanced",
            UniversalLevel::Expert => "Expert",
            UniversalLevel::Unknown => "Unknown",
        }
    }

    /// Known tiers from easiest to hardest
    pub fn all() -> Vec<UniversalLevel> {
        vec![
            UniversalLevel::FirstTimer,
            UniversalLevel::Beginner,
            UniversalLevel::Intermediate,
            UniversalLevel::Advanced,
            UniversalLevel::Expert,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "FIRST_TIMER" => Some(UniversalLevel::FirstTimer),
            "BEGINNER" => Some(UniversalLevel::Beginner),
            "INTERMEDIATE" => Some(UniversalLevel::Intermediate),
            "ADVANCED" => Some(UniversalLevel::Advanced),
            "EXPERT" => Some(UniversalLevel::Expert),
            _ => None,
        }
    }

    /// Difficulty rank, 0 = easiest. `Unknown` sorts last.
    pub fn rank(&self) -> usize {
        match self {
            UniversalLevel::FirstTimer => 0,
            UniversalLevel::Beginner => 1,
            UniversalLevel::Intermediate => 2,
            UniversalLevel::Advanced => 3,
            UniversalLevel::Expert => 4,
            UniversalLevel::Unknown => usize::MAX,
        }
    }
}
