use serde::{Deserialize, Serialize};

/// Sport discipline group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SportCategory {
    Water,
    Land,
    Snow,
    Air,
}

impl SportCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            SportCategory::Water => "Water",
            SportCategory::Land => "Land",
            SportCategory::Snow => "Snow",
            SportCategory::Air => "Air",
        }
    }
}
