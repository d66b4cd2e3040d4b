use crate::enums::{ListingType, ProviderKind, UniversalLevel};
use crate::shared::facets::canonical::{clean_str, fold_sport};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sentinel selection value meaning "match anything"
pub const ALL: &str = "ALL";

/// Filterable dimension. Declaration order is the evaluation priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Sport,
    #[serde(rename = "type")]
    Type,
    Difficulty,
    Country,
    City,
}

impl Facet {
    pub fn code(&self) -> &'static str {
        match self {
            Facet::Sport => "sport",
            Facet::Type => "type",
            Facet::Difficulty => "difficulty",
            Facet::Country => "country",
            Facet::City => "city",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Facet::Sport => "Sport",
            Facet::Type => "Type",
            Facet::Difficulty => "Difficulty",
            Facet::Country => "Country",
            Facet::City => "City",
        }
    }

    /// All facets in priority order: sport, type, difficulty, country, city
    pub fn all() -> Vec<Facet> {
        vec![
            Facet::Sport,
            Facet::Type,
            Facet::Difficulty,
            Facet::Country,
            Facet::City,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "sport" => Some(Facet::Sport),
            "type" => Some(Facet::Type),
            "difficulty" => Some(Facet::Difficulty),
            "country" => Some(Facet::Country),
            "city" => Some(Facet::City),
            _ => None,
        }
    }

    /// 0 = evaluated first
    pub fn priority(&self) -> usize {
        *self as usize
    }

    /// Facets evaluated before this one
    pub fn higher(&self) -> impl Iterator<Item = Facet> {
        let own = self.priority();
        Facet::all().into_iter().filter(move |f| f.priority() < own)
    }

    /// Canonical form of a raw selection coming from a control or a URL.
    ///
    /// Empty input and `"ALL"` both mean no restriction. Sport selections are
    /// folded exactly like entity sport values so both sides compare equal.
    pub fn canonicalize(&self, raw: &str) -> FacetSelection {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == ALL {
            return FacetSelection::All;
        }
        let value = match self {
            Facet::Sport => fold_sport(trimmed),
            _ => clean_str(trimmed),
        };
        value.map(FacetSelection::Value).unwrap_or(FacetSelection::All)
    }

    /// Deterministic option ordering.
    ///
    /// Type follows enum declaration order, difficulty goes easiest to
    /// hardest, everything else is alphabetical. Unknown codes sort after
    /// known ones, alphabetically among themselves.
    pub fn compare_values(&self, a: &str, b: &str) -> Ordering {
        let rank = |v: &str| -> usize {
            match self {
                Facet::Type => ListingType::from_code(v)
                    .map(|t| t.rank())
                    .or_else(|| {
                        ProviderKind::from_code(v).map(|k| ListingType::all().len() + k.rank())
                    })
                    .unwrap_or(usize::MAX),
                Facet::Difficulty => UniversalLevel::from_code(v)
                    .map(|l| l.rank())
                    .unwrap_or(usize::MAX),
                _ => 0,
            }
        };
        rank(a).cmp(&rank(b)).then_with(|| a.cmp(b))
    }

    /// Human label for a canonical value when the entity offers nothing better
    pub fn default_label(&self, value: &str) -> String {
        match self {
            Facet::Type => ListingType::from_code(value)
                .map(|t| t.display_name().to_string())
                .or_else(|| ProviderKind::from_code(value).map(|k| k.display_name().to_string()))
                .unwrap_or_else(|| value.to_string()),
            Facet::Difficulty => UniversalLevel::from_code(value)
                .map(|l| l.display_name().to_string())
                .unwrap_or_else(|| value.to_string()),
            Facet::Sport => capitalize(value),
            Facet::Country | Facet::City => value.to_string(),
        }
    }
}

/// Selected value of one facet
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum FacetSelection {
    #[default]
    All,
    Value(String),
}

impl FacetSelection {
    pub fn is_all(&self) -> bool {
        matches!(self, FacetSelection::All)
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            FacetSelection::All => None,
            FacetSelection::Value(v) => Some(v.as_str()),
        }
    }

    /// Value as controls expect it: `"ALL"` for no restriction
    pub fn as_control_value(&self) -> &str {
        self.value().unwrap_or(ALL)
    }
}

/// Canonical value(s) an entity carries for one facet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetValue {
    /// Field absent or unresolvable; never matches an active selection
    Missing,
    One(String),
    /// Set-valued field (provider sports); matches by membership
    Many(Vec<String>),
}

impl FacetValue {
    pub fn from_option(value: Option<String>) -> Self {
        value.map(FacetValue::One).unwrap_or(FacetValue::Missing)
    }

    pub fn matches(&self, selected: &str) -> bool {
        match self {
            FacetValue::Missing => false,
            FacetValue::One(v) => v == selected,
            FacetValue::Many(vs) => vs.iter().any(|v| v == selected),
        }
    }

    pub fn values(&self) -> &[String] {
        match self {
            FacetValue::Missing => &[],
            FacetValue::One(v) => std::slice::from_ref(v),
            FacetValue::Many(vs) => vs.as_slice(),
        }
    }
}

pub(crate) fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_follows_declaration() {
        let priorities: Vec<usize> = Facet::all().iter().map(|f| f.priority()).collect();
        assert_eq!(priorities, vec![0, 1, 2, 3, 4]);
        assert_eq!(
            Facet::City.higher().collect::<Vec<_>>(),
            vec![Facet::Sport, Facet::Type, Facet::Difficulty, Facet::Country]
        );
        assert_eq!(Facet::Sport.higher().count(), 0);
    }

    #[test]
    fn test_canonicalize_selection() {
        assert_eq!(Facet::City.canonicalize(""), FacetSelection::All);
        assert_eq!(Facet::City.canonicalize("ALL"), FacetSelection::All);
        assert_eq!(
            Facet::Sport.canonicalize(" KiteSurf "),
            FacetSelection::Value("kitesurf".into())
        );
        // Only sport is folded
        assert_eq!(
            Facet::City.canonicalize("Paris"),
            FacetSelection::Value("Paris".into())
        );
        assert_ne!(
            Facet::City.canonicalize("paris"),
            Facet::City.canonicalize("Paris")
        );
    }

    #[test]
    fn test_difficulty_ordering() {
        let mut levels = vec!["EXPERT", "BEGINNER", "WHATEVER", "FIRST_TIMER"];
        levels.sort_by(|a, b| Facet::Difficulty.compare_values(a, b));
        assert_eq!(levels, vec!["FIRST_TIMER", "BEGINNER", "EXPERT", "WHATEVER"]);
    }

    #[test]
    fn test_value_matching() {
        assert!(!FacetValue::Missing.matches("Paris"));
        assert!(FacetValue::One("Paris".into()).matches("Paris"));
        assert!(FacetValue::Many(vec!["surf".into(), "kitesurf".into()]).matches("kitesurf"));
        assert!(!FacetValue::Many(vec![]).matches("kitesurf"));
    }
}
