use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Difficulty {
    #[serde(rename = "bajo")]
    Low,
    #[serde(rename = "medio")]
    Medium,
    #[serde(rename = "medio-alto")]
    MediumHigh,
    #[serde(rename = "alto")]
    High,
    /// Only used by activities whose effort depends on the chosen variant.
    #[serde(rename = "variable")]
    Variable,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "bajo",
            Self::Medium => "medio",
            Self::MediumHigh => "medio-alto",
            Self::High => "alto",
            Self::Variable => "variable",
        }
    }

    /// Case-insensitive exact comparison against the Spanish label.
    pub fn matches(&self, level: &str) -> bool {
        self.as_str() == level.to_lowercase()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Attraction {
    #[serde(skip)]
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    /// Meters above sea level.
    pub altitude: u32,
    pub difficulty: Difficulty,
    pub duration: &'static str,
    /// Spanish month names, or the single entry `"todo el año"`.
    pub best_season: &'static [&'static str],
    pub essentials: &'static [&'static str],
    pub estimated_cost: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<&'static str>,
}

impl Attraction {
    pub fn in_season(&self, month: &str) -> bool {
        let month = month.to_lowercase();
        self.best_season.iter().any(|m| m.to_lowercase() == month)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Activity {
    #[serde(skip)]
    pub key: &'static str,
    pub name: &'static str,
    pub types: &'static [&'static str],
    pub difficulty: Difficulty,
    pub best_for: &'static str,
    pub cost: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Accommodation {
    pub name: &'static str,
    pub price: &'static str,
    pub location: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BudgetTier {
    Budget,
    MidRange,
    Luxury,
}

impl BudgetTier {
    pub const ALL: [BudgetTier; 3] = [Self::Budget, Self::MidRange, Self::Luxury];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::MidRange => "mid_range",
            Self::Luxury => "luxury",
        }
    }

    pub fn parse(tier: &str) -> Option<Self> {
        let tier = tier.to_lowercase();
        Self::ALL.into_iter().find(|t| t.as_str() == tier)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeasonRecommendation {
    #[serde(skip)]
    pub style: &'static str,
    pub best_months: &'static [&'static str],
    pub reason: &'static str,
    pub considerations: &'static str,
}
