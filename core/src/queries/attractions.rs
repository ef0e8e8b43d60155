use super::{Listing, Lookup};
use crate::knowledge::{Attraction, Difficulty, KnowledgeBase};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttractionSummary {
    pub name: &'static str,
    pub description: &'static str,
    pub altitude: u32,
    pub duration: &'static str,
    pub difficulty: Difficulty,
}

impl From<&'static Attraction> for AttractionSummary {
    fn from(attr: &'static Attraction) -> Self {
        Self {
            name: attr.name,
            description: attr.description,
            altitude: attr.altitude,
            duration: attr.duration,
            difficulty: attr.difficulty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttractionDetails {
    pub name: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    /// Formatted as `"4185m"`.
    pub altitude: String,
    pub difficulty: Difficulty,
    pub duration: &'static str,
    /// Months joined with `", "`.
    pub best_season: String,
    pub essentials: &'static [&'static str],
    pub cost: &'static str,
}

impl From<&'static Attraction> for AttractionDetails {
    fn from(attr: &'static Attraction) -> Self {
        Self {
            name: attr.name,
            description: attr.description,
            location: attr.location,
            altitude: format!("{}m", attr.altitude),
            difficulty: attr.difficulty,
            duration: attr.duration,
            best_season: attr.best_season.join(", "),
            essentials: attr.essentials,
            cost: attr.estimated_cost,
        }
    }
}

/// Case-insensitive substring search over name and description, optionally
/// narrowed to one difficulty level first. An empty difficulty means no filter.
pub fn search_attractions(
    kb: &KnowledgeBase,
    query: &str,
    difficulty: Option<&str>,
) -> Listing<AttractionSummary> {
    let candidates: Vec<&'static Attraction> = match difficulty.filter(|d| !d.is_empty()) {
        Some(level) => kb.filter_by_difficulty(level),
        None => kb.list_all().iter().collect(),
    };

    let query = query.to_lowercase();
    let hits = candidates
        .into_iter()
        .filter(|a| {
            a.name.to_lowercase().contains(&query) || a.description.to_lowercase().contains(&query)
        })
        .map(AttractionSummary::from)
        .collect();

    Listing::from_items(hits, || {
        "No se encontraron atracciones para tu búsqueda".to_string()
    })
}

/// Two-way containment so both "parón" and "quiero ir a laguna 69 mañana"
/// resolve. First catalog entry that matches wins.
pub fn get_attraction_details(kb: &KnowledgeBase, attraction_name: &str) -> Lookup<AttractionDetails> {
    let wanted = attraction_name.to_lowercase();

    kb.list_all()
        .iter()
        .find(|a| {
            let name = a.name.to_lowercase();
            name.contains(&wanted) || wanted.contains(&name)
        })
        .map(|a| Lookup::Found(AttractionDetails::from(a)))
        .unwrap_or_else(|| {
            Lookup::error(format!(
                "No se encontraron detalles para {}",
                attraction_name
            ))
        })
}
