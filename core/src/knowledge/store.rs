use super::catalog;
use super::types::{Accommodation, Activity, Attraction, BudgetTier, SeasonRecommendation};

/// Read-only view over the static catalogs.
///
/// Lookups never fail: a miss is `None` or an empty sequence, and callers
/// check for emptiness instead of handling errors.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeBase {
    attractions: &'static [Attraction],
    activities: &'static [Activity],
    accommodations: &'static [(BudgetTier, &'static [Accommodation])],
    seasons: &'static [SeasonRecommendation],
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::huaraz()
    }
}

impl KnowledgeBase {
    pub const fn huaraz() -> Self {
        Self {
            attractions: &catalog::ATTRACTIONS,
            activities: &catalog::ACTIVITIES,
            accommodations: &catalog::ACCOMMODATIONS,
            seasons: &catalog::SEASONS,
        }
    }

    pub fn get(&self, key: &str) -> Option<&'static Attraction> {
        self.attractions.iter().find(|a| a.key == key)
    }

    pub fn list_all(&self) -> &'static [Attraction] {
        self.attractions
    }

    pub fn filter_by_difficulty(&self, level: &str) -> Vec<&'static Attraction> {
        self.attractions
            .iter()
            .filter(|a| a.difficulty.matches(level))
            .collect()
    }

    pub fn filter_by_season(&self, month: &str) -> Vec<&'static Attraction> {
        self.attractions
            .iter()
            .filter(|a| a.in_season(month))
            .collect()
    }

    pub fn get_activity(&self, key: &str) -> Option<&'static Activity> {
        self.activities.iter().find(|a| a.key == key)
    }

    pub fn activities(&self) -> &'static [Activity] {
        self.activities
    }

    /// Unknown tiers yield an empty slice.
    pub fn accommodations_for_tier(&self, tier: &str) -> &'static [Accommodation] {
        let Some(tier) = BudgetTier::parse(tier) else {
            return &[];
        };

        self.accommodations
            .iter()
            .find(|(t, _)| *t == tier)
            .map(|(_, list)| *list)
            .unwrap_or(&[])
    }

    pub fn season_for_style(&self, style: &str) -> Option<&'static SeasonRecommendation> {
        let style = style.to_lowercase();
        self.seasons.iter().find(|s| s.style == style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::Difficulty;

    #[test]
    fn get_by_exact_key() {
        let kb = KnowledgeBase::huaraz();
        assert_eq!(kb.get("laguna_69").map(|a| a.name), Some("Laguna 69"));
        assert!(kb.get("Laguna 69").is_none());
        assert!(kb.get("").is_none());
    }

    #[test]
    fn list_all_keeps_insertion_order() {
        let names: Vec<_> = KnowledgeBase::huaraz()
            .list_all()
            .iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(
            names,
            [
                "Laguna Parón",
                "Laguna 69",
                "Nevado Pastoruri",
                "Laguna Llanganuco",
                "Chavín de Huántar"
            ]
        );
    }

    #[test]
    fn filter_by_difficulty_returns_matching_subset() {
        let kb = KnowledgeBase::huaraz();

        for level in ["bajo", "medio", "medio-alto", "alto", "MEDIO"] {
            let expected: Vec<_> = kb
                .list_all()
                .iter()
                .filter(|a| a.difficulty.as_str() == level.to_lowercase())
                .map(|a| a.key)
                .collect();
            let got: Vec<_> = kb
                .filter_by_difficulty(level)
                .iter()
                .map(|a| a.key)
                .collect();
            assert_eq!(got, expected, "level {level}");
        }

        let medium: Vec<_> = kb.filter_by_difficulty("Medio").iter().map(|a| a.key).collect();
        assert_eq!(medium, ["laguna_paron", "laguna_69"]);
        assert!(kb.filter_by_difficulty("alto").is_empty());
        assert!(kb.filter_by_difficulty("").is_empty());
        assert!(kb.filter_by_difficulty("extremo").is_empty());
        assert!(kb
            .filter_by_difficulty("medio-alto")
            .iter()
            .all(|a| a.difficulty == Difficulty::MediumHigh));
    }

    #[test]
    fn filter_by_season_is_case_insensitive() {
        let kb = KnowledgeBase::huaraz();
        let september: Vec<_> = kb
            .filter_by_season("Septiembre")
            .iter()
            .map(|a| a.key)
            .collect();
        assert_eq!(september, ["laguna_paron", "laguna_69"]);

        let all_year: Vec<_> = kb
            .filter_by_season("TODO EL AÑO")
            .iter()
            .map(|a| a.key)
            .collect();
        assert_eq!(all_year, ["laguna_llanganuco", "chavin_de_huantar"]);

        assert!(kb.filter_by_season("enero").is_empty());
    }

    #[test]
    fn accommodations_by_tier() {
        let kb = KnowledgeBase::huaraz();
        assert_eq!(kb.accommodations_for_tier("budget").len(), 3);
        assert_eq!(kb.accommodations_for_tier("Mid_Range").len(), 3);

        let luxury: Vec<_> = kb
            .accommodations_for_tier("luxury")
            .iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(luxury, ["Gran Hotel Huaraz", "Hotel El Tejada"]);

        assert!(kb.accommodations_for_tier("unknown-tier").is_empty());
    }

    #[test]
    fn activities_and_seasons() {
        let kb = KnowledgeBase::huaraz();
        assert_eq!(kb.activities().len(), 4);
        assert_eq!(
            kb.get_activity("rock_climbing").map(|a| a.difficulty),
            Some(Difficulty::Variable)
        );
        assert_eq!(
            kb.season_for_style("Trekking").map(|s| s.reason),
            Some("Cielo claro y poco riesgo de lluvia")
        );
        assert!(kb.season_for_style("gastronomy").is_none());
    }
}
