use super::Lookup;
use crate::knowledge::{KnowledgeBase, SeasonRecommendation};

pub fn get_best_season(kb: &KnowledgeBase, travel_style: &str) -> Lookup<&'static SeasonRecommendation> {
    match kb.season_for_style(travel_style) {
        Some(season) => Lookup::Found(season),
        None => Lookup::message(format!("Estilo de viaje no reconocido: {}", travel_style)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn known_style() {
        let kb = KnowledgeBase::huaraz();
        assert_eq!(
            serde_json::to_value(get_best_season(&kb, "Cultural")).unwrap(),
            json!({
                "best_months": ["todo el año"],
                "reason": "Las festividades ocurren durante el año",
                "considerations": "Verificar fechas de festivales locales"
            })
        );
    }

    #[test]
    fn unknown_style_is_message() {
        let kb = KnowledgeBase::huaraz();
        assert_eq!(
            serde_json::to_value(get_best_season(&kb, "gastronomía")).unwrap(),
            json!({"message": "Estilo de viaje no reconocido: gastronomía"})
        );
    }

    #[test]
    fn repeated_lookup_is_stable() {
        let kb = KnowledgeBase::huaraz();
        for style in ["trekking", "gastronomía"] {
            let first = get_best_season(&kb, style);
            let second = get_best_season(&kb, style);
            assert_eq!(first, second);
            assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&second).unwrap()
            );
        }
    }
}
