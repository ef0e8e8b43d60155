use super::Lookup;
use crate::knowledge::{Activity, KnowledgeBase};

/// First activity whose key or display name contains `activity_type`.
/// With a difficulty, a candidate whose level differs is skipped, so a
/// later activity of the same type can still win.
pub fn get_activity_recommendations(
    kb: &KnowledgeBase,
    activity_type: &str,
    difficulty: Option<&str>,
) -> Lookup<&'static Activity> {
    let wanted = activity_type.to_lowercase();
    let difficulty = difficulty.filter(|d| !d.is_empty());

    kb.activities()
        .iter()
        .filter(|a| a.key.to_lowercase().contains(&wanted) || a.name.to_lowercase().contains(&wanted))
        .find(|a| difficulty.is_none_or(|level| a.difficulty.matches(level)))
        .map(Lookup::Found)
        .unwrap_or_else(|| {
            Lookup::error(format!(
                "No se encontraron actividades del tipo {}",
                activity_type
            ))
        })
}
