use crate::knowledge::{Attraction, KnowledgeBase};
use serde::Serialize;

const DAY_START_HOUR: u32 = 6;
const BLOCK_HOURS: u32 = 3;

const ITINERARY_TIPS: &[&str] = &[
    "Llevar suficiente agua",
    "Usar protector solar",
    "Llevar snacks energéticos",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleEntry {
    pub time: String,
    pub activity: String,
    pub duration: &'static str,
    pub essentials: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyItinerary {
    pub day_schedule: Vec<ScheduleEntry>,
    pub total_attractions: usize,
    pub estimated_completion: String,
    pub tips: &'static [&'static str],
}

/// Naive one-day schedule: every matched attraction gets a fixed three hour
/// block starting at 6:00, in the order given.
///
/// `_duration_hours` is part of the tool contract but does not affect the
/// schedule, and neither does each attraction's own duration. Hours are not
/// wrapped past midnight.
pub fn create_daily_itinerary(
    kb: &KnowledgeBase,
    attractions: &[String],
    _duration_hours: u32,
) -> DailyItinerary {
    let mut hour = DAY_START_HOUR;
    let mut day_schedule = Vec::new();

    for wanted in attractions {
        let Some(attr) = first_name_match(kb, wanted) else {
            continue;
        };

        day_schedule.push(ScheduleEntry {
            time: format!("{}:00", hour),
            activity: format!("Visita a {}", attr.name),
            duration: attr.duration,
            essentials: attr.essentials,
        });
        hour += BLOCK_HOURS;
    }

    DailyItinerary {
        total_attractions: day_schedule.len(),
        day_schedule,
        estimated_completion: format!("{}:00 aproximadamente", hour),
        tips: ITINERARY_TIPS,
    }
}

fn first_name_match(kb: &KnowledgeBase, wanted: &str) -> Option<&'static Attraction> {
    let wanted = wanted.to_lowercase();
    kb.list_all()
        .iter()
        .find(|a| a.name.to_lowercase().contains(&wanted))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn fixed_three_hour_blocks() {
        let kb = KnowledgeBase::huaraz();
        let plan = create_daily_itinerary(&kb, &names(&["Laguna 69", "Chavín de Huántar"]), 10);

        assert_eq!(plan.total_attractions, 2);
        assert_eq!(plan.day_schedule[0].time, "6:00");
        assert_eq!(plan.day_schedule[0].activity, "Visita a Laguna 69");
        assert_eq!(plan.day_schedule[0].duration, "6-8 horas");
        assert_eq!(
            plan.day_schedule[0].essentials,
            kb.get("laguna_69").unwrap().essentials
        );
        assert_eq!(plan.day_schedule[1].time, "9:00");
        assert_eq!(plan.day_schedule[1].activity, "Visita a Chavín de Huántar");
        assert_eq!(
            plan.day_schedule[1].essentials,
            ["cámara", "agua", "linterna o frontal"]
        );
        assert_eq!(plan.estimated_completion, "12:00 aproximadamente");
    }

    #[test]
    fn duration_hours_does_not_change_schedule() {
        let kb = KnowledgeBase::huaraz();
        let wanted = names(&["Laguna 69", "Chavín de Huántar"]);
        assert_eq!(
            create_daily_itinerary(&kb, &wanted, 10),
            create_daily_itinerary(&kb, &wanted, 2)
        );
    }

    #[test]
    fn unmatched_names_are_skipped() {
        let kb = KnowledgeBase::huaraz();
        let plan = create_daily_itinerary(&kb, &names(&["Machu Picchu", "pastoruri"]), 8);

        assert_eq!(plan.total_attractions, 1);
        assert_eq!(plan.day_schedule[0].time, "6:00");
        assert_eq!(plan.day_schedule[0].activity, "Visita a Nevado Pastoruri");
        assert_eq!(plan.estimated_completion, "9:00 aproximadamente");
    }

    #[test]
    fn empty_request() {
        let kb = KnowledgeBase::huaraz();
        let plan = create_daily_itinerary(&kb, &[], 8);

        assert!(plan.day_schedule.is_empty());
        assert_eq!(plan.total_attractions, 0);
        assert_eq!(plan.estimated_completion, "6:00 aproximadamente");
        assert_eq!(plan.tips.len(), 3);
    }

    #[test]
    fn matching_is_one_way() {
        let kb = KnowledgeBase::huaraz();
        let plan = create_daily_itinerary(&kb, &names(&["Laguna 69 al amanecer"]), 8);
        assert!(plan.day_schedule.is_empty());
    }

    #[test]
    fn repeated_request_gives_same_plan() {
        let kb = KnowledgeBase::huaraz();
        let wanted = names(&["Pastoruri", "Laguna 69", "Machu Picchu"]);
        let first = create_daily_itinerary(&kb, &wanted, 8);
        let second = create_daily_itinerary(&kb, &wanted, 8);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
