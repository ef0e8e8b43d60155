use super::Listing;
use crate::knowledge::{Accommodation, KnowledgeBase};

pub const DEFAULT_LOCATION: &str = "Huaraz";

/// Accommodations for a budget tier (`budget`, `mid_range`, `luxury`).
///
/// `location` is accepted for the tool contract but does not filter results.
pub fn search_accommodations(
    kb: &KnowledgeBase,
    budget: &str,
    _location: &str,
) -> Listing<&'static Accommodation> {
    let found = kb.accommodations_for_tier(budget).iter().collect();

    Listing::from_items(found, || {
        format!("No hay alojamientos disponibles para presupuesto: {}", budget)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn luxury_tier_has_two_entries() {
        let kb = KnowledgeBase::huaraz();
        let luxury = search_accommodations(&kb, "luxury", DEFAULT_LOCATION);

        assert_eq!(
            serde_json::to_value(&luxury).unwrap(),
            json!([
                {"name": "Gran Hotel Huaraz", "price": "S/. 200-300 noche", "location": "Plaza de Armas"},
                {"name": "Hotel El Tejada", "price": "S/. 180-250 noche", "location": "Centro"}
            ])
        );
    }

    #[test]
    fn location_does_not_filter() {
        let kb = KnowledgeBase::huaraz();
        let centro = search_accommodations(&kb, "budget", "Centro");
        let elsewhere = search_accommodations(&kb, "budget", "Caraz");
        assert_eq!(centro, elsewhere);
        assert_eq!(centro.items().len(), 3);
    }

    #[test]
    fn unknown_tier_returns_marker_entry() {
        let kb = KnowledgeBase::huaraz();
        let unknown = search_accommodations(&kb, "unknown-tier", DEFAULT_LOCATION);
        assert_eq!(
            serde_json::to_value(&unknown).unwrap(),
            json!([{"message": "No hay alojamientos disponibles para presupuesto: unknown-tier"}])
        );
    }

    #[test]
    fn repeated_search_is_stable() {
        let kb = KnowledgeBase::huaraz();
        let first = search_accommodations(&kb, "mid_range", DEFAULT_LOCATION);
        let second = search_accommodations(&kb, "mid_range", DEFAULT_LOCATION);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
