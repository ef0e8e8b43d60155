//! Query functions the agent exposes as tools.
//!
//! None of these return `Err` for a miss. A miss is a success-shaped value
//! carrying a Spanish message, so the model always gets parsable JSON.

use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;

pub mod accommodations;
pub mod activities;
pub mod altitude;
pub mod attractions;
pub mod itinerary;
pub mod seasons;
pub mod weather;

pub use accommodations::search_accommodations;
pub use activities::get_activity_recommendations;
pub use altitude::{AltitudeAdvice, get_altitude_advice};
pub use attractions::{
    AttractionDetails, AttractionSummary, get_attraction_details, search_attractions,
};
pub use itinerary::{DailyItinerary, ScheduleEntry, create_daily_itinerary};
pub use seasons::get_best_season;
pub use weather::{WeatherClient, WeatherReport};

/// A single record or a marker. Serializes as the record itself,
/// `{"message": ...}` or `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Lookup<T> {
    Found(T),
    Message { message: String },
    Error { error: String },
}

impl<T> Lookup<T> {
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self::Error {
            error: error.into(),
        }
    }

    pub fn found(&self) -> Option<&T> {
        match self {
            Self::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn marker(&self) -> Option<&str> {
        match self {
            Self::Found(_) => None,
            Self::Message { message } => Some(message),
            Self::Error { error } => Some(error),
        }
    }
}

/// A list result that is never empty on the wire: no hits serialize as
/// `[{"message": ...}]`.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<T> {
    Items(Vec<T>),
    Empty(String),
}

impl<T> Listing<T> {
    pub fn from_items(items: Vec<T>, empty_message: impl FnOnce() -> String) -> Self {
        if items.is_empty() {
            Self::Empty(empty_message())
        } else {
            Self::Items(items)
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            Self::Items(items) => items,
            Self::Empty(_) => &[],
        }
    }

    pub fn marker(&self) -> Option<&str> {
        match self {
            Self::Items(_) => None,
            Self::Empty(message) => Some(message),
        }
    }

    /// Length as the model sees it, counting the placeholder entry.
    pub fn wire_len(&self) -> usize {
        match self {
            Self::Items(items) => items.len(),
            Self::Empty(_) => 1,
        }
    }
}

#[derive(Serialize)]
struct Notice<'a> {
    message: &'a str,
}

impl<T: Serialize> Serialize for Listing<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Items(items) => items.serialize(serializer),
            Self::Empty(message) => {
                let mut seq = serializer.serialize_seq(Some(1))?;
                seq.serialize_element(&Notice { message })?;
                seq.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lookup_serializes_untagged() {
        let found: Lookup<u32> = Lookup::Found(7);
        let message: Lookup<u32> = Lookup::message("nada");
        let error: Lookup<u32> = Lookup::error("falló");

        assert_eq!(serde_json::to_value(&found).unwrap(), json!(7));
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({"message": "nada"})
        );
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({"error": "falló"})
        );
        assert_eq!(error.marker(), Some("falló"));
        assert!(found.is_found());
    }

    #[test]
    fn empty_listing_serializes_as_single_marker() {
        let listing: Listing<u32> = Listing::from_items(vec![], || "vacío".to_string());
        assert_eq!(listing.wire_len(), 1);
        assert!(listing.items().is_empty());
        assert_eq!(
            serde_json::to_value(&listing).unwrap(),
            json!([{"message": "vacío"}])
        );

        let listing = Listing::from_items(vec![1, 2], || unreachable!());
        assert_eq!(serde_json::to_value(&listing).unwrap(), json!([1, 2]));
        assert_eq!(listing.marker(), None);
    }
}
