use crate::agent::ToolRegistry;
use crate::knowledge::KnowledgeBase;
use crate::traits::Tool;
use serde_json::Value;

pub mod accommodations;
pub mod activities;
pub mod altitude;
pub mod attractions;
pub mod itinerary;
pub mod seasons;
pub mod weather;

pub use accommodations::SearchAccommodationsTool;
pub use activities::ActivityRecommendationsTool;
pub use altitude::AltitudeAdviceTool;
pub use attractions::{AttractionDetailsTool, SearchAttractionsTool};
pub use itinerary::DailyItineraryTool;
pub use seasons::BestSeasonTool;
pub use weather::WeatherTool;

/// The Huaraz tool set in the order it is offered to the model. The weather
/// tool is only included when one is given.
pub fn huaraz_tools(kb: KnowledgeBase, weather: Option<WeatherTool>) -> Vec<Box<dyn Tool>> {
    let mut tools: Vec<Box<dyn Tool>> = vec![
        Box::new(SearchAttractionsTool::new(kb)),
        Box::new(AttractionDetailsTool::new(kb)),
        Box::new(ActivityRecommendationsTool::new(kb)),
        Box::new(SearchAccommodationsTool::new(kb)),
        Box::new(BestSeasonTool::new(kb)),
        Box::new(AltitudeAdviceTool),
        Box::new(DailyItineraryTool::new(kb)),
    ];

    if let Some(weather) = weather {
        tools.push(Box::new(weather));
    }

    tools
}

/// Registers [`huaraz_tools`] on `registry`, replacing tools of the same name.
pub fn register_huaraz_tools(
    registry: &ToolRegistry,
    kb: KnowledgeBase,
    weather: Option<WeatherTool>,
) {
    registry.register_all(huaraz_tools(kb, weather));
}

pub fn extract_string_arg(args: &Value, key: &str) -> anyhow::Result<String> {
    args.get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| anyhow::anyhow!("Missing '{}' parameter", key))
        .map(|s| s.to_string())
}

/// Optional string argument; JSON `null` counts as absent.
pub fn extract_opt_string_arg(args: &Value, key: &str) -> Option<String> {
    args.get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

pub fn extract_string_arg_opt(args: &Value, key: &str, default: &str) -> String {
    extract_opt_string_arg(args, key).unwrap_or_else(|| default.to_string())
}

pub fn extract_string_list_arg(args: &Value, key: &str) -> anyhow::Result<Vec<String>> {
    let items = args
        .get(key)
        .and_then(|v| v.as_array())
        .ok_or_else(|| anyhow::anyhow!("Missing '{}' parameter", key))?;

    items
        .iter()
        .map(|v| {
            v.as_str()
                .map(|s| s.to_string())
                .ok_or_else(|| anyhow::anyhow!("'{}' must be a list of strings", key))
        })
        .collect()
}

/// Accepts integers and integral floats, since models send both.
pub fn extract_u32_arg(args: &Value, key: &str) -> anyhow::Result<u32> {
    let value = args
        .get(key)
        .ok_or_else(|| anyhow::anyhow!("Missing '{}' parameter", key))?;

    let number = value
        .as_u64()
        .or_else(|| value.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64))
        .ok_or_else(|| anyhow::anyhow!("'{}' must be a non-negative integer", key))?;

    u32::try_from(number).map_err(|_| anyhow::anyhow!("'{}' is out of range", key))
}
