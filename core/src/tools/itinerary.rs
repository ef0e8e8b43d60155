use crate::knowledge::KnowledgeBase;
use crate::queries;
use crate::tools::{extract_string_list_arg, extract_u32_arg};
use crate::traits::{Tool, ToolResult};
use async_trait::async_trait;
use serde_json::json;

pub struct DailyItineraryTool {
    kb: KnowledgeBase,
}

impl DailyItineraryTool {
    pub fn new(kb: KnowledgeBase) -> Self {
        Self { kb }
    }
}

#[async_trait]
impl Tool for DailyItineraryTool {
    fn name(&self) -> &str {
        "create_daily_itinerary"
    }

    fn description(&self) -> &str {
        "Crear un itinerario diario basado en atracciones. Devuelve el itinerario sugerido."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "attractions": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Lista de atracciones a visitar"
                },
                "duration_hours": {
                    "type": "integer",
                    "description": "Horas disponibles para la actividad"
                }
            },
            "required": ["attractions", "duration_hours"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> anyhow::Result<ToolResult> {
        let attractions = extract_string_list_arg(&args, "attractions")?;
        let duration_hours = extract_u32_arg(&args, "duration_hours")?;

        ToolResult::json(&queries::create_daily_itinerary(
            &self.kb,
            &attractions,
            duration_hours,
        ))
    }
}
