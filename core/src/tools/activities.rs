use crate::knowledge::KnowledgeBase;
use crate::queries;
use crate::tools::{extract_opt_string_arg, extract_string_arg};
use crate::traits::{Tool, ToolResult};
use async_trait::async_trait;
use serde_json::json;

pub struct ActivityRecommendationsTool {
    kb: KnowledgeBase,
}

impl ActivityRecommendationsTool {
    pub fn new(kb: KnowledgeBase) -> Self {
        Self { kb }
    }
}

#[async_trait]
impl Tool for ActivityRecommendationsTool {
    fn name(&self) -> &str {
        "get_activity_recommendations"
    }

    fn description(&self) -> &str {
        "Obtener recomendaciones de actividades. Devuelve los detalles de la actividad recomendada."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "activity_type": {
                    "type": "string",
                    "description": "Tipo de actividad (trekking, climbing, cultural_tours, etc.)"
                },
                "difficulty": {
                    "type": "string",
                    "description": "Nivel de dificultad deseado"
                }
            },
            "required": ["activity_type"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> anyhow::Result<ToolResult> {
        let activity_type = extract_string_arg(&args, "activity_type")?;
        let difficulty = extract_opt_string_arg(&args, "difficulty");

        ToolResult::json(&queries::get_activity_recommendations(
            &self.kb,
            &activity_type,
            difficulty.as_deref(),
        ))
    }
}
