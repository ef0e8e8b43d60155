use crate::knowledge::KnowledgeBase;
use crate::queries;
use crate::tools::extract_string_arg;
use crate::traits::{Tool, ToolResult};
use async_trait::async_trait;
use serde_json::json;

pub struct BestSeasonTool {
    kb: KnowledgeBase,
}

impl BestSeasonTool {
    pub fn new(kb: KnowledgeBase) -> Self {
        Self { kb }
    }
}

#[async_trait]
impl Tool for BestSeasonTool {
    fn name(&self) -> &str {
        "get_best_season"
    }

    fn description(&self) -> &str {
        "Obtener la mejor época para viajar según estilo de viaje."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "travel_style": {
                    "type": "string",
                    "description": "Estilo de viaje (trekking, casual, photography)"
                }
            },
            "required": ["travel_style"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> anyhow::Result<ToolResult> {
        let style = extract_string_arg(&args, "travel_style")?;
        ToolResult::json(&queries::get_best_season(&self.kb, &style))
    }
}
