use crate::knowledge::KnowledgeBase;
use crate::queries;
use crate::queries::accommodations::DEFAULT_LOCATION;
use crate::tools::{extract_string_arg, extract_string_arg_opt};
use crate::traits::{Tool, ToolResult};
use async_trait::async_trait;
use serde_json::json;

pub struct SearchAccommodationsTool {
    kb: KnowledgeBase,
}

impl SearchAccommodationsTool {
    pub fn new(kb: KnowledgeBase) -> Self {
        Self { kb }
    }
}

#[async_trait]
impl Tool for SearchAccommodationsTool {
    fn name(&self) -> &str {
        "search_accommodations"
    }

    fn description(&self) -> &str {
        "Buscar alojamientos según presupuesto. Devuelve la lista de alojamientos disponibles."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "budget": {
                    "type": "string",
                    "description": "Presupuesto (budget, mid_range, luxury)"
                },
                "location": {
                    "type": "string",
                    "description": "Ubicación",
                    "default": DEFAULT_LOCATION
                }
            },
            "required": ["budget"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> anyhow::Result<ToolResult> {
        let budget = extract_string_arg(&args, "budget")?;
        let location = extract_string_arg_opt(&args, "location", DEFAULT_LOCATION);

        ToolResult::json(&queries::search_accommodations(&self.kb, &budget, &location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_tier_marker() {
        let tool = SearchAccommodationsTool::new(KnowledgeBase::huaraz());
        let result = tool.execute(json!({"budget": "premium"})).await.unwrap();

        assert!(result.success);
        assert_eq!(
            result.output,
            r#"[{"message":"No hay alojamientos disponibles para presupuesto: premium"}]"#
        );
    }
}
