use crate::knowledge::KnowledgeBase;
use crate::queries;
use crate::tools::{extract_opt_string_arg, extract_string_arg};
use crate::traits::{Tool, ToolResult};
use async_trait::async_trait;
use serde_json::json;

pub struct SearchAttractionsTool {
    kb: KnowledgeBase,
}

impl SearchAttractionsTool {
    pub fn new(kb: KnowledgeBase) -> Self {
        Self { kb }
    }
}

#[async_trait]
impl Tool for SearchAttractionsTool {
    fn name(&self) -> &str {
        "search_attractions"
    }

    fn description(&self) -> &str {
        "Buscar atracciones turísticas en Huaraz. Devuelve una lista de atracciones relevantes."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Término de búsqueda"
                },
                "difficulty": {
                    "type": "string",
                    "description": "Nivel de dificultad (bajo, medio, alto)"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> anyhow::Result<ToolResult> {
        let query = extract_string_arg(&args, "query")?;
        let difficulty = extract_opt_string_arg(&args, "difficulty");

        let results = queries::search_attractions(&self.kb, &query, difficulty.as_deref());
        ToolResult::json(&results)
    }
}

pub struct AttractionDetailsTool {
    kb: KnowledgeBase,
}

impl AttractionDetailsTool {
    pub fn new(kb: KnowledgeBase) -> Self {
        Self { kb }
    }
}

#[async_trait]
impl Tool for AttractionDetailsTool {
    fn name(&self) -> &str {
        "get_attraction_details"
    }

    fn description(&self) -> &str {
        "Obtener detalles completos de una atracción."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "attraction_name": {
                    "type": "string",
                    "description": "Nombre de la atracción"
                }
            },
            "required": ["attraction_name"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> anyhow::Result<ToolResult> {
        let name = extract_string_arg(&args, "attraction_name")?;
        ToolResult::json(&queries::get_attraction_details(&self.kb, &name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_returns_json_list() {
        let tool = SearchAttractionsTool::new(KnowledgeBase::huaraz());
        let result = tool
            .execute(json!({"query": "laguna", "difficulty": "bajo"}))
            .await
            .unwrap();

        assert!(result.success);
        let value: serde_json::Value = serde_json::from_str(&result.output).unwrap();
        assert_eq!(value.as_array().map(|a| a.len()), Some(1));
        assert_eq!(value[0]["name"], "Laguna Llanganuco");
    }

    #[tokio::test]
    async fn search_requires_query() {
        let tool = SearchAttractionsTool::new(KnowledgeBase::huaraz());
        assert!(tool.execute(json!({})).await.is_err());
    }

    #[tokio::test]
    async fn details_miss_is_still_success() {
        let tool = AttractionDetailsTool::new(KnowledgeBase::huaraz());
        let result = tool
            .execute(json!({"attraction_name": "xyz-nonexistent"}))
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(
            result.output,
            r#"{"error":"No se encontraron detalles para xyz-nonexistent"}"#
        );
    }
}
