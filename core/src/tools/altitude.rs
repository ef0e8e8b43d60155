use crate::queries;
use crate::traits::{Tool, ToolResult};
use async_trait::async_trait;
use serde_json::json;

pub struct AltitudeAdviceTool;

#[async_trait]
impl Tool for AltitudeAdviceTool {
    fn name(&self) -> &str {
        "get_altitude_advice"
    }

    fn description(&self) -> &str {
        "Obtener consejos para evitar el mal de altura."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _args: serde_json::Value) -> anyhow::Result<ToolResult> {
        ToolResult::json(queries::get_altitude_advice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ignores_arguments() {
        let plain = AltitudeAdviceTool.execute(json!({})).await.unwrap();
        let noisy = AltitudeAdviceTool
            .execute(json!({"altitude": 5000}))
            .await
            .unwrap();
        assert_eq!(plain, noisy);
    }
}
