use crate::queries::WeatherClient;
use crate::queries::weather::DEFAULT_WEATHER_LOCATION;
use crate::tools::extract_string_arg_opt;
use crate::traits::{Tool, ToolResult};
use async_trait::async_trait;
use serde_json::json;

pub struct WeatherTool {
    client: WeatherClient,
    default_location: String,
}

impl WeatherTool {
    pub fn new(client: WeatherClient) -> Self {
        Self {
            client,
            default_location: DEFAULT_WEATHER_LOCATION.to_string(),
        }
    }

    pub fn with_default_location(mut self, location: impl Into<String>) -> Self {
        self.default_location = location.into();
        self
    }
}

#[async_trait]
impl Tool for WeatherTool {
    fn name(&self) -> &str {
        "get_weather"
    }

    fn description(&self) -> &str {
        "Obtener el clima actual en Huaraz. Si no hay datos en tiempo real, devuelve una descripción general del clima."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "location": {
                    "type": "string",
                    "description": "Ciudad a consultar (por defecto Huaraz)"
                }
            }
        })
    }

    async fn execute(&self, args: serde_json::Value) -> anyhow::Result<ToolResult> {
        let location = extract_string_arg_opt(&args, "location", &self.default_location);
        let report = self.client.current(&location).await;
        ToolResult::json(&report)
    }
}
