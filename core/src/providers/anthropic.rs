use crate::traits::{ChatMessage, ChatRequest, ChatResponse, Provider, ToolCall, ToolSpec};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com/v1";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_MAX_TOKENS: u32 = 4096;

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    messages: Vec<AnthropicMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<AnthropicTool<'a>>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage {
    role: &'static str,
    content: Vec<ContentBlock>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text {
        text: String,
    },
    ToolUse {
        id: String,
        name: String,
        input: serde_json::Value,
    },
    ToolResult {
        tool_use_id: String,
        content: String,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Serialize)]
struct AnthropicTool<'a> {
    name: &'a str,
    description: &'a str,
    input_schema: &'a serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
}

/// Messages API client.
pub struct AnthropicProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    max_tokens: u32,
}

impl AnthropicProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .connect_timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key: api_key.into(),
            base_url: ANTHROPIC_BASE_URL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let url = base_url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// System messages move to the top-level `system` field. Tool results
    /// become `tool_result` blocks in a user turn, and consecutive results
    /// share one turn.
    fn convert_messages(messages: &[ChatMessage]) -> (Option<String>, Vec<AnthropicMessage>) {
        let mut system_parts = Vec::new();
        let mut result: Vec<AnthropicMessage> = Vec::new();

        for m in messages {
            match m.role.as_str() {
                "system" => system_parts.push(m.content.clone()),
                "tool" => {
                    let block = ContentBlock::ToolResult {
                        tool_use_id: m.tool_call_id.clone().unwrap_or_default(),
                        content: m.content.clone(),
                    };
                    match result.last_mut() {
                        Some(last)
                            if last.role == "user"
                                && matches!(
                                    last.content.last(),
                                    Some(ContentBlock::ToolResult { .. })
                                ) =>
                        {
                            last.content.push(block)
                        }
                        _ => result.push(AnthropicMessage {
                            role: "user",
                            content: vec![block],
                        }),
                    }
                }
                "assistant" => {
                    let mut content = Vec::new();
                    if !m.content.trim().is_empty() {
                        content.push(ContentBlock::Text {
                            text: m.content.clone(),
                        });
                    }
                    for tc in m.tool_calls.iter().flatten() {
                        content.push(ContentBlock::ToolUse {
                            id: tc.id.clone(),
                            name: tc.name.clone(),
                            input: serde_json::from_str(&tc.arguments)
                                .unwrap_or_else(|_| serde_json::json!({})),
                        });
                    }
                    if !content.is_empty() {
                        result.push(AnthropicMessage {
                            role: "assistant",
                            content,
                        });
                    }
                }
                _ => result.push(AnthropicMessage {
                    role: "user",
                    content: vec![ContentBlock::Text {
                        text: m.content.clone(),
                    }],
                }),
            }
        }

        let system = (!system_parts.is_empty()).then(|| system_parts.join("\n\n"));
        (system, result)
    }

    fn convert_tools(tools: &[ToolSpec]) -> Vec<AnthropicTool<'_>> {
        tools
            .iter()
            .map(|t| AnthropicTool {
                name: &t.name,
                description: &t.description,
                input_schema: &t.parameters_schema,
            })
            .collect()
    }

    fn parse_response(response: AnthropicResponse) -> anyhow::Result<ChatResponse> {
        let mut texts = Vec::new();
        let mut tool_calls = Vec::new();

        for block in response.content {
            match block {
                ContentBlock::Text { text } => texts.push(text),
                ContentBlock::ToolUse { id, name, input } => tool_calls.push(ToolCall {
                    id,
                    name,
                    arguments: serde_json::to_string(&input)?,
                }),
                ContentBlock::ToolResult { .. } | ContentBlock::Unknown => {}
            }
        }

        let text = texts.join("\n");
        if text.trim().is_empty() && tool_calls.is_empty() {
            return Err(anyhow::anyhow!(
                "Empty response from API: no content or tool calls"
            ));
        }

        Ok(ChatResponse {
            text: (!text.is_empty()).then_some(text),
            tool_calls,
        })
    }
}

#[async_trait]
impl Provider for AnthropicProvider {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn chat(
        &self,
        request: ChatRequest<'_>,
        model: &str,
        temperature: f64,
    ) -> anyhow::Result<ChatResponse> {
        let (system, messages) = Self::convert_messages(request.messages);
        let anthropic_request = AnthropicRequest {
            model,
            max_tokens: self.max_tokens,
            temperature,
            system,
            messages,
            tools: request.tools.map(Self::convert_tools),
        };

        debug!(model, messages = request.messages.len(), "anthropic chat request");

        let response = self
            .client
            .post(format!("{}/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&anthropic_request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "Anthropic API error {}: {}",
                status,
                error_text
            ));
        }

        let anthropic_response: AnthropicResponse = response.json().await?;
        Self::parse_response(anthropic_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_shape_splits_system_and_tool_results() {
        let messages = vec![
            ChatMessage::system("Eres un asistente turístico"),
            ChatMessage::user("¿Qué llevo a la Laguna 69?"),
            ChatMessage::assistant_with_tool_calls(
                "Reviso los detalles.",
                vec![
                    ToolCall {
                        id: "toolu_1".into(),
                        name: "get_attraction_details".into(),
                        arguments: r#"{"attraction_name":"Laguna 69"}"#.into(),
                    },
                    ToolCall {
                        id: "toolu_2".into(),
                        name: "get_altitude_advice".into(),
                        arguments: "{}".into(),
                    },
                ],
            ),
            ChatMessage::tool_result("toolu_1".into(), "{\"altitude\":\"4600m\"}"),
            ChatMessage::tool_result("toolu_2".into(), "{\"symptoms\":[]}"),
        ];
        let tools = vec![ToolSpec {
            name: "get_altitude_advice".into(),
            description: "Obtener consejos para evitar el mal de altura.".into(),
            parameters_schema: json!({"type": "object", "properties": {}}),
        }];

        let (system, converted) = AnthropicProvider::convert_messages(&messages);
        let request = AnthropicRequest {
            model: "claude-3-opus-20240229",
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: 0.7,
            system,
            messages: converted,
            tools: Some(AnthropicProvider::convert_tools(&tools)),
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["system"], "Eres un asistente turístico");
        assert_eq!(value["messages"].as_array().unwrap().len(), 3);
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"][0]["type"], "text");

        let assistant = &value["messages"][1];
        assert_eq!(assistant["role"], "assistant");
        assert_eq!(assistant["content"][1]["type"], "tool_use");
        assert_eq!(assistant["content"][1]["input"]["attraction_name"], "Laguna 69");

        let results = &value["messages"][2];
        assert_eq!(results["role"], "user");
        assert_eq!(results["content"][0]["type"], "tool_result");
        assert_eq!(results["content"][0]["tool_use_id"], "toolu_1");
        assert_eq!(results["content"][1]["tool_use_id"], "toolu_2");

        assert_eq!(value["tools"][0]["name"], "get_altitude_advice");
        assert_eq!(value["tools"][0]["input_schema"]["type"], "object");
    }

    #[test]
    fn parses_text_and_tool_use() {
        let raw = json!({
            "id": "msg_1",
            "type": "message",
            "content": [
                {"type": "text", "text": "Voy a buscar atracciones."},
                {"type": "tool_use", "id": "toolu_9", "name": "search_attractions", "input": {"query": "laguna"}}
            ],
            "stop_reason": "tool_use"
        });
        let response: AnthropicResponse = serde_json::from_value(raw).unwrap();
        let parsed = AnthropicProvider::parse_response(response).unwrap();

        assert_eq!(parsed.text_or_empty(), "Voy a buscar atracciones.");
        assert_eq!(parsed.tool_calls[0].id, "toolu_9");
        assert_eq!(parsed.tool_calls[0].name, "search_attractions");
        assert_eq!(parsed.tool_calls[0].arguments, r#"{"query":"laguna"}"#);
    }

    #[test]
    fn unknown_blocks_are_skipped_and_empty_is_error() {
        let raw = json!({"content": [{"type": "thinking", "thinking": "..."}]});
        let response: AnthropicResponse = serde_json::from_value(raw).unwrap();
        assert!(AnthropicProvider::parse_response(response).is_err());
    }
}
