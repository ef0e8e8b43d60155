use crate::agent::{ContextBuilder, ToolRegistry, UserContext};
use crate::memory::{format_buffer, to_history};
use crate::traits::{
    ChatMessage, ChatRequest, Memory, MemoryEntry, Provider, ToolCall, ToolResult,
};
use anyhow::Result;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, warn};

pub const DEFAULT_MAX_ITERATIONS: usize = 10;
pub const DEFAULT_MAX_HISTORY: usize = 20;

pub const APOLOGY_MESSAGE: &str =
    "Disculpa, ocurrió un error procesando tu consulta. Por favor, intenta de nuevo.";
const MAX_ITERATIONS_MESSAGE: &str =
    "Se alcanzó el número máximo de iteraciones sin una respuesta final.";
const NO_RESPONSE_MESSAGE: &str = "No se recibió respuesta del modelo.";
const USER_CONTEXT_INPUT: &str = "Información del usuario";

const TOOL_CALL_OPEN_TAG: &str = "<tool_call>";
const TOOL_CALL_CLOSE_TAG: &str = "</tool_call>";

/// Outcome of one user turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentReply {
    pub success: bool,
    pub response: String,
    /// Tool names in invocation order, repeats included.
    pub tool_calls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AgentReply {
    fn answered(response: String, tool_calls: Vec<String>) -> Self {
        Self {
            success: true,
            response,
            tool_calls,
            error: None,
        }
    }

    fn failed(error: &anyhow::Error) -> Self {
        Self {
            success: false,
            response: APOLOGY_MESSAGE.to_string(),
            tool_calls: Vec::new(),
            error: Some(format!("{:#}", error)),
        }
    }
}

pub struct AgentLoop {
    provider: Arc<dyn Provider>,
    context_builder: ContextBuilder,
    tool_registry: Arc<ToolRegistry>,
    memory: Arc<dyn Memory>,
    model: String,
    temperature: f64,
    max_iterations: usize,
    max_history: usize,
}

impl AgentLoop {
    pub fn new(
        provider: Arc<dyn Provider>,
        context_builder: ContextBuilder,
        tool_registry: Arc<ToolRegistry>,
        memory: Arc<dyn Memory>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            context_builder,
            tool_registry,
            memory,
            model: model.into(),
            temperature: 0.7,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_history: DEFAULT_MAX_HISTORY,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max.max(1);
        self
    }

    /// Exchanges replayed to the model; zero replays everything in memory.
    pub fn with_max_history(mut self, max: usize) -> Self {
        self.max_history = max;
        self
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn tool_registry(&self) -> &ToolRegistry {
        &self.tool_registry
    }

    /// Answers one user message. Never fails: provider or memory faults turn
    /// into an unsuccessful reply carrying the apology text.
    pub async fn process_query(&self, user_input: &str) -> AgentReply {
        match self.process(user_input).await {
            Ok((response, tool_calls)) => {
                if let Err(e) = self.memory.save_context(user_input, &response).await {
                    warn!("Failed to save exchange to memory: {:#}", e);
                }
                AgentReply::answered(response, tool_calls)
            }
            Err(e) => {
                error!("Error processing query: {:#}", e);
                AgentReply::failed(&e)
            }
        }
    }

    /// Runs the tool-calling loop for `message` on top of the stored history.
    /// Returns the final text and the names of the tools invoked.
    pub async fn process(&self, message: &str) -> Result<(String, Vec<String>)> {
        let history = self.history().await?;
        let mut messages = self.context_builder.build_messages(history, message);
        let tools = self.tool_registry.get_specs();
        let mut invoked = Vec::new();

        for iteration in 1..=self.max_iterations {
            let request = ChatRequest {
                messages: &messages,
                tools: if tools.is_empty() { None } else { Some(tools.as_slice()) },
            };

            let response = self
                .provider
                .chat(request, &self.model, self.temperature)
                .await?;

            let (assistant_text, tool_calls) = if response.has_tool_calls() {
                (response.text.unwrap_or_default(), response.tool_calls)
            } else if let Some(text) = response.text {
                parse_tool_calls_fallback(&text)
            } else {
                return Ok((NO_RESPONSE_MESSAGE.to_string(), invoked));
            };

            if tool_calls.is_empty() {
                return Ok((assistant_text, invoked));
            }

            debug!(iteration, calls = tool_calls.len(), "model requested tools");

            messages.push(ChatMessage::assistant_with_tool_calls(
                assistant_text,
                tool_calls.clone(),
            ));

            for tool_call in tool_calls {
                invoked.push(tool_call.name.clone());
                let result = self.execute_tool_call(&tool_call).await;
                messages.push(ChatMessage::tool_result(tool_call.id, result.content()));
            }
        }

        warn!(
            max_iterations = self.max_iterations,
            "Max iterations reached without a final answer"
        );
        Ok((MAX_ITERATIONS_MESSAGE.to_string(), invoked))
    }

    async fn execute_tool_call(&self, tool_call: &ToolCall) -> ToolResult {
        let raw = tool_call.arguments.trim();
        let parsed = if raw.is_empty() {
            Ok(serde_json::Value::Object(Default::default()))
        } else {
            serde_json::from_str::<serde_json::Value>(raw)
        };

        match parsed {
            Ok(args) => self.tool_registry.execute(&tool_call.name, args).await,
            Err(e) => ToolResult::error(format!(
                "Failed to parse tool arguments for {}: {}",
                tool_call.name, e
            )),
        }
    }

    /// The last `max_history` exchanges. User-context exchanges older than
    /// the window are kept in front of it.
    async fn history(&self) -> Result<Vec<ChatMessage>> {
        let entries = self.memory.entries().await?;
        let skip = match self.max_history {
            0 => 0,
            max => entries.len().saturating_sub(max),
        };
        let (older, recent) = entries.split_at(skip);

        let kept: Vec<MemoryEntry> = older
            .iter()
            .filter(|e| e.input == USER_CONTEXT_INPUT)
            .chain(recent)
            .cloned()
            .collect();
        Ok(to_history(&kept))
    }

    /// Stored exchanges as a `Human:`/`AI:` transcript.
    pub async fn conversation_history(&self) -> Result<String> {
        let entries = self.memory.entries().await?;
        Ok(format_buffer(&entries))
    }

    pub async fn clear_memory(&self) -> Result<()> {
        self.memory.clear().await
    }

    /// Records traveller preferences as a context exchange so later turns see
    /// them in the history. An empty context is ignored.
    pub async fn set_user_context(&self, context: &UserContext) -> Result<()> {
        if context.is_empty() {
            return Ok(());
        }
        self.memory
            .save_context(
                USER_CONTEXT_INPUT,
                &format!("Contexto del usuario: {}", context),
            )
            .await
    }
}

/// Pulls `<tool_call>{...}</tool_call>` blocks out of plain model text. Text
/// outside the tags is kept as the assistant's message.
fn parse_tool_calls_fallback(response: &str) -> (String, Vec<ToolCall>) {
    let mut text_parts = Vec::new();
    let mut calls = Vec::new();
    let mut remaining = response;

    while let Some(start) = remaining.find(TOOL_CALL_OPEN_TAG) {
        let after_open = &remaining[start + TOOL_CALL_OPEN_TAG.len()..];
        let Some(close_idx) = after_open.find(TOOL_CALL_CLOSE_TAG) else {
            break;
        };

        let before = remaining[..start].trim();
        if !before.is_empty() {
            text_parts.push(before.to_string());
        }

        for value in extract_json_values(&after_open[..close_idx]) {
            if let Some(call) = parse_tool_call_value(&value) {
                calls.push(call);
            }
        }

        remaining = &after_open[close_idx + TOOL_CALL_CLOSE_TAG.len()..];
    }

    if !remaining.trim().is_empty() {
        text_parts.push(remaining.trim().to_string());
    }

    (text_parts.join("\n"), calls)
}

fn extract_json_values(text: &str) -> Vec<serde_json::Value> {
    let mut values = Vec::new();
    let mut depth = 0usize;
    let mut start = None;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in text.char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            '{' if !in_string => {
                if depth == 0 {
                    start = Some(i);
                }
                depth += 1;
            }
            '}' if !in_string && depth > 0 => {
                depth -= 1;
                if depth == 0
                    && let Some(s) = start.take()
                    && let Ok(value) = serde_json::from_str::<serde_json::Value>(&text[s..=i])
                {
                    values.push(value);
                }
            }
            _ => {}
        }
    }

    values
}

fn parse_tool_call_value(value: &serde_json::Value) -> Option<ToolCall> {
    let name = value.get("name")?.as_str()?.to_string();
    let arguments = value
        .get("arguments")
        .cloned()
        .unwrap_or_else(|| serde_json::json!({}));
    let arguments_str = serde_json::to_string(&arguments).ok()?;
    let digest = md5::compute(format!("{}:{}", name, arguments_str).as_bytes());

    Some(ToolCall {
        id: format!("call_{:x}", digest),
        name,
        arguments: arguments_str,
    })
}
