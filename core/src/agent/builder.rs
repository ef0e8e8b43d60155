use crate::agent::{AgentLoop, AgentProfile, ContextBuilder, ToolRegistry};
use crate::config::Config;
use crate::knowledge::KnowledgeBase;
use crate::memory::create_memory;
use crate::providers::create_provider;
use crate::tools::{WeatherTool, register_huaraz_tools};
use crate::traits::{Memory, Provider};
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

/// Wires a provider, the Huaraz tool set and a memory into an [`AgentLoop`].
pub struct AgentBuilder {
    provider: Arc<dyn Provider>,
    knowledge: KnowledgeBase,
    profile: AgentProfile,
    model: String,
    temperature: f64,
    max_iterations: Option<usize>,
    max_history: usize,
    memory: Option<Arc<dyn Memory>>,
    weather: Option<WeatherTool>,
    inline_tool_protocol: bool,
}

impl AgentBuilder {
    pub fn new(provider: Arc<dyn Provider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            knowledge: KnowledgeBase::huaraz(),
            profile: AgentProfile::default(),
            model: model.into(),
            temperature: 0.7,
            max_iterations: None,
            max_history: super::loop_::DEFAULT_MAX_HISTORY,
            memory: None,
            weather: None,
            inline_tool_protocol: false,
        }
    }

    /// Builder populated from the user's config: provider, model, profile,
    /// history window and (when enabled) the weather tool.
    pub fn from_config(config: &Config) -> Result<Self> {
        let provider: Arc<dyn Provider> = Arc::from(create_provider(config)?);
        let inline = provider.name() == "ollama";

        let mut builder = Self::new(provider, config.model.clone())
            .with_profile(config.profile)
            .with_temperature(config.temperature)
            .with_max_history(config.max_history)
            .with_inline_tool_protocol(inline);

        if let Some(max) = config.max_iterations {
            builder = builder.with_max_iterations(max);
        }

        if config.weather.enabled {
            let tool = WeatherTool::new(config.weather.client()?)
                .with_default_location(config.weather.location.clone());
            builder = builder.with_weather(tool);
        }

        Ok(builder)
    }

    pub fn with_knowledge(mut self, knowledge: KnowledgeBase) -> Self {
        self.knowledge = knowledge;
        self
    }

    pub fn with_profile(mut self, profile: AgentProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Overrides the profile's iteration limit.
    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = Some(max);
        self
    }

    pub fn with_max_history(mut self, max: usize) -> Self {
        self.max_history = max;
        self
    }

    pub fn with_memory(mut self, memory: Arc<dyn Memory>) -> Self {
        self.memory = Some(memory);
        self
    }

    pub fn with_weather(mut self, weather: WeatherTool) -> Self {
        self.weather = Some(weather);
        self
    }

    pub fn with_inline_tool_protocol(mut self, enabled: bool) -> Self {
        self.inline_tool_protocol = enabled;
        self
    }

    pub fn build(self) -> AgentLoop {
        let registry = ToolRegistry::new();
        register_huaraz_tools(&registry, self.knowledge, self.weather);

        let context_builder = ContextBuilder::new()
            .with_profile(self.profile)
            .with_tool_specs(registry.get_specs())
            .with_inline_tool_protocol(self.inline_tool_protocol);

        // The whole conversation is kept; `max_history` only limits replay.
        let memory = self.memory.unwrap_or_else(|| create_memory(0));
        let max_iterations = self
            .max_iterations
            .unwrap_or_else(|| self.profile.max_iterations());

        info!(
            provider = self.provider.name(),
            model = %self.model,
            profile = %self.profile,
            tools = registry.len(),
            "agent ready"
        );

        AgentLoop::new(
            self.provider,
            context_builder,
            Arc::new(registry),
            memory,
            self.model,
        )
        .with_temperature(self.temperature)
        .with_max_iterations(max_iterations)
        .with_max_history(self.max_history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::UserContext;
    use crate::agent::loop_::DEFAULT_MAX_HISTORY;
    use crate::queries::WeatherClient;
    use crate::traits::{ChatRequest, ChatResponse};
    use async_trait::async_trait;
    use std::time::Duration;

    struct EchoProvider;

    #[async_trait]
    impl Provider for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        async fn chat(
            &self,
            request: ChatRequest<'_>,
            _model: &str,
            _temperature: f64,
        ) -> Result<ChatResponse> {
            let last = request.messages.last().map(|m| m.content.clone());
            Ok(ChatResponse {
                text: last,
                tool_calls: Vec::new(),
            })
        }
    }

    #[test]
    fn registers_core_tools_without_weather() {
        let agent = AgentBuilder::new(Arc::new(EchoProvider), "m").build();
        assert_eq!(agent.tool_registry().len(), 7);
        assert!(!agent.tool_registry().names().contains(&"get_weather".to_string()));
    }

    #[test]
    fn weather_tool_is_optional() {
        let weather = WeatherTool::new(WeatherClient::new(None, Duration::from_secs(1)).unwrap());
        let agent = AgentBuilder::new(Arc::new(EchoProvider), "m")
            .with_weather(weather)
            .build();
        assert_eq!(agent.tool_registry().names().last().unwrap(), "get_weather");
    }

    #[tokio::test]
    async fn built_agent_answers() {
        let agent = AgentBuilder::new(Arc::new(EchoProvider), "m")
            .with_profile(AgentProfile::Expert)
            .build();
        let reply = agent.process_query("hola").await;
        assert!(reply.success);
        assert_eq!(reply.response, "hola");
        assert_eq!(agent.provider_name(), "echo");
    }

    #[tokio::test]
    async fn default_memory_keeps_whole_conversation() {
        let agent = AgentBuilder::new(Arc::new(EchoProvider), "m").build();
        agent
            .set_user_context(&UserContext {
                budget: Some("luxury".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        for i in 0..DEFAULT_MAX_HISTORY + 5 {
            agent.process_query(&format!("consulta {i}")).await;
        }

        let transcript = agent.conversation_history().await.unwrap();
        assert!(transcript.starts_with("Human: Información del usuario\nAI: Contexto del usuario"));
        assert!(transcript.contains("Human: consulta 0\n"));
    }

    #[test]
    fn from_config_uses_ollama_inline_protocol() {
        let config = Config {
            provider: Some("ollama".into()),
            model: "llama3.2".into(),
            ..Default::default()
        };
        let agent = AgentBuilder::from_config(&config).unwrap().build();
        assert_eq!(agent.provider_name(), "ollama");
        assert_eq!(agent.model(), "llama3.2");
        assert_eq!(agent.tool_registry().len(), 8);
    }
}
