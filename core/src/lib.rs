pub mod agent;
pub mod config;
pub mod knowledge;
pub mod memory;
pub mod providers;
pub mod queries;
pub mod tools;
pub mod traits;

pub use agent::{
    AgentBuilder, AgentLoop, AgentProfile, AgentReply, ContextBuilder, ToolRegistry, UserContext,
};
pub use config::{Config, WeatherConfig, config_exists, load_config, save_config};
pub use knowledge::KnowledgeBase;
pub use memory::{BufferMemory, create_memory};
pub use providers::{AnthropicProvider, OllamaProvider, OpenAIProvider, create_provider};
pub use tools::{huaraz_tools, register_huaraz_tools};
pub use traits::*;
