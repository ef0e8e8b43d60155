pub mod memory;
pub mod provider;
pub mod tool;

pub use memory::{Memory, MemoryEntry};
pub use provider::{ChatMessage, ChatRequest, ChatResponse, Provider, ToolCall};
pub use tool::{Tool, ToolResult, ToolSpec};
