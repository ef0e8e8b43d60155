pub mod buffer;
pub mod factory;

pub use buffer::BufferMemory;
pub use factory::create_memory;

use crate::traits::{ChatMessage, MemoryEntry};

/// Replays stored exchanges as alternating user/assistant messages.
pub fn to_history(entries: &[MemoryEntry]) -> Vec<ChatMessage> {
    entries
        .iter()
        .flat_map(|e| {
            [
                ChatMessage::user(e.input.clone()),
                ChatMessage::assistant(e.output.clone()),
            ]
        })
        .collect()
}

/// Plain-text transcript, one `Human:`/`AI:` pair per exchange.
pub fn format_buffer(entries: &[MemoryEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("Human: {}\nAI: {}", e.input, e.output))
        .collect::<Vec<_>>()
        .join("\n")
}
