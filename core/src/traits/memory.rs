use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One user/assistant exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryEntry {
    pub input: String,
    pub output: String,
    pub timestamp: String,
}

#[async_trait]
pub trait Memory: Send + Sync {
    fn name(&self) -> &str;

    async fn save_context(&self, input: &str, output: &str) -> anyhow::Result<()>;

    /// Entries oldest first.
    async fn entries(&self) -> anyhow::Result<Vec<MemoryEntry>>;

    async fn clear(&self) -> anyhow::Result<()>;

    async fn count(&self) -> anyhow::Result<usize>;
}
