use crate::traits::{Memory, MemoryEntry};
use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::sync::Mutex;

/// In-process conversation buffer. Keeps the most recent `max_exchanges`
/// exchanges; zero means unbounded.
pub struct BufferMemory {
    entries: Mutex<VecDeque<MemoryEntry>>,
    max_exchanges: usize,
}

impl Default for BufferMemory {
    fn default() -> Self {
        Self::new(0)
    }
}

impl BufferMemory {
    pub fn new(max_exchanges: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::new()),
            max_exchanges,
        }
    }
}

#[async_trait]
impl Memory for BufferMemory {
    fn name(&self) -> &str {
        "buffer"
    }

    async fn save_context(&self, input: &str, output: &str) -> anyhow::Result<()> {
        let mut entries = self.entries.lock().await;
        entries.push_back(MemoryEntry {
            input: input.to_string(),
            output: output.to_string(),
            timestamp: chrono::Local::now().to_rfc3339(),
        });

        if self.max_exchanges > 0 {
            while entries.len() > self.max_exchanges {
                entries.pop_front();
            }
        }

        Ok(())
    }

    async fn entries(&self) -> anyhow::Result<Vec<MemoryEntry>> {
        Ok(self.entries.lock().await.iter().cloned().collect())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        self.entries.lock().await.clear();
        Ok(())
    }

    async fn count(&self) -> anyhow::Result<usize> {
        Ok(self.entries.lock().await.len())
    }
}
