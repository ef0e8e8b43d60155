use crate::memory::BufferMemory;
use crate::traits::Memory;
use std::sync::Arc;

pub fn create_memory(max_exchanges: usize) -> Arc<dyn Memory> {
    Arc::new(BufferMemory::new(max_exchanges))
}
