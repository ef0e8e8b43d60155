use crate::traits::{Tool, ToolResult, ToolSpec};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

pub struct ToolRegistry {
    tools: Mutex<Vec<Arc<dyn Tool>>>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Arc<dyn Tool>>> {
        self.tools.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registering a name twice replaces the earlier tool.
    pub fn register(&self, tool: Box<dyn Tool>) {
        let mut tools = self.lock();
        tools.retain(|t| t.name() != tool.name());
        tools.push(Arc::from(tool));
    }

    pub fn register_all(&self, tools: Vec<Box<dyn Tool>>) {
        for tool in tools {
            self.register(tool);
        }
    }

    pub fn get_specs(&self) -> Vec<ToolSpec> {
        self.lock().iter().map(|t| t.spec()).collect()
    }

    pub fn names(&self) -> Vec<String> {
        self.lock().iter().map(|t| t.name().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub async fn execute(&self, name: &str, args: serde_json::Value) -> ToolResult {
        let tool = self.lock().iter().find(|t| t.name() == name).cloned();

        match tool {
            Some(tool) => {
                debug!("Executing tool {} with {}", name, args);
                match tool.execute(args).await {
                    Ok(result) => result,
                    Err(e) => ToolResult::error(format!("Execution failed: {}", e)),
                }
            }
            None => ToolResult::error(format!("Tool '{}' not found", name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeBase;
    use crate::tools::register_huaraz_tools;
    use serde_json::json;

    fn registry() -> ToolRegistry {
        let registry = ToolRegistry::new();
        register_huaraz_tools(&registry, KnowledgeBase::huaraz(), None);
        registry
    }

    #[tokio::test]
    async fn executes_registered_tool() {
        let result = registry()
            .execute("get_best_season", json!({"travel_style": "trekking"}))
            .await;
        assert!(result.success);
        assert!(result.output.contains("Cielo claro"));
    }

    #[tokio::test]
    async fn unknown_tool_is_error_result() {
        let result = registry().execute("book_flight", json!({})).await;
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Tool 'book_flight' not found"));
    }

    #[tokio::test]
    async fn missing_argument_is_error_result() {
        let result = registry().execute("get_attraction_details", json!({})).await;
        assert!(!result.success);
        assert_eq!(
            result.error.as_deref(),
            Some("Execution failed: Missing 'attraction_name' parameter")
        );
    }

    #[test]
    fn duplicate_registration_replaces() {
        let registry = registry();
        let before = registry.len();
        registry.register(Box::new(crate::tools::AltitudeAdviceTool));
        assert_eq!(registry.len(), before);
        assert_eq!(registry.get_specs().len(), before);
    }
}
