use super::schema::ToolDefinition;
use super::traits::ToolHandler;
use crate::error::{BridgeError, Result};
use crate::mcp::{ToolArguments, ToolCallResponse};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Clone)]
struct RegisteredTool {
    definition: ToolDefinition,
    handler: Arc<dyn ToolHandler>,
}

/// Registry of tools by unique name. Populated once at startup.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. An existing tool of the same name is replaced in place.
    pub fn register(&mut self, definition: ToolDefinition, handler: Arc<dyn ToolHandler>) {
        let entry = RegisteredTool {
            definition,
            handler,
        };

        match self
            .tools
            .iter_mut()
            .find(|t| t.definition.name == entry.definition.name)
        {
            Some(existing) => {
                warn!("Replacing registered tool: {}", entry.definition.name);
                *existing = entry;
            }
            None => {
                debug!("Registered tool: {}", entry.definition.name);
                self.tools.push(entry);
            }
        }
    }

    /// Get a tool definition by name
    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.find(name).map(|t| &t.definition)
    }

    /// List all tool definitions in registration order
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Invoke the handler registered under `name`
    pub async fn dispatch(&self, name: &str, arguments: &ToolArguments) -> Result<ToolCallResponse> {
        let tool = self
            .find(name)
            .ok_or_else(|| BridgeError::UnknownTool(name.to_string()))?;

        debug!("Dispatching tool call: {}", name);
        tool.handler.call(arguments).await
    }

    fn find(&self, name: &str) -> Option<&RegisteredTool> {
        self.tools.iter().find(|t| t.definition.name == name)
    }
}
