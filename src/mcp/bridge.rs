// MCP server handler that exposes the tool registry to MCP clients.
// Each tools/call is dispatched to the matching handler, which makes one
// downstream HTTP call and relays the body as text.

use rmcp::model::{
    CallToolRequestParams, CallToolResult, Content, Implementation, ListToolsResult,
    PaginatedRequestParams, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use std::sync::Arc;
use tracing::{debug, warn};

use super::types::{ToolCallRequest, ToolContent};
use crate::config::ServerConfig;
use crate::tools::{ToolDefinition, ToolRegistry};

#[derive(Clone)]
pub struct RefundBridge {
    registry: Arc<ToolRegistry>,
    server: ServerConfig,
}

impl RefundBridge {
    pub fn new(registry: ToolRegistry, server: ServerConfig) -> Self {
        Self {
            registry: Arc::new(registry),
            server,
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Registered tools in the MCP wire model
    pub fn mcp_tools(&self) -> Vec<Tool> {
        self.registry
            .definitions()
            .into_iter()
            .map(to_mcp_tool)
            .collect()
    }

    /// Run one tool call through the registry
    pub async fn invoke(&self, request: ToolCallRequest) -> Result<CallToolResult, McpError> {
        let response = self
            .registry
            .dispatch(&request.name, &request.arguments)
            .await
            .map_err(|e| {
                warn!("Tool call '{}' failed: {}", request.name, e);
                McpError::from(e)
            })?;

        let content: Vec<Content> = response
            .content
            .into_iter()
            .map(|c| match c {
                ToolContent::Text { text } => Content::text(text),
            })
            .collect();

        Ok(CallToolResult::success(content))
    }
}

fn to_mcp_tool(definition: ToolDefinition) -> Tool {
    Tool {
        name: definition.name.into(),
        title: None,
        description: Some(definition.description.into()),
        input_schema: Arc::new(definition.input_schema.to_json_schema()),
        output_schema: None,
        annotations: None,
        icons: None,
        meta: None,
    }
}

impl ServerHandler for RefundBridge {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.server.name.clone(),
                version: self.server.version.clone(),
                ..Default::default()
            },
            instructions: Some(
                "Look up purchases, request refunds and send refund confirmation emails"
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_tool_list_changed()
                .build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _params: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        debug!("Listing {} tools", self.registry.len());
        Ok(ListToolsResult {
            meta: None,
            tools: self.mcp_tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        params: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Calling tool: {}", params.name);
        self.invoke(ToolCallRequest {
            name: params.name.to_string(),
            arguments: params.arguments.unwrap_or_default(),
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::downstream::RefundApiClient;
    use crate::tools::default_registry;
    use crate::mcp::ToolArguments;
    use rmcp::model::ErrorCode;
    use serde_json::json;

    fn request(name: &str) -> ToolCallRequest {
        ToolCallRequest {
            name: name.to_string(),
            arguments: ToolArguments::new(),
        }
    }

    fn bridge() -> RefundBridge {
        let client = RefundApiClient::new("http://localhost:5000/", None).unwrap();
        RefundBridge::new(default_registry(Arc::new(client)), ServerConfig::default())
    }

    #[test]
    fn test_server_info() {
        let info = bridge().get_info();
        assert_eq!(info.server_info.name, "refundpy");
        assert_eq!(info.server_info.version, "1.0.0");
        let tools = info.capabilities.tools.unwrap();
        assert_eq!(tools.list_changed, Some(true));
    }

    #[test]
    fn test_mcp_tools_advertise_schemas() {
        let tools = bridge().mcp_tools();
        assert_eq!(tools.len(), 3);

        let refund = tools.iter().find(|t| t.name == "request_refund").unwrap();
        assert_eq!(
            refund.description.as_deref(),
            Some("Request refund for a purchase")
        );
        assert_eq!(refund.input_schema["type"], json!("object"));
        assert_eq!(
            refund.input_schema["required"],
            json!(["purchase_id", "reason"])
        );
    }

    #[tokio::test]
    async fn test_invoke_unknown_tool_is_protocol_error() {
        let err = bridge()
            .invoke(request("cancel_order"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_invoke_validation_failure_is_success() {
        let result = bridge()
            .invoke(request("request_refund"))
            .await
            .unwrap();

        assert_ne!(result.is_error, Some(true));
        assert_eq!(result.content.len(), 1);
        let text = result.content[0].as_text().unwrap();
        assert_eq!(
            text.text,
            "The 'purchase_id' and 'reason' parameters are required."
        );
    }
}
