use refund_bridge::config::ServerConfig;
use refund_bridge::downstream::RefundApiClient;
use refund_bridge::mcp::{BridgeServer, BridgeState, RefundBridge};
use refund_bridge::tools::default_registry;
use rmcp::ServiceExt;
use rmcp::model::{CallToolRequestParams, CallToolResult};
use rmcp::service::{QuitReason, RoleClient, RunningService, ServiceError};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub type Client = RunningService<RoleClient, ()>;

pub struct Session {
    pub client: Client,
    pub server: JoinHandle<refund_bridge::Result<QuitReason>>,
    pub state: watch::Receiver<BridgeState>,
}

/// Bridge wired to the given refund API base URL
pub fn build_bridge(base_url: &str) -> RefundBridge {
    let client = RefundApiClient::new(base_url, None).unwrap();
    RefundBridge::new(default_registry(Arc::new(client)), ServerConfig::default())
}

/// Start a bridge on an in-memory stream and connect an MCP client to it
pub async fn start_session(base_url: &str) -> Session {
    let (server_io, client_io) = tokio::io::duplex(64 * 1024);

    let server = BridgeServer::new(build_bridge(base_url));
    let state = server.subscribe();
    let (reader, writer) = tokio::io::split(server_io);
    let server = tokio::spawn(server.serve(reader, writer));

    let (reader, writer) = tokio::io::split(client_io);
    let client = ().serve((reader, writer)).await.unwrap();

    Session {
        client,
        server,
        state,
    }
}

/// Call a tool with a JSON object of arguments
pub async fn call(client: &Client, name: &str, arguments: Value) -> CallToolResult {
    try_call(client, name, arguments).await.unwrap()
}

pub async fn try_call(
    client: &Client,
    name: &str,
    arguments: Value,
) -> Result<CallToolResult, ServiceError> {
    client
        .call_tool(CallToolRequestParams {
            meta: None,
            name: name.to_string().into(),
            arguments: arguments.as_object().cloned(),
            task: None,
        })
        .await
}

/// Text of the single content block of a result
pub fn text_of(result: &CallToolResult) -> String {
    assert_eq!(result.content.len(), 1, "expected exactly one content block");
    result.content[0].as_text().unwrap().text.clone()
}
