use crate::error::Result;
use crate::mcp::{ToolArguments, ToolCallResponse};
use async_trait::async_trait;

/// Handles invocations of a single registered tool.
///
/// Argument problems are reported inside the returned text result; only
/// transport-level failures of the downstream call surface as `Err`.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    async fn call(&self, arguments: &ToolArguments) -> Result<ToolCallResponse>;
}
