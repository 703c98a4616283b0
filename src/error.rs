use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Downstream request failed: {0}")]
    Downstream(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, BridgeError>;

impl BridgeError {
    /// Convert error to an MCP protocol error for the caller
    pub fn to_mcp_error(&self) -> rmcp::ErrorData {
        match self {
            BridgeError::UnknownTool(_) => rmcp::ErrorData::invalid_params(self.to_string(), None),
            BridgeError::Downstream(_) | BridgeError::Config(_) | BridgeError::Transport(_) => {
                rmcp::ErrorData::internal_error(self.to_string(), None)
            }
        }
    }
}

impl From<BridgeError> for rmcp::ErrorData {
    fn from(err: BridgeError) -> Self {
        err.to_mcp_error()
    }
}
