pub mod bridge;
pub mod server;
pub mod types;

pub use bridge::RefundBridge;
pub use server::{BridgeServer, BridgeState};
pub use types::{ToolArguments, ToolCallRequest, ToolCallResponse, ToolContent};
