use super::bridge::RefundBridge;
use crate::error::{BridgeError, Result};
use rmcp::ServiceExt;
use rmcp::service::QuitReason;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Lifecycle of the single transport session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BridgeState {
    Idle,
    Connected,
    Serving,
    Closed,
}

/// Serves one MCP session over a byte stream, then stops. No reconnection.
pub struct BridgeServer {
    bridge: RefundBridge,
    state: watch::Sender<BridgeState>,
    ct: CancellationToken,
}

impl BridgeServer {
    pub fn new(bridge: RefundBridge) -> Self {
        let (state, _) = watch::channel(BridgeState::Idle);
        Self {
            bridge,
            state,
            ct: CancellationToken::new(),
        }
    }

    pub fn state(&self) -> BridgeState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<BridgeState> {
        self.state.subscribe()
    }

    /// Cancelling the token ends the session as if the peer had disconnected
    pub fn cancellation_token(&self) -> CancellationToken {
        self.ct.clone()
    }

    /// Serve on the process's stdin/stdout
    pub async fn serve_stdio(self) -> Result<QuitReason> {
        let (stdin, stdout) = rmcp::transport::stdio();
        self.serve(stdin, stdout).await
    }

    /// Serve on an arbitrary byte stream pair until it closes
    pub async fn serve<R, W>(self, reader: R, writer: W) -> Result<QuitReason>
    where
        R: AsyncRead + Send + Unpin + 'static,
        W: AsyncWrite + Send + Unpin + 'static,
    {
        self.state.send_replace(BridgeState::Connected);
        if self.bridge.registry().is_empty() {
            warn!("No tools registered; clients will see an empty tool list");
        }
        info!(
            "Transport connected, waiting for MCP handshake ({} tools registered)",
            self.bridge.registry().len()
        );

        let service = match self
            .bridge
            .clone()
            .serve_with_ct((reader, writer), self.ct.clone())
            .await
        {
            Ok(service) => service,
            Err(e) => {
                error!("MCP handshake failed: {}", e);
                self.state.send_replace(BridgeState::Closed);
                return Err(BridgeError::Transport(format!(
                    "MCP handshake failed: {}",
                    e
                )));
            }
        };

        self.state.send_replace(BridgeState::Serving);
        info!("Serving MCP requests");

        let quit = service.waiting().await;
        self.state.send_replace(BridgeState::Closed);

        let reason = quit.map_err(|e| {
            error!("MCP service task failed: {}", e);
            BridgeError::Transport(format!("MCP service task failed: {}", e))
        })?;

        info!("MCP session closed: {:?}", reason);
        Ok(reason)
    }
}
