use super::registry::ToolRegistry;
use super::requests::{ListPurchasesRequest, RequestRefundRequest, SendRefundCompleteEmailRequest};
use super::schema::{InputSchema, ParamSpec, ToolDefinition};
use super::traits::ToolHandler;
use crate::downstream::RefundApiClient;
use crate::error::Result;
use crate::mcp::{ToolArguments, ToolCallResponse};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

pub const LIST_PURCHASES: &str = "list_purchases";
pub const REQUEST_REFUND: &str = "request_refund";
pub const SEND_REFUND_COMPLETE_EMAIL: &str = "send_refund_complete_email";

pub fn list_purchases_definition() -> ToolDefinition {
    ToolDefinition::new(
        LIST_PURCHASES,
        "List purchases that have been made (Read only)",
        InputSchema::new(vec![ParamSpec::string(
            "email",
            "Required so we don't access someone else's purchases",
            false,
        )]),
    )
}

pub fn request_refund_definition() -> ToolDefinition {
    ToolDefinition::new(
        REQUEST_REFUND,
        "Request refund for a purchase",
        InputSchema::new(vec![
            ParamSpec::string("purchase_id", "ID of the purchase to refund", true),
            ParamSpec::string("reason", "Reason for requesting the refund", true),
        ]),
    )
}

pub fn send_refund_complete_email_definition() -> ToolDefinition {
    ToolDefinition::new(
        SEND_REFUND_COMPLETE_EMAIL,
        "Send refund complete email",
        InputSchema::new(vec![
            ParamSpec::string("refund_id", "ID of the refund to complete", true),
            ParamSpec::string(
                "email",
                "Optional override email to send the notification to",
                false,
            ),
        ]),
    )
}

/// GET /api/listPurchases
pub struct ListPurchasesHandler {
    client: Arc<RefundApiClient>,
}

impl ListPurchasesHandler {
    pub fn new(client: Arc<RefundApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ToolHandler for ListPurchasesHandler {
    async fn call(&self, arguments: &ToolArguments) -> Result<ToolCallResponse> {
        let request = ListPurchasesRequest::from_arguments(arguments);
        let body = self.client.list_purchases(request.email.as_deref()).await?;
        Ok(ToolCallResponse::text(body))
    }
}

/// POST /api/requestRefund
pub struct RequestRefundHandler {
    client: Arc<RefundApiClient>,
}

impl RequestRefundHandler {
    pub fn new(client: Arc<RefundApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ToolHandler for RequestRefundHandler {
    async fn call(&self, arguments: &ToolArguments) -> Result<ToolCallResponse> {
        let request = match RequestRefundRequest::from_arguments(arguments) {
            Ok(request) => request,
            Err(e) => {
                debug!("Rejected {} call: {}", REQUEST_REFUND, e);
                return Ok(ToolCallResponse::text(e.to_string()));
            }
        };

        let body = self
            .client
            .request_refund(&request.purchase_id, &request.reason)
            .await?;
        Ok(ToolCallResponse::text(body))
    }
}

/// POST /api/sendRefundCompleteEmail
pub struct SendRefundCompleteEmailHandler {
    client: Arc<RefundApiClient>,
}

impl SendRefundCompleteEmailHandler {
    pub fn new(client: Arc<RefundApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ToolHandler for SendRefundCompleteEmailHandler {
    async fn call(&self, arguments: &ToolArguments) -> Result<ToolCallResponse> {
        let request = match SendRefundCompleteEmailRequest::from_arguments(arguments) {
            Ok(request) => request,
            Err(e) => {
                debug!("Rejected {} call: {}", SEND_REFUND_COMPLETE_EMAIL, e);
                return Ok(ToolCallResponse::text(e.to_string()));
            }
        };

        let body = self
            .client
            .send_refund_complete_email(&request.refund_id, request.email.as_deref())
            .await?;
        Ok(ToolCallResponse::text(body))
    }
}

/// Build the registry of all refund tools sharing one API client
pub fn default_registry(client: Arc<RefundApiClient>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(
        list_purchases_definition(),
        Arc::new(ListPurchasesHandler::new(client.clone())),
    );
    registry.register(
        request_refund_definition(),
        Arc::new(RequestRefundHandler::new(client.clone())),
    );
    registry.register(
        send_refund_complete_email_definition(),
        Arc::new(SendRefundCompleteEmailHandler::new(client)),
    );

    info!("Registered {} tools", registry.len());
    registry
}
