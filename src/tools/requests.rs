// Typed arguments for each tool. Absent, null and non-string values all count
// as missing.

use crate::mcp::ToolArguments;
use thiserror::Error;

/// Required arguments were missing from an invocation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The 'purchase_id' and 'reason' parameters are required.")]
    RefundFieldsMissing,

    #[error("The 'refund_id' is required.")]
    RefundIdMissing,
}

fn string_arg(arguments: &ToolArguments, key: &str) -> Option<String> {
    arguments
        .get(key)
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPurchasesRequest {
    pub email: Option<String>,
}

impl ListPurchasesRequest {
    /// Every argument is optional, so this never fails
    pub fn from_arguments(arguments: &ToolArguments) -> Self {
        Self {
            email: string_arg(arguments, "email"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestRefundRequest {
    pub purchase_id: String,
    pub reason: String,
}

impl RequestRefundRequest {
    pub fn from_arguments(arguments: &ToolArguments) -> Result<Self, ValidationError> {
        match (
            string_arg(arguments, "purchase_id"),
            string_arg(arguments, "reason"),
        ) {
            (Some(purchase_id), Some(reason)) => Ok(Self {
                purchase_id,
                reason,
            }),
            _ => Err(ValidationError::RefundFieldsMissing),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRefundCompleteEmailRequest {
    pub refund_id: String,
    pub email: Option<String>,
}

impl SendRefundCompleteEmailRequest {
    pub fn from_arguments(arguments: &ToolArguments) -> Result<Self, ValidationError> {
        let refund_id =
            string_arg(arguments, "refund_id").ok_or(ValidationError::RefundIdMissing)?;
        Ok(Self {
            refund_id,
            email: string_arg(arguments, "email"),
        })
    }
}
