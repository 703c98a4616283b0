use crate::config::DownstreamConfig;
use crate::error::{BridgeError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Request, RequestBuilder, Url};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

const LIST_PURCHASES_PATH: &str = "api/listPurchases";
const REQUEST_REFUND_PATH: &str = "api/requestRefund";
const SEND_REFUND_COMPLETE_EMAIL_PATH: &str = "api/sendRefundCompleteEmail";

#[derive(Debug, Serialize)]
struct RefundRequestBody<'a> {
    purchase_id: &'a str,
    reason: &'a str,
}

#[derive(Debug, Serialize)]
struct SendRefundCompleteEmailBody<'a> {
    refund_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
}

/// HTTP client for the refund REST API.
///
/// Holds one connection pool for the lifetime of the process. Response bodies
/// are relayed as text whatever the status code.
#[derive(Debug, Clone)]
pub struct RefundApiClient {
    http: Client,
    base_url: Url,
}

impl RefundApiClient {
    pub fn new(base_url: &str, request_timeout: Option<Duration>) -> Result<Self> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| BridgeError::Config(format!("Invalid base URL '{}': {}", base_url, e)))?;
        // Endpoint paths are joined relative to the base, which needs a trailing slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = Client::builder();
        if let Some(timeout) = request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        info!("Refund API client targeting {}", base_url);
        Ok(Self { http, base_url })
    }

    pub fn from_config(config: &DownstreamConfig) -> Result<Self> {
        Self::new(
            &config.base_url,
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }

    /// Start a request to an API path; every request is sent as JSON
    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| BridgeError::Config(format!("Invalid endpoint path '{}': {}", path, e)))?;
        Ok(self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json"))
    }

    pub fn build_list_purchases(&self, email: Option<&str>) -> Result<Request> {
        let mut request = self.request(Method::GET, LIST_PURCHASES_PATH)?;
        if let Some(email) = email {
            request = request.query(&[("email", email)]);
        }
        Ok(request.build()?)
    }

    pub fn build_request_refund(&self, purchase_id: &str, reason: &str) -> Result<Request> {
        let body = RefundRequestBody {
            purchase_id,
            reason,
        };
        Ok(self
            .request(Method::POST, REQUEST_REFUND_PATH)?
            .json(&body)
            .build()?)
    }

    pub fn build_send_refund_complete_email(
        &self,
        refund_id: &str,
        email: Option<&str>,
    ) -> Result<Request> {
        let body = SendRefundCompleteEmailBody { refund_id, email };
        Ok(self
            .request(Method::POST, SEND_REFUND_COMPLETE_EMAIL_PATH)?
            .json(&body)
            .build()?)
    }

    /// Send a request and return the response body unparsed
    pub async fn execute(&self, request: Request) -> Result<String> {
        let method = request.method().clone();
        let url = request.url().clone();
        debug!("Downstream {} {}", method, url);

        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(
            "Downstream {} {} answered {} ({} bytes)",
            method,
            url,
            status,
            body.len()
        );
        Ok(body)
    }

    pub async fn list_purchases(&self, email: Option<&str>) -> Result<String> {
        let request = self.build_list_purchases(email)?;
        self.execute(request).await
    }

    pub async fn request_refund(&self, purchase_id: &str, reason: &str) -> Result<String> {
        let request = self.build_request_refund(purchase_id, reason)?;
        self.execute(request).await
    }

    pub async fn send_refund_complete_email(
        &self,
        refund_id: &str,
        email: Option<&str>,
    ) -> Result<String> {
        let request = self.build_send_refund_complete_email(refund_id, email)?;
        self.execute(request).await
    }
}
