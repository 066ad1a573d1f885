//! BridgeTrace API client.
//!
//! # Responsibilities
//! - Build requests against the fixed `/api/v2` paths
//! - Attach tenant and API-key headers to every request
//! - Surface non-success statuses as errors, pass JSON bodies through

use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;

use crate::config::{ClientConfig, RiskQuery, TraceRequest};
use crate::error::SdkError;

/// Client for the BridgeTrace HTTP API.
///
/// Holds only configuration and the underlying [`reqwest::Client`]; it has
/// no mutable state, so concurrent calls on one instance are independent.
#[derive(Debug, Clone)]
pub struct TraceClient {
    http: Client,
    config: ClientConfig,
}

impl TraceClient {
    /// Create a new client from `config`.
    ///
    /// Strips a single trailing slash from the base URL; no other
    /// validation is performed locally.
    pub fn new(mut config: ClientConfig) -> Self {
        if let Some(stripped) = config.base_url.strip_suffix('/') {
            config.base_url = stripped.to_string();
        }
        Self {
            http: Client::new(),
            config,
        }
    }

    /// The normalized base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Attach `X-Tenant-ID` and, when configured, `X-API-Key`.
    fn apply_headers(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header("X-Tenant-ID", &self.config.tenant_id);
        match &self.config.api_key {
            Some(key) => request.header("X-API-Key", key),
            None => request,
        }
    }

    /// Trace transaction flow starting from `request.source_id`.
    ///
    /// Returns the service's JSON response unmodified. Fails with
    /// [`SdkError::RequestFailed`] on any non-success status; transport
    /// failures propagate via [`SdkError::Transport`]. No retry is
    /// attempted.
    pub async fn trace(&self, request: TraceRequest) -> Result<Value, SdkError> {
        tracing::debug!(
            source_id = %request.source_id,
            max_hops = request.max_hops,
            "Sending trace request"
        );

        let url = format!("{}/api/v2/trace", self.config.base_url);
        let response = self
            .apply_headers(self.http.post(url))
            .json(&request)
            .send()
            .await?;

        self.decode(response).await
    }

    /// Fetch the risk profile for `entity_id` over the query's time window.
    ///
    /// Same response and error contract as [`TraceClient::trace`].
    pub async fn risk(&self, entity_id: &str, query: RiskQuery) -> Result<Value, SdkError> {
        tracing::debug!(entity_id, days = query.days, "Sending risk request");

        let url = format!("{}/api/v2/risk/{}", self.config.base_url, entity_id);
        let response = self
            .apply_headers(self.http.get(url))
            .query(&query)
            .send()
            .await?;

        self.decode(response).await
    }

    async fn decode(&self, response: Response) -> Result<Value, SdkError> {
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Service returned error status");
            return Err(SdkError::RequestFailed {
                status: status.as_u16(),
            });
        }
        Ok(response.json().await?)
    }
}
